//! Logger metrics for observability
//!
//! Counts lines handed to the streams and lines lost to write failures.

use std::sync::atomic::{AtomicU64, Ordering};

/// # Example
///
/// ```
/// use logwrap::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
///
/// metrics.record_emitted();
/// metrics.record_write_failure();
///
/// assert_eq!(metrics.emitted(), 1);
/// assert_eq!(metrics.write_failures(), 1);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Lines successfully written to a stream
    emitted: AtomicU64,

    /// Lines whose write returned an error
    write_failures: AtomicU64,
}

impl LoggerMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            emitted: AtomicU64::new(0),
            write_failures: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn emitted(&self) -> u64 {
        self.emitted.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn write_failures(&self) -> u64 {
        self.write_failures.load(Ordering::Relaxed)
    }

    /// Record a successful write
    #[inline]
    pub fn record_emitted(&self) {
        self.emitted.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a failed write, returning the previous failure count
    #[inline]
    pub fn record_write_failure(&self) -> u64 {
        self.write_failures.fetch_add(1, Ordering::Relaxed)
    }

    /// Percentage of writes that failed (0.0 - 100.0)
    pub fn failure_rate(&self) -> f64 {
        let failures = self.write_failures();
        let total = self.emitted() + failures;
        if total == 0 {
            return 0.0;
        }
        (failures as f64 / total as f64) * 100.0
    }

    /// Reset all counters to zero
    pub fn reset(&self) {
        self.emitted.store(0, Ordering::Relaxed);
        self.write_failures.store(0, Ordering::Relaxed);
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_metrics_are_zero() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.emitted(), 0);
        assert_eq!(metrics.write_failures(), 0);
        assert_eq!(metrics.failure_rate(), 0.0);
    }

    #[test]
    fn test_failure_rate() {
        let metrics = LoggerMetrics::new();
        for _ in 0..90 {
            metrics.record_emitted();
        }
        for _ in 0..10 {
            metrics.record_write_failure();
        }

        let rate = metrics.failure_rate();
        assert!((9.9..=10.1).contains(&rate), "Failure rate was {}", rate);
    }

    #[test]
    fn test_reset() {
        let metrics = LoggerMetrics::new();
        metrics.record_emitted();
        assert_eq!(metrics.record_write_failure(), 0);
        metrics.reset();
        assert_eq!(metrics.emitted(), 0);
        assert_eq!(metrics.write_failures(), 0);
    }
}
