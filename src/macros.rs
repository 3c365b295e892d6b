//! Logging macros for ergonomic log message formatting.
//!
//! Each macro forwards to the matching `…f` method of a [`Logger`](crate::Logger)
//! with `format_args!`, so nothing is formatted when the severity is off.
//!
//! # Examples
//!
//! ```
//! use logwrap::prelude::*;
//! use logwrap::info;
//!
//! let logger = Logger::new(Options::discard());
//!
//! // Basic logging
//! info!(logger, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! ```

/// Log a formatted message at the given severity. Never terminates.
///
/// Evaluates to `true` when the severity was enabled.
///
/// # Examples
///
/// ```
/// # use logwrap::prelude::*;
/// # let logger = Logger::new(Options::discard());
/// use logwrap::log;
/// log!(logger, Severity::Info, "Simple message");
/// let written = log!(logger, Severity::Fatal, "Exit code: {}", 2);
/// assert!(written);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $severity:expr, $($arg:tt)+) => {
        $logger.log($severity, format_args!($($arg)+))
    };
}

/// Log a fatal-level message, then terminate if Fatal is enabled.
///
/// # Examples
///
/// ```
/// # use logwrap::prelude::*;
/// # let logger = Logger::new(Options::discard().with_level(LevelSet::ALL ^ LevelSet::FATAL));
/// use logwrap::fatal;
/// // Fatal is off here, so this neither writes nor exits
/// fatal!(logger, "Unable to recover from error: {}", "disk full");
/// ```
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatalf(format_args!($($arg)+))
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use logwrap::prelude::*;
/// # let logger = Logger::new(Options::discard());
/// use logwrap::error;
/// error!(logger, "Failed to connect to database");
/// error!(logger, "Error code: {}, message: {}", 500, "Internal error");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $logger.errorf(format_args!($($arg)+))
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use logwrap::prelude::*;
/// # let logger = Logger::new(Options::discard());
/// use logwrap::warn;
/// warn!(logger, "Low disk space");
/// warn!(logger, "Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $logger.warnf(format_args!($($arg)+))
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $logger.infof(format_args!($($arg)+))
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use logwrap::prelude::*;
/// # let logger = Logger::new(Options::discard());
/// use logwrap::debug;
/// debug!(logger, "Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $logger.debugf(format_args!($($arg)+))
    };
}

/// Log a trace-level message.
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $logger.tracef(format_args!($($arg)+))
    };
}
