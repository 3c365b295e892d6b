//! Main logger implementation

use super::{
    appender::WriteTarget,
    emitter::LineEmitter,
    error::Result,
    flags::Flags,
    level::{LevelSet, Severity},
    metrics::LoggerMetrics,
    options::Options,
    terminator::FATAL_EXIT_CODE,
};
use parking_lot::{Mutex, RwLock};
use std::fmt;
use std::panic::Location;
use std::sync::Arc;

/// Options plus the six emitter slots bound from them.
///
/// Published as one unit so readers never see slots from two configurations.
struct Bound {
    options: Options,
    slots: [Option<LineEmitter>; 6],
}

impl Bound {
    fn new(options: Options) -> Self {
        let slots = Severity::ALL.map(|severity| {
            options.level.is_enabled(severity).then(|| {
                LineEmitter::new(
                    options.stream_for(severity).cloned(),
                    options
                        .decorator
                        .decorate(severity, options.prefixes.get(severity)),
                    options.flags,
                )
            })
        });
        Self { options, slots }
    }

    #[inline]
    fn slot(&self, severity: Severity) -> Option<&LineEmitter> {
        self.slots[severity.index()].as_ref()
    }

    /// Flush the streams this configuration writes to.
    fn flush(&self) -> Result<()> {
        if let Some(stderr) = &self.options.stderr {
            stderr.flush()?;
        }
        if let Some(stdout) = &self.options.stdout {
            stdout.flush()?;
        }
        Ok(())
    }
}

/// Leveled logger routing each severity to the error or the output stream.
///
/// A severity is either bound to an emitter or suppressed; suppressed calls
/// are complete no-ops. Reconfiguration replaces all six slots at once and
/// may happen while other threads are logging.
///
/// # Example
///
/// ```
/// use logwrap::prelude::*;
///
/// let out = MemoryAppender::new();
/// let logger = Logger::new(
///     Options::discard()
///         .with_stdout(out.clone())
///         .with_flags(Flags::NONE)
///         .with_level(LevelSet::DEBUG | LevelSet::ERROR),
/// );
///
/// logger.info("hidden");
/// logger.debugf(format_args!("{} items", 3));
/// assert_eq!(out.contents(), "3 items\n");
///
/// logger.set_level(LevelSet::ALL);
/// logger.info("visible");
/// assert_eq!(out.contents(), "3 items\nvisible\n");
/// ```
pub struct Logger {
    state: RwLock<Arc<Bound>>,
    /// Serializes `reset` and `set_level`; never held by emitting calls
    reconfigure: Mutex<()>,
    /// Metrics for observability (emitted lines, write failures)
    metrics: Arc<LoggerMetrics>,
}

macro_rules! severity_methods {
    ($severity:expr, $name:literal, $plain:ident, $formatted:ident, $line:ident) => {
        #[doc = concat!("Write `message` at ", $name, " level.")]
        ///
        /// Takes a single value; join several with `format_args!` through the
        /// formatted variant or the matching macro.
        #[track_caller]
        pub fn $plain(&self, message: impl fmt::Display) {
            self.emit($severity, Location::caller(), move || message.to_string());
        }

        #[doc = concat!("Write a formatted message at ", $name, " level.")]
        #[track_caller]
        pub fn $formatted(&self, args: fmt::Arguments<'_>) {
            self.emit($severity, Location::caller(), move || fmt::format(args));
        }

        #[doc = concat!("Write `message` and a line terminator at ", $name, " level.")]
        #[track_caller]
        pub fn $line(&self, message: impl fmt::Display) {
            self.emit($severity, Location::caller(), move || format!("{}\n", message));
        }
    };
}

impl Logger {
    #[must_use]
    pub fn new(options: Options) -> Self {
        Self {
            state: RwLock::new(Arc::new(Bound::new(options))),
            reconfigure: Mutex::new(()),
            metrics: Arc::new(LoggerMetrics::new()),
        }
    }

    /// Rebind every slot from `options`, discarding the previous configuration.
    pub fn reset(&self, options: Options) {
        let _guard = self.reconfigure.lock();
        let bound = Arc::new(Bound::new(options));
        *self.state.write() = bound;
    }

    /// Rebind every slot for `level`, keeping streams, prefixes and flags.
    ///
    /// Slots are built outside the state lock, so a decorator may read the
    /// logger while this runs.
    pub fn set_level(&self, level: LevelSet) {
        let _guard = self.reconfigure.lock();
        let options = Options {
            level,
            ..self.snapshot().options.clone()
        };
        let bound = Arc::new(Bound::new(options));
        *self.state.write() = bound;
    }

    pub fn level(&self) -> LevelSet {
        self.state.read().options.level
    }

    pub fn flags(&self) -> Flags {
        self.state.read().options.flags
    }

    /// Writer for Fatal, Error and Warn lines.
    pub fn stderr(&self) -> Option<WriteTarget> {
        self.state.read().options.stderr.clone()
    }

    /// Writer for Info, Debug and Trace lines.
    pub fn stdout(&self) -> Option<WriteTarget> {
        self.state.read().options.stdout.clone()
    }

    /// Snapshot of the current configuration.
    pub fn options(&self) -> Options {
        self.state.read().options.clone()
    }

    /// True when `severity` currently has a bound emitter.
    pub fn is_enabled(&self, severity: Severity) -> bool {
        self.state.read().slot(severity).is_some()
    }

    /// Get the logger metrics
    ///
    /// # Example
    ///
    /// ```
    /// use logwrap::{Logger, Options};
    ///
    /// let logger = Logger::new(Options::discard());
    /// logger.info("goes nowhere");
    ///
    /// let metrics = logger.metrics();
    /// println!("Emitted: {}", metrics.emitted());
    /// println!("Failure rate: {:.2}%", metrics.failure_rate());
    /// ```
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    pub fn flush(&self) -> Result<()> {
        self.snapshot().flush()
    }

    /// Write a formatted message at `severity` without ever terminating.
    ///
    /// Returns whether the severity was enabled. Pair with
    /// [`Logger::terminate`] to record a fatal condition and exit regardless
    /// of the configured level.
    #[track_caller]
    pub fn log(&self, severity: Severity, args: fmt::Arguments<'_>) -> bool {
        self.emit(severity, Location::caller(), move || fmt::format(args))
    }

    /// Flush both streams and hand `code` to the configured terminator.
    pub fn terminate(&self, code: i32) {
        Self::flush_and_terminate(&self.snapshot(), code);
    }

    /// Write `message` at Fatal level, then terminate.
    ///
    /// When Fatal is disabled nothing is written and the program keeps
    /// running. Use [`Logger::log`] with [`Logger::terminate`] when exit must
    /// not depend on the level.
    #[track_caller]
    pub fn fatal(&self, message: impl fmt::Display) {
        self.emit_fatal(Location::caller(), move || message.to_string());
    }

    /// Write a formatted message at Fatal level, then terminate.
    #[track_caller]
    pub fn fatalf(&self, args: fmt::Arguments<'_>) {
        self.emit_fatal(Location::caller(), move || fmt::format(args));
    }

    /// Write `message` and a line terminator at Fatal level, then terminate.
    #[track_caller]
    pub fn fatalln(&self, message: impl fmt::Display) {
        self.emit_fatal(Location::caller(), move || format!("{}\n", message));
    }

    severity_methods!(Severity::Error, "Error", error, errorf, errorln);
    severity_methods!(Severity::Warn, "Warn", warn, warnf, warnln);
    severity_methods!(Severity::Info, "Info", info, infof, infoln);
    severity_methods!(Severity::Debug, "Debug", debug, debugf, debugln);
    severity_methods!(Severity::Trace, "Trace", trace, tracef, traceln);

    #[inline]
    fn snapshot(&self) -> Arc<Bound> {
        Arc::clone(&self.state.read())
    }

    fn emit_fatal(&self, location: &Location<'_>, render: impl FnOnce() -> String) {
        let bound = self.snapshot();
        if self.emit_with(&bound, Severity::Fatal, location, render) {
            Self::flush_and_terminate(&bound, FATAL_EXIT_CODE);
        }
    }

    /// The streams flushed are the ones `bound` wrote to, even if the logger
    /// has been reconfigured since.
    fn flush_and_terminate(bound: &Bound, code: i32) {
        if let Err(e) = bound.flush() {
            eprintln!("[LOGGER ERROR] Failed to flush before exit: {}", e);
        }
        bound.options.terminator.terminate(code);
    }

    fn emit(
        &self,
        severity: Severity,
        location: &Location<'_>,
        render: impl FnOnce() -> String,
    ) -> bool {
        let bound = self.snapshot();
        self.emit_with(&bound, severity, location, render)
    }

    /// Returns false when the slot is empty; `render` is then never called.
    fn emit_with(
        &self,
        bound: &Bound,
        severity: Severity,
        location: &Location<'_>,
        render: impl FnOnce() -> String,
    ) -> bool {
        let Some(emitter) = bound.slot(severity) else {
            return false;
        };

        match emitter.output(location, &render()) {
            Ok(()) => self.metrics.record_emitted(),
            Err(e) => {
                let failures = self.metrics.record_write_failure();
                // Alert on first failure and periodically thereafter
                if failures == 0 || (failures + 1) % 1000 == 0 {
                    eprintln!(
                        "[LOGGER ERROR] {} write failed ({} failures so far): {}",
                        severity,
                        failures + 1,
                        e
                    );
                }
            }
        }
        true
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(Options::new())
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bound = self.snapshot();
        f.debug_struct("Logger")
            .field("level", &bound.options.level)
            .field("flags", &bound.options.flags)
            .field("metrics", &self.metrics)
            .finish()
    }
}
