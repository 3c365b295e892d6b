//! Logger configuration

use super::{
    appender::WriteTarget,
    flags::Flags,
    level::{LevelSet, Severity},
    logger::Logger,
    prefix::{Decorator, Prefixes},
    terminator::{ProcessExit, Terminator},
};
use crate::appenders::ConsoleAppender;
use std::sync::Arc;

/// Everything a [`Logger`] binds its emitters from.
///
/// Fatal, Error and Warn lines go to `stderr`; Info, Debug and Trace lines
/// go to `stdout`. Either stream may be left unset, which silences that
/// class of output without disabling its severities.
///
/// # Example
///
/// ```
/// use logwrap::prelude::*;
///
/// let logger = Options::new()
///     .with_level(LevelSet::ALL ^ LevelSet::DEBUG)
///     .with_flags(Flags::STD | Flags::SHORT_FILE)
///     .with_prefixes(Prefixes::standard())
///     .build();
///
/// assert!(!logger.is_enabled(Severity::Debug));
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    pub stderr: Option<WriteTarget>,
    pub stdout: Option<WriteTarget>,
    pub flags: Flags,
    pub level: LevelSet,
    pub prefixes: Prefixes,
    pub decorator: Decorator,
    pub terminator: Arc<dyn Terminator>,
}

impl Options {
    /// Console streams, date and time headers, every severity on, no prefixes.
    pub fn new() -> Self {
        Self {
            stderr: Some(WriteTarget::new(ConsoleAppender::stderr())),
            stdout: Some(WriteTarget::new(ConsoleAppender::stdout())),
            flags: Flags::STD,
            level: LevelSet::ALL,
            prefixes: Prefixes::none(),
            decorator: Decorator::plain(),
            terminator: Arc::new(ProcessExit),
        }
    }

    /// Like [`Options::new`] but with no streams at all.
    pub fn discard() -> Self {
        Self {
            stderr: None,
            stdout: None,
            ..Self::new()
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_stderr(mut self, target: impl Into<WriteTarget>) -> Self {
        self.stderr = Some(target.into());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_stdout(mut self, target: impl Into<WriteTarget>) -> Self {
        self.stdout = Some(target.into());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_flags(mut self, flags: Flags) -> Self {
        self.flags = flags;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_level(mut self, level: LevelSet) -> Self {
        self.level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_prefixes(mut self, prefixes: Prefixes) -> Self {
        self.prefixes = prefixes;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_prefix(mut self, severity: Severity, prefix: impl Into<String>) -> Self {
        self.prefixes = self.prefixes.with(severity, prefix);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_decorator(mut self, decorator: Decorator) -> Self {
        self.decorator = decorator;
        self
    }

    /// Replace what happens after a fatal line is written.
    #[must_use = "builder methods return a new value"]
    pub fn with_terminator<T: Terminator + 'static>(mut self, terminator: T) -> Self {
        self.terminator = Arc::new(terminator);
        self
    }

    /// Stream a severity is routed to.
    pub fn stream_for(&self, severity: Severity) -> Option<&WriteTarget> {
        if severity.is_error_class() {
            self.stderr.as_ref()
        } else {
            self.stdout.as_ref()
        }
    }

    /// Create a [`Logger`] from these options.
    pub fn build(self) -> Logger {
        Logger::new(self)
    }
}

impl Default for Options {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appenders::MemoryAppender;

    #[test]
    fn test_defaults() {
        let options = Options::new();
        assert_eq!(options.level, LevelSet::ALL);
        assert_eq!(options.flags, Flags::STD);
        assert_eq!(options.prefixes, Prefixes::none());
        assert!(options.stderr.is_some());
        assert!(options.stdout.is_some());
    }

    #[test]
    fn test_discard_has_no_streams() {
        let options = Options::discard();
        assert!(options.stderr.is_none());
        assert!(options.stdout.is_none());
        assert_eq!(options.level, LevelSet::ALL);
    }

    #[test]
    fn test_stream_routing() {
        let err = MemoryAppender::new();
        let out = MemoryAppender::new();
        let options = Options::new().with_stderr(err).with_stdout(out);

        let stderr = options.stderr.clone().unwrap();
        let stdout = options.stdout.clone().unwrap();
        for severity in [Severity::Fatal, Severity::Error, Severity::Warn] {
            assert!(options.stream_for(severity).unwrap().same_stream(&stderr));
        }
        for severity in [Severity::Info, Severity::Debug, Severity::Trace] {
            assert!(options.stream_for(severity).unwrap().same_stream(&stdout));
        }
    }

    #[test]
    fn test_with_prefix() {
        let options = Options::new()
            .with_prefixes(Prefixes::standard())
            .with_prefix(Severity::Error, "E ");
        assert_eq!(options.prefixes.get(Severity::Error), "E ");
        assert_eq!(options.prefixes.get(Severity::Warn), "WARN: ");
    }
}
