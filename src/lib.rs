//! # logwrap
//!
//! A small leveled logging wrapper. Each of six severities (Fatal, Error,
//! Warn, Info, Debug, Trace) is switched on or off by a bitmask, and every
//! enabled severity writes through a line emitter bound to one of two
//! streams:
//!
//! - **Error stream**: Fatal, Error and Warn
//! - **Output stream**: Info, Debug and Trace
//!
//! ```
//! use logwrap::prelude::*;
//!
//! let logger = Options::new()
//!     .with_level(LevelSet::ERROR | LevelSet::INFO)
//!     .with_prefixes(Prefixes::standard())
//!     .build();
//!
//! logger.info("service started");
//! logger.debug("not written");
//! logwrap::error!(logger, "request {} failed", 7);
//! ```

pub mod appenders;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, FileAppender, MemoryAppender, WriterAppender};
    pub use crate::core::{
        Appender, Decorator, Flags, LevelSet, LineEmitter, Logger, LoggerError, LoggerMetrics,
        Options, Prefixes, ProcessExit, Result, Severity, Terminator, WriteTarget,
        FATAL_EXIT_CODE,
    };
}

pub use crate::appenders::{ConsoleAppender, FileAppender, MemoryAppender, WriterAppender};
pub use crate::core::{
    is_enabled, Appender, Decorator, Flags, LevelSet, LineEmitter, Logger, LoggerError,
    LoggerMetrics, Options, Prefixes, ProcessExit, Result, Severity, Terminator, WriteTarget,
    FATAL_EXIT_CODE,
};
