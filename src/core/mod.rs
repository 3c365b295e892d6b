//! Core logger types and traits

pub mod appender;
pub mod emitter;
pub mod error;
pub mod flags;
pub mod level;
pub mod logger;
pub mod metrics;
pub mod options;
pub mod prefix;
pub mod terminator;

pub use appender::{Appender, WriteTarget};
pub use emitter::LineEmitter;
pub use error::{LoggerError, Result};
pub use flags::Flags;
pub use level::{is_enabled, LevelSet, Severity};
pub use logger::Logger;
pub use metrics::LoggerMetrics;
pub use options::Options;
pub use prefix::{Decorator, Prefixes};
pub use terminator::{ProcessExit, Terminator, FATAL_EXIT_CODE};
