//! Line emitter bound to one stream, one prefix and one set of flags

use super::{appender::WriteTarget, error::Result, flags::Flags};
use chrono::Utc;
use std::fmt;
use std::panic::Location;

#[derive(Debug, Clone)]
pub struct LineEmitter {
    target: Option<WriteTarget>,
    prefix: String,
    flags: Flags,
}

impl LineEmitter {
    /// Bind an emitter. A `None` target makes every write a silent no-op.
    pub fn new(target: Option<WriteTarget>, prefix: impl Into<String>, flags: Flags) -> Self {
        Self {
            target,
            prefix: prefix.into(),
            flags,
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn flags(&self) -> Flags {
        self.flags
    }

    pub fn target(&self) -> Option<&WriteTarget> {
        self.target.as_ref()
    }

    /// Write `message` as-is.
    #[track_caller]
    pub fn print(&self, message: impl fmt::Display) -> Result<()> {
        self.output(Location::caller(), &message.to_string())
    }

    /// Write a formatted message.
    #[track_caller]
    pub fn printf(&self, args: fmt::Arguments<'_>) -> Result<()> {
        self.output(Location::caller(), &fmt::format(args))
    }

    /// Write `message` followed by a line terminator.
    #[track_caller]
    pub fn println(&self, message: impl fmt::Display) -> Result<()> {
        self.output(Location::caller(), &format!("{}\n", message))
    }

    /// Render one line and hand it to the stream.
    ///
    /// A terminator is appended unless `message` already ends with one, so
    /// each call produces exactly one line.
    pub fn output(&self, location: &Location<'_>, message: &str) -> Result<()> {
        let Some(target) = &self.target else {
            return Ok(());
        };
        target.append(&self.render(location, message))
    }

    fn render(&self, location: &Location<'_>, message: &str) -> String {
        let header = self.flags.header(&Utc::now(), location);

        let mut line =
            String::with_capacity(self.prefix.len() + header.len() + message.len() + 1);
        if !self.flags.contains(Flags::MSG_PREFIX) {
            line.push_str(&self.prefix);
        }
        line.push_str(&header);
        if self.flags.contains(Flags::MSG_PREFIX) {
            line.push_str(&self.prefix);
        }
        line.push_str(message);
        if !message.ends_with('\n') {
            line.push('\n');
        }
        line
    }
}
