//! Line header flags
//!
//! Flags control the decoration written in front of every emitted line:
//! date, time, caller location, and where the prefix is placed. The bit
//! values match the conventional line-logger header flags so that a value
//! taken from another tool can be passed through unchanged.
//!
//! ```text
//! DATE          2009/01/23
//! TIME          01:23:23
//! MICROSECONDS  01:23:23.123123
//! LONG_FILE     /a/b/c/src/main.rs:23
//! SHORT_FILE    main.rs:23
//! ```
//!
//! With `DATE | TIME | SHORT_FILE` and prefix `"INFO: "` a line reads
//! `INFO: 2009/01/23 01:23:23 main.rs:23: message`.

use chrono::{DateTime, Local, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::Write as _;
use std::ops::{BitOr, BitOrAssign};
use std::panic::Location;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Flags(u32);

impl Flags {
    pub const NONE: Flags = Flags(0);
    /// Date in the local time zone: `2009/01/23`
    pub const DATE: Flags = Flags(1);
    /// Time in the local time zone: `01:23:23`
    pub const TIME: Flags = Flags(1 << 1);
    /// Microsecond resolution: `01:23:23.123123`. Implies `TIME`.
    pub const MICROSECONDS: Flags = Flags(1 << 2);
    /// Full file path and line number: `/a/b/c/src/main.rs:23`
    pub const LONG_FILE: Flags = Flags(1 << 3);
    /// Final file name element and line number: `main.rs:23`. Overrides `LONG_FILE`.
    pub const SHORT_FILE: Flags = Flags(1 << 4);
    /// Use UTC rather than the local time zone
    pub const UTC: Flags = Flags(1 << 5);
    /// Move the prefix from the beginning of the line to before the message
    pub const MSG_PREFIX: Flags = Flags(1 << 6);
    /// Initial values for a standard logger
    pub const STD: Flags = Flags(Self::DATE.0 | Self::TIME.0);

    #[inline]
    pub const fn from_bits(bits: u32) -> Self {
        Flags(bits)
    }

    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// True when any bit of `other` is set in `self`.
    #[inline]
    pub const fn intersects(self, other: Flags) -> bool {
        self.0 & other.0 != 0
    }

    #[inline]
    pub const fn contains(self, other: Flags) -> bool {
        self.0 & other.0 == other.0
    }

    /// True when the header needs the current time.
    #[inline]
    pub const fn needs_time(self) -> bool {
        self.intersects(Flags(Self::DATE.0 | Self::TIME.0 | Self::MICROSECONDS.0))
    }

    /// Render the header for a line emitted at `time` from `location`.
    ///
    /// The result carries its own trailing space and is empty when no
    /// header flag is set.
    #[must_use]
    pub fn header(self, time: &DateTime<Utc>, location: &Location<'_>) -> String {
        let mut header = String::new();

        if self.needs_time() {
            if self.contains(Flags::UTC) {
                self.write_time(&mut header, time);
            } else {
                self.write_time(&mut header, &time.with_timezone(&Local));
            }
        }

        if self.intersects(Flags(Self::LONG_FILE.0 | Self::SHORT_FILE.0)) {
            let file = if self.contains(Flags::SHORT_FILE) {
                short_file(location.file())
            } else {
                location.file()
            };
            let _ = write!(header, "{}:{}: ", file, location.line());
        }

        header
    }

    fn write_time<Tz>(self, out: &mut String, time: &DateTime<Tz>)
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        if self.contains(Flags::DATE) {
            let _ = write!(out, "{} ", time.format("%Y/%m/%d"));
        }
        if self.intersects(Flags(Self::TIME.0 | Self::MICROSECONDS.0)) {
            if self.contains(Flags::MICROSECONDS) {
                let _ = write!(out, "{} ", time.format("%H:%M:%S%.6f"));
            } else {
                let _ = write!(out, "{} ", time.format("%H:%M:%S"));
            }
        }
    }
}

fn short_file(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

impl BitOr for Flags {
    type Output = Flags;

    fn bitor(self, rhs: Flags) -> Flags {
        Flags(self.0 | rhs.0)
    }
}

impl BitOrAssign for Flags {
    fn bitor_assign(&mut self, rhs: Flags) {
        self.0 |= rhs.0;
    }
}
