//! Severity and level-mask definitions
//!
//! A [`LevelSet`] is a bitmask over the six severities plus the [`LevelSet::OFF`]
//! override bit. Severity bits are OR'ed together, so regardless of the order
//! they appear in, every severity present in the mask is turned on:
//!
//! ```
//! use logwrap::{LevelSet, Severity};
//!
//! // Only Fatal and Debug
//! let mask = LevelSet::FATAL | LevelSet::DEBUG;
//! assert!(mask.is_enabled(Severity::Debug));
//! assert!(!mask.is_enabled(Severity::Info));
//!
//! // Everything but Debug
//! let mask = LevelSet::ALL ^ LevelSet::DEBUG;
//! assert!(!mask.is_enabled(Severity::Debug));
//!
//! // OFF wins over any other bit
//! let mask = LevelSet::OFF | LevelSet::ALL;
//! assert!(mask.enabled().next().is_none());
//! ```

use super::error::{LoggerError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    Fatal = 0,
    Error = 1,
    Warn = 2,
    Info = 3,
    Debug = 4,
    Trace = 5,
}

impl Severity {
    /// All severities in slot order.
    pub const ALL: [Severity; 6] = [
        Severity::Fatal,
        Severity::Error,
        Severity::Warn,
        Severity::Info,
        Severity::Debug,
        Severity::Trace,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            Severity::Fatal => "FATAL",
            Severity::Error => "ERROR",
            Severity::Warn => "WARN",
            Severity::Info => "INFO",
            Severity::Debug => "DEBUG",
            Severity::Trace => "TRACE",
        }
    }

    /// The single-bit mask selecting this severity.
    #[inline]
    pub const fn bit(self) -> LevelSet {
        LevelSet(1 << (self as u8 + 1))
    }

    #[inline]
    pub(crate) const fn index(self) -> usize {
        self as usize
    }

    /// Fatal, Error and Warn go to the error stream; the rest to the output stream.
    #[inline]
    pub const fn is_error_class(self) -> bool {
        matches!(self, Severity::Fatal | Severity::Error | Severity::Warn)
    }

    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            Severity::Fatal => White,
            Severity::Error => Red,
            Severity::Warn => Yellow,
            Severity::Info => Green,
            Severity::Debug => Cyan,
            Severity::Trace => Blue,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for Severity {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_uppercase().as_str() {
            "FATAL" => Ok(Severity::Fatal),
            "ERROR" => Ok(Severity::Error),
            "WARN" | "WARNING" => Ok(Severity::Warn),
            "INFO" => Ok(Severity::Info),
            "DEBUG" => Ok(Severity::Debug),
            "TRACE" => Ok(Severity::Trace),
            _ => Err(LoggerError::invalid_level(s, "unknown severity")),
        }
    }
}

/// Bitmask selecting which severities are active.
///
/// Serialized as its integer value; undefined bits are dropped on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub struct LevelSet(u8);

impl LevelSet {
    /// No bits at all. Behaves like [`LevelSet::OFF`].
    pub const NONE: LevelSet = LevelSet(0);
    /// Override bit: when present, every severity is disabled.
    pub const OFF: LevelSet = LevelSet(1);
    pub const FATAL: LevelSet = Severity::Fatal.bit();
    pub const ERROR: LevelSet = Severity::Error.bit();
    pub const WARN: LevelSet = Severity::Warn.bit();
    pub const INFO: LevelSet = Severity::Info.bit();
    pub const DEBUG: LevelSet = Severity::Debug.bit();
    pub const TRACE: LevelSet = Severity::Trace.bit();
    /// Union of the six severity bits. Never includes `OFF`.
    pub const ALL: LevelSet = LevelSet(
        Self::FATAL.0 | Self::ERROR.0 | Self::WARN.0 | Self::INFO.0 | Self::DEBUG.0 | Self::TRACE.0,
    );

    const DEFINED: u8 = Self::OFF.0 | Self::ALL.0;

    /// Build a mask from raw bits, dropping bits outside the defined range.
    #[inline]
    pub const fn from_bits_truncate(bits: u8) -> Self {
        LevelSet(bits & Self::DEFINED)
    }

    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// True when every bit of `other` is also set in `self`.
    #[inline]
    pub const fn contains(self, other: LevelSet) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    pub const fn is_off(self) -> bool {
        self.0 & Self::OFF.0 != 0
    }

    /// `OFF` is checked first: a mask carrying it disables everything.
    #[inline]
    pub const fn is_enabled(self, severity: Severity) -> bool {
        !self.is_off() && self.0 & severity.bit().0 != 0
    }

    /// Severities this mask turns on, in slot order.
    pub fn enabled(self) -> impl Iterator<Item = Severity> {
        Severity::ALL
            .into_iter()
            .filter(move |severity| self.is_enabled(*severity))
    }

    /// Read a mask from an environment variable.
    ///
    /// Returns `Ok(None)` when the variable is not set.
    ///
    /// ```
    /// use logwrap::LevelSet;
    ///
    /// let mask = LevelSet::from_env("LOGWRAP_DOC_LEVEL_UNSET").unwrap();
    /// assert_eq!(mask.unwrap_or(LevelSet::ALL), LevelSet::ALL);
    /// ```
    pub fn from_env(var: &str) -> Result<Option<Self>> {
        Self::from_var(var, std::env::var(var))
    }

    fn from_var(
        var: &str,
        value: std::result::Result<String, std::env::VarError>,
    ) -> Result<Option<Self>> {
        match value {
            Ok(value) => value.parse().map(Some),
            Err(std::env::VarError::NotPresent) => Ok(None),
            Err(std::env::VarError::NotUnicode(_)) => Err(LoggerError::config(
                "LevelSet",
                format!("environment variable {} is not valid unicode", var),
            )),
        }
    }

    fn parse_token(token: &str) -> Option<LevelSet> {
        if let Ok(bits) = token.parse::<u8>() {
            return Some(LevelSet::from_bits_truncate(bits));
        }
        match token.to_uppercase().as_str() {
            "OFF" => Some(LevelSet::OFF),
            "NONE" => Some(LevelSet::NONE),
            "ALL" => Some(LevelSet::ALL),
            other => other.parse::<Severity>().ok().map(Severity::bit),
        }
    }
}

impl From<u8> for LevelSet {
    fn from(bits: u8) -> Self {
        LevelSet::from_bits_truncate(bits)
    }
}

impl From<LevelSet> for u8 {
    fn from(set: LevelSet) -> Self {
        set.0
    }
}

impl From<Severity> for LevelSet {
    fn from(severity: Severity) -> Self {
        severity.bit()
    }
}

/// Formats as `NONE`, `ALL`, `OFF|…` or the active names joined by `|`.
impl fmt::Display for LevelSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0 {
            return f.write_str("NONE");
        }

        let mut names: Vec<&str> = Vec::new();
        if self.is_off() {
            names.push("OFF");
        }
        if self.contains(LevelSet::ALL) {
            names.push("ALL");
        } else {
            names.extend(
                Severity::ALL
                    .iter()
                    .filter(|severity| self.contains(severity.bit()))
                    .map(|severity| severity.to_str()),
            );
        }
        f.write_str(&names.join("|"))
    }
}

/// Parses names or decimal numbers joined by `|` or `,`.
///
/// A token with a leading `-` is removed from the set built so far, so
/// `"all,-debug"` equals `LevelSet::ALL ^ LevelSet::DEBUG`.
impl FromStr for LevelSet {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().is_empty() {
            return Err(LoggerError::invalid_level(s, "empty level"));
        }

        let mut set = LevelSet::NONE;
        for raw in s.split(['|', ',']) {
            let token = raw.trim();
            let (remove, name) = match token.strip_prefix('-') {
                Some(rest) => (true, rest.trim()),
                None => (false, token),
            };

            let bits = Self::parse_token(name).ok_or_else(|| {
                LoggerError::invalid_level(s, format!("unknown level '{}'", name))
            })?;

            if remove {
                set.0 &= !bits.0;
            } else {
                set.0 |= bits.0;
            }
        }
        Ok(set)
    }
}

impl BitOr for LevelSet {
    type Output = LevelSet;

    fn bitor(self, rhs: LevelSet) -> LevelSet {
        LevelSet(self.0 | rhs.0)
    }
}

impl BitOr<Severity> for LevelSet {
    type Output = LevelSet;

    fn bitor(self, rhs: Severity) -> LevelSet {
        self | rhs.bit()
    }
}

impl BitOr for Severity {
    type Output = LevelSet;

    fn bitor(self, rhs: Severity) -> LevelSet {
        self.bit() | rhs.bit()
    }
}

impl BitAnd for LevelSet {
    type Output = LevelSet;

    fn bitand(self, rhs: LevelSet) -> LevelSet {
        LevelSet(self.0 & rhs.0)
    }
}

impl BitXor for LevelSet {
    type Output = LevelSet;

    fn bitxor(self, rhs: LevelSet) -> LevelSet {
        LevelSet(self.0 ^ rhs.0)
    }
}

/// Complement over the six severity bits; `OFF` is never produced.
impl Not for LevelSet {
    type Output = LevelSet;

    fn not(self) -> LevelSet {
        LevelSet(!self.0 & LevelSet::ALL.0)
    }
}

impl BitOrAssign for LevelSet {
    fn bitor_assign(&mut self, rhs: LevelSet) {
        self.0 |= rhs.0;
    }
}

impl BitAndAssign for LevelSet {
    fn bitand_assign(&mut self, rhs: LevelSet) {
        self.0 &= rhs.0;
    }
}

impl BitXorAssign for LevelSet {
    fn bitxor_assign(&mut self, rhs: LevelSet) {
        self.0 ^= rhs.0;
    }
}

/// Free-function form of [`LevelSet::is_enabled`].
#[inline]
pub const fn is_enabled(mask: LevelSet, severity: Severity) -> bool {
    mask.is_enabled(severity)
}
