//! Per-severity prefixes and prefix decoration

use super::level::Severity;
use colored::Colorize;
use std::fmt;
use std::sync::Arc;

/// Immutable table of the text written in front of each severity's lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Prefixes {
    table: [String; 6],
}

impl Prefixes {
    /// Empty prefix for every severity.
    pub fn none() -> Self {
        Self::default()
    }

    /// `"FATAL: "`, `"ERROR: "`, `"WARN: "`, `"INFO: "`, `"DEBUG: "`, `"TRACE: "`.
    pub fn standard() -> Self {
        Self {
            table: Severity::ALL.map(|severity| format!("{}: ", severity.to_str())),
        }
    }

    #[must_use]
    pub fn with(mut self, severity: Severity, prefix: impl Into<String>) -> Self {
        self.table[severity.index()] = prefix.into();
        self
    }

    pub fn get(&self, severity: Severity) -> &str {
        &self.table[severity.index()]
    }
}

type DecorateFn = dyn Fn(Severity, &str) -> String + Send + Sync;

/// Pure function applied to each prefix when a logger binds its emitters.
///
/// # Example
///
/// ```
/// use logwrap::{Decorator, Severity};
///
/// let bracketed = Decorator::new(|severity, prefix| format!("[{}] {}", severity, prefix));
/// assert_eq!(bracketed.decorate(Severity::Warn, "disk: "), "[WARN] disk: ");
/// ```
#[derive(Clone)]
pub struct Decorator {
    kind: DecoratorKind,
}

#[derive(Clone)]
enum DecoratorKind {
    Plain,
    Ansi,
    Custom(Arc<DecorateFn>),
}

impl Decorator {
    pub fn new<F>(decorate: F) -> Self
    where
        F: Fn(Severity, &str) -> String + Send + Sync + 'static,
    {
        Self {
            kind: DecoratorKind::Custom(Arc::new(decorate)),
        }
    }

    /// Leaves prefixes untouched.
    pub fn plain() -> Self {
        Self {
            kind: DecoratorKind::Plain,
        }
    }

    /// Paints each prefix in its severity's terminal color.
    ///
    /// Whether escape codes are actually produced follows the `colored`
    /// crate's environment detection (`NO_COLOR`, `CLICOLOR_FORCE`, ...).
    pub fn ansi() -> Self {
        Self {
            kind: DecoratorKind::Ansi,
        }
    }

    pub fn decorate(&self, severity: Severity, prefix: &str) -> String {
        match &self.kind {
            DecoratorKind::Plain => prefix.to_string(),
            DecoratorKind::Ansi if prefix.is_empty() => String::new(),
            DecoratorKind::Ansi => prefix.color(severity.color_code()).to_string(),
            DecoratorKind::Custom(decorate) => decorate(severity, prefix),
        }
    }
}

impl Default for Decorator {
    fn default() -> Self {
        Self::plain()
    }
}

impl fmt::Debug for Decorator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self.kind {
            DecoratorKind::Plain => "plain",
            DecoratorKind::Ansi => "ansi",
            DecoratorKind::Custom(_) => "custom",
        };
        f.debug_tuple("Decorator").field(&name).finish()
    }
}
