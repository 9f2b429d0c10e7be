//! Log severity levels.

use std::fmt;

/// Log severity, ordered from least to most severe.
///
/// The total order is what level mapping between engines relies on. Engines
/// with a smaller level set collapse neighbors: slog has no panic/fatal
/// levels, so both map to its most severe level on the way in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Debugging information.
    Debug,
    /// General information.
    Info,
    /// Warning messages.
    Warn,
    /// Error messages.
    Error,
    /// Severe failure; the logging call unwinds the current operation.
    Panic,
    /// Unrecoverable failure; the logging call terminates the process.
    Fatal,
}

impl Level {
    /// Lowercase level name as emitted in structured output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
            Self::Panic => "panic",
            Self::Fatal => "fatal",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}
