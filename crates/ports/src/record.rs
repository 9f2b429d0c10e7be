//! Log records and caller attribution.

use crate::level::Level;
use std::fmt;

/// Source location of the original logging call site.
///
/// The location travels with the record as plain data. Adapters that cross an
/// engine boundary copy it into the target engine's native location slot
/// instead of counting stack frames, so attribution stays correct no matter
/// how many times a handle has been wrapped and unwrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    /// Source file of the call site.
    pub file: &'static str,
    /// 1-based line of the call site.
    pub line: u32,
}

impl CallSite {
    /// Capture the location of the caller of the enclosing
    /// `#[track_caller]` function.
    #[must_use]
    #[track_caller]
    pub fn caller() -> Self {
        let location = std::panic::Location::caller();
        Self {
            file: location.file(),
            line: location.line(),
        }
    }
}

/// A single leveled log call, borrowed for the duration of the dispatch.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    /// Severity of the call.
    pub level: Level,
    /// Preformatted message arguments.
    pub args: fmt::Arguments<'a>,
    /// Where the application issued the call.
    pub site: CallSite,
}
