//! Minimal leveled-logger boundary contract.

use crate::field::{FieldValue, Fields};
use crate::level::Level;
use crate::record::{CallSite, Record};
use std::fmt;

/// Reserved key used by [`Logger::with_error`].
pub const ERROR_FIELD: &str = "error";

/// The small, stable logging contract that application code depends on.
///
/// Handles are immutable: deriving a child via `with_field`/`with_fields`
/// never changes what the receiver logs afterwards, so a base logger can be
/// branched into independent derived loggers. Concurrent use of one handle is
/// safe exactly when the wrapped engine is safe for concurrent use; this
/// layer adds no locking of its own.
///
/// Engine lifecycle (flushing, closing) stays with whoever constructed the
/// engine instance. No handle owns it.
pub trait Logger: Send + Sync {
    /// Dispatch one leveled record to the underlying engine.
    ///
    /// This is the core sink method. It never terminates the process and
    /// never unwinds, regardless of the record's level; the terminal
    /// side effects of [`Logger::fatal`] and [`Logger::panic`] live in those
    /// convenience methods only.
    fn log(&self, record: &Record<'_>);

    /// Derive a handle with one additional field.
    fn with_field(&self, key: &str, value: FieldValue) -> Box<dyn Logger>;

    /// Derive a handle with a set of fields merged in.
    ///
    /// Fields are applied in lexicographic key order. An empty set derives an
    /// equivalent handle.
    fn with_fields(&self, fields: Fields) -> Box<dyn Logger>;

    /// Best-effort reconstruction of the accumulated field set.
    ///
    /// Engines that only retain a serialized form of their context return an
    /// explicit empty map; that is a documented capability gap, not an error.
    fn fields(&self) -> Fields;

    /// Derive a handle with the error recorded under [`ERROR_FIELD`].
    fn with_error(&self, err: &(dyn std::error::Error + '_)) -> Box<dyn Logger> {
        self.with_field(ERROR_FIELD, FieldValue::from_error(err))
    }

    /// Log at debug level.
    #[track_caller]
    fn debug(&self, args: fmt::Arguments<'_>) {
        self.log(&Record {
            level: Level::Debug,
            args,
            site: CallSite::caller(),
        });
    }

    /// Log at info level.
    #[track_caller]
    fn info(&self, args: fmt::Arguments<'_>) {
        self.log(&Record {
            level: Level::Info,
            args,
            site: CallSite::caller(),
        });
    }

    /// Log at warn level.
    #[track_caller]
    fn warn(&self, args: fmt::Arguments<'_>) {
        self.log(&Record {
            level: Level::Warn,
            args,
            site: CallSite::caller(),
        });
    }

    /// Log at error level.
    #[track_caller]
    fn error(&self, args: fmt::Arguments<'_>) {
        self.log(&Record {
            level: Level::Error,
            args,
            site: CallSite::caller(),
        });
    }

    /// Log at panic level, then unwind the current operation.
    ///
    /// The unwind is the caller's to handle (or not); this layer never
    /// swallows it.
    #[track_caller]
    fn panic(&self, args: fmt::Arguments<'_>) -> ! {
        self.log(&Record {
            level: Level::Panic,
            args,
            site: CallSite::caller(),
        });
        panic!("{args}")
    }

    /// Log at fatal level, then terminate the process with a non-zero
    /// exit status.
    #[track_caller]
    fn fatal(&self, args: fmt::Arguments<'_>) -> ! {
        self.log(&Record {
            level: Level::Fatal,
            args,
            site: CallSite::caller(),
        });
        std::process::exit(1)
    }
}
