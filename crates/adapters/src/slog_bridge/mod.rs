//! Bidirectional bridge between the minimal logger contract and `slog`.
//!
//! [`from_slog`] wraps an `slog::Logger` so code written against the minimal
//! [`Logger`](logbridge_ports::Logger) trait can log through it.
//! [`into_slog`] goes the other way: it mounts any boxed minimal logger as an
//! `slog` drain. Wrapping and unwrapping compose; N round trips preserve
//! levels, fields, and caller attribution.

mod forward;
mod reverse;
mod value;

pub use forward::{from_slog, SlogLogger};
pub use reverse::{into_slog, BridgeError, LoggerDrain};

use logbridge_ports::Level;

/// Map a minimal level onto `slog`'s scale.
///
/// `slog` has no dedicated panic or fatal severities; both collapse onto
/// `Critical`, its highest. The terminal side effect (unwind or exit) has
/// already happened by the time a record crosses this boundary, so only the
/// severity label is at stake.
pub fn level_to_slog(level: Level) -> slog::Level {
    match level {
        Level::Debug => slog::Level::Debug,
        Level::Info => slog::Level::Info,
        Level::Warn => slog::Level::Warning,
        Level::Error => slog::Level::Error,
        Level::Panic | Level::Fatal => slog::Level::Critical,
    }
}

/// Map an `slog` level onto the minimal scale.
///
/// `Trace` folds into `Debug` (the minimal scale has no finer grain) and
/// `Critical` folds into `Error`: a drain must never decide to terminate the
/// process on the producer's behalf, so the highest non-terminal severity is
/// the right landing spot.
pub fn level_from_slog(level: slog::Level) -> Level {
    match level {
        slog::Level::Trace | slog::Level::Debug => Level::Debug,
        slog::Level::Info => Level::Info,
        slog::Level::Warning => Level::Warn,
        slog::Level::Error | slog::Level::Critical => Level::Error,
    }
}
