//! Any minimal logger mounted as an `slog` drain.

use super::value::FieldCollector;
use super::level_from_slog;
use logbridge_ports::{CallSite, Logger, Record};
use slog::{Drain, OwnedKVList, KV};
use std::panic::{RefUnwindSafe, UnwindSafe};
use std::sync::Arc;
use thiserror::Error;

/// Failure while re-encoding a record's structured pairs.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// A key-value pair refused to serialize into the field map.
    #[error("failed to re-encode structured fields: {0}")]
    FieldEncoding(#[from] slog::Error),
}

/// Mount a minimal logger as the root drain of a new `slog::Logger`.
///
/// Every record logged through the returned logger is decoded (context plus
/// per-record pairs), attached as derived fields, and dispatched to `logger`.
/// `Critical` records arrive as [`Level::Error`](logbridge_ports::Level):
/// the drain reports, it never terminates.
pub fn into_slog(logger: Arc<dyn Logger>) -> slog::Logger {
    slog::Logger::root(LoggerDrain::new(logger).fuse(), slog::o!())
}

/// `slog` drain that forwards records to a minimal logger.
pub struct LoggerDrain {
    logger: Arc<dyn Logger>,
}

impl LoggerDrain {
    /// Wrap a logger as a drain.
    pub fn new(logger: Arc<dyn Logger>) -> Self {
        Self { logger }
    }
}

// `Logger` is Send + Sync and the drain holds nothing else, so a record
// crossing an unwind boundary cannot observe broken invariants here.
impl RefUnwindSafe for LoggerDrain {}
impl UnwindSafe for LoggerDrain {}

impl Drain for LoggerDrain {
    type Ok = ();
    type Err = BridgeError;

    fn log(&self, record: &slog::Record<'_>, values: &OwnedKVList) -> Result<(), BridgeError> {
        let mut collector = FieldCollector::default();
        // Newest pairs first into a first-write-wins collector: a per-record
        // pair shadows context, and a recently derived logger's value shadows
        // the one it inherited.
        record.kv().serialize(record, &mut collector)?;
        values.serialize(record, &mut collector)?;
        let fields = collector.into_fields();

        let derived;
        let target: &dyn Logger = if fields.is_empty() {
            self.logger.as_ref()
        } else {
            derived = self.logger.with_fields(fields);
            derived.as_ref()
        };

        target.log(&Record {
            level: level_from_slog(record.level()),
            args: *record.msg(),
            site: CallSite {
                file: record.file(),
                line: record.line(),
            },
        });
        Ok(())
    }
}
