//! Minimal logger contract backed by an `slog::Logger`.

use super::value::{EncodedField, FieldList};
use super::level_to_slog;
use logbridge_ports::{FieldValue, Fields, Logger, Record};
use slog::{BorrowedKV, Key, OwnedKV, RecordLocation, RecordStatic, SingleKV};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Wrap an `slog::Logger` behind the minimal logger contract.
///
/// Records carry the application's own call site into the engine, so caller
/// attribution survives any number of wrap/unwrap layers.
pub fn from_slog(inner: slog::Logger) -> SlogLogger {
    SlogLogger {
        inner,
        introspection_warned: Arc::new(AtomicBool::new(false)),
    }
}

/// Minimal-contract handle over an `slog::Logger`.
///
/// Derivations map onto `slog`'s own context chain, which retains fields in
/// serialized form only. That makes [`Logger::fields`] a capability gap here:
/// it returns an empty map and warns once per handle lineage.
#[derive(Clone)]
pub struct SlogLogger {
    inner: slog::Logger,
    introspection_warned: Arc<AtomicBool>,
}

impl SlogLogger {
    fn derive(&self, inner: slog::Logger) -> Box<dyn Logger> {
        Box::new(Self {
            inner,
            introspection_warned: Arc::clone(&self.introspection_warned),
        })
    }
}

impl Logger for SlogLogger {
    fn log(&self, record: &Record<'_>) {
        let location = RecordLocation {
            file: record.site.file,
            line: record.site.line,
            column: 0,
            function: "",
            module: "",
        };
        let rstatic = RecordStatic {
            location: &location,
            tag: "",
            level: level_to_slog(record.level),
        };
        self.inner
            .log(&slog::Record::new(&rstatic, &record.args, BorrowedKV(&())));
    }

    fn with_field(&self, key: &str, value: FieldValue) -> Box<dyn Logger> {
        let pair = SingleKV(Key::from(key.to_owned()), EncodedField(value));
        self.derive(self.inner.new(OwnedKV(pair)))
    }

    fn with_fields(&self, fields: Fields) -> Box<dyn Logger> {
        if fields.is_empty() {
            return Box::new(self.clone());
        }
        self.derive(self.inner.new(OwnedKV(FieldList::from_fields(fields))))
    }

    fn fields(&self) -> Fields {
        if !self.introspection_warned.swap(true, Ordering::Relaxed) {
            self.warn(format_args!(
                "attempted to read fields from an slog-backed logger; the \
                 engine retains context in serialized form only"
            ));
        }
        Fields::new()
    }
}
