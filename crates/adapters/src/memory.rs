//! In-memory capture logger for tests.

use logbridge_ports::{CallSite, FieldValue, Fields, Level, Logger, Record};
use std::sync::{Arc, Mutex};

/// One fully rendered record captured by a [`MemoryLogger`].
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedRecord {
    /// Severity of the call.
    pub level: Level,
    /// Rendered message.
    pub message: String,
    /// Accumulated fields at the time of the call.
    pub fields: Fields,
    /// Attributed call site.
    pub site: CallSite,
}

/// Logger that captures records for later assertion.
///
/// Derived handles share the parent's buffer, so a test can hold the root
/// handle and observe records logged through any descendant.
#[derive(Clone, Default)]
pub struct MemoryLogger {
    entries: Arc<Mutex<Vec<CapturedRecord>>>,
    fields: Fields,
}

impl MemoryLogger {
    /// Create an empty capture logger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain and return everything captured so far.
    pub fn take(&self) -> Vec<CapturedRecord> {
        let mut guard = self.entries.lock().expect("memory logger lock");
        std::mem::take(&mut *guard)
    }
}

impl Logger for MemoryLogger {
    fn log(&self, record: &Record<'_>) {
        let mut guard = self.entries.lock().expect("memory logger lock");
        guard.push(CapturedRecord {
            level: record.level,
            message: record.args.to_string(),
            fields: self.fields.clone(),
            site: record.site,
        });
    }

    fn with_field(&self, key: &str, value: FieldValue) -> Box<dyn Logger> {
        let mut derived = self.clone();
        derived.fields.insert(key.to_owned(), value);
        Box::new(derived)
    }

    fn with_fields(&self, fields: Fields) -> Box<dyn Logger> {
        let mut derived = self.clone();
        derived.fields.extend(fields);
        Box::new(derived)
    }

    fn fields(&self) -> Fields {
        self.fields.clone()
    }
}
