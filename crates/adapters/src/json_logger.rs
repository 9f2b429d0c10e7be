//! Self-contained JSON-line logging engine.
//!
//! One record becomes one newline-terminated JSON object on the configured
//! sink. Accumulated fields are re-encoded on every call straight from the
//! field map, so this engine supports full field introspection.

use crate::encode;
use logbridge_ports::{FieldValue, Fields, Level, Logger, Record};
use std::io::Write;
use std::sync::Arc;
use std::time::SystemTime;

/// Destination for rendered records.
///
/// One call per record; the line arrives newline-terminated. Implementations
/// own buffering and must tolerate concurrent callers.
pub trait LogSink: Send + Sync {
    /// Deliver one rendered record.
    fn write_line(&self, line: &str);
}

/// Sink writing to the process's standard error.
///
/// The stream handle is locked per line, so records from concurrent handles
/// never interleave mid-line. Write failures are discarded; a sink has
/// nowhere left to report its own trouble.
#[derive(Debug, Default)]
pub struct StderrLogSink;

impl LogSink for StderrLogSink {
    fn write_line(&self, line: &str) {
        let mut handle = std::io::stderr().lock();
        let _ = handle.write_all(line.as_bytes());
    }
}

/// JSON-line logger writing one object per record.
///
/// Handles are cheap to clone and derive; they share the sink and own their
/// accumulated field set.
#[derive(Clone)]
pub struct JsonLogger {
    sink: Arc<dyn LogSink>,
    fields: Fields,
    min_level: Level,
    timestamps: bool,
}

impl JsonLogger {
    /// Create a logger writing to the given sink at debug level and above.
    pub fn new(sink: Arc<dyn LogSink>) -> Self {
        Self {
            sink,
            fields: Fields::new(),
            min_level: Level::Debug,
            timestamps: true,
        }
    }

    /// Create a logger writing to stderr.
    pub fn stderr() -> Self {
        Self::new(Arc::new(StderrLogSink))
    }

    /// Drop records below `level`.
    #[must_use]
    pub fn with_min_level(mut self, level: Level) -> Self {
        self.min_level = level;
        self
    }

    /// Seed the logger with a base field set.
    #[must_use]
    pub fn with_base_fields(mut self, fields: Fields) -> Self {
        self.fields.extend(fields);
        self
    }

    /// Enable or disable the `time` key on emitted records.
    ///
    /// Disabling it makes output byte-deterministic, which tests rely on.
    #[must_use]
    pub fn with_timestamps(mut self, enabled: bool) -> Self {
        self.timestamps = enabled;
        self
    }

    fn render(&self, record: &Record<'_>) -> String {
        let mut object = serde_json::Map::new();
        if self.timestamps {
            object.insert(
                "time".to_owned(),
                serde_json::Value::from(encode::format_timestamp(SystemTime::now())),
            );
        }
        object.insert(
            "level".to_owned(),
            serde_json::Value::from(record.level.as_str()),
        );
        object.insert(
            "msg".to_owned(),
            serde_json::Value::from(record.args.to_string()),
        );
        for (key, value) in &self.fields {
            object.insert(key.clone(), encode::to_json(value));
        }

        match serde_json::to_string(&serde_json::Value::Object(object)) {
            Ok(line) => line,
            // A map with string keys and pre-encoded values serializes; this
            // arm keeps the call infallible if that ever stops holding.
            Err(error) => format!(
                r#"{{"level":"error","msg":"log record serialization failed: {error}"}}"#
            ),
        }
    }
}

impl Logger for JsonLogger {
    fn log(&self, record: &Record<'_>) {
        if record.level < self.min_level {
            return;
        }
        let mut line = self.render(record);
        line.push('\n');
        self.sink.write_line(&line);
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
