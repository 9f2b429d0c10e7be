//! Shared encoding rules for field values.
//!
//! Both the JSON-line logger and the slog bridge route through these helpers
//! so a field encodes identically no matter which engine renders it.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::{DateTime, SecondsFormat, Utc};
use logbridge_ports::FieldValue;
use std::time::{Duration, SystemTime};

/// Encode a byte blob as standard (padded) base64.
pub fn encode_bytes(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Render a timestamp as RFC 3339 in UTC with millisecond precision.
pub fn format_timestamp(time: SystemTime) -> String {
    DateTime::<Utc>::from(time).to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Total nanoseconds in a duration, saturating at `u64::MAX`.
pub fn duration_nanos(duration: Duration) -> u64 {
    u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX)
}

/// Convert a field value into its canonical JSON representation.
pub fn to_json(value: &FieldValue) -> serde_json::Value {
    match value {
        FieldValue::None => serde_json::Value::Null,
        FieldValue::Bool(v) => serde_json::Value::from(*v),
        FieldValue::I8(v) => serde_json::Value::from(*v),
        FieldValue::I16(v) => serde_json::Value::from(*v),
        FieldValue::I32(v) => serde_json::Value::from(*v),
        FieldValue::I64(v) => serde_json::Value::from(*v),
        FieldValue::U8(v) => serde_json::Value::from(*v),
        FieldValue::U16(v) => serde_json::Value::from(*v),
        FieldValue::U32(v) => serde_json::Value::from(*v),
        FieldValue::U64(v) => serde_json::Value::from(*v),
        FieldValue::F32(v) => serde_json::Value::from(f64::from(*v)),
        FieldValue::F64(v) => serde_json::Value::from(*v),
        FieldValue::Str(v) => serde_json::Value::from(v.clone()),
        FieldValue::Bytes(v) => serde_json::Value::from(encode_bytes(v)),
        FieldValue::Timestamp(v) => serde_json::Value::from(format_timestamp(*v)),
        FieldValue::Duration(v) => serde_json::Value::from(duration_nanos(*v)),
        FieldValue::Error(v) => serde_json::Value::from(v.clone()),
        FieldValue::Seq(items) => serde_json::Value::Array(items.iter().map(to_json).collect()),
        FieldValue::Object(v) => v.clone(),
    }
}
