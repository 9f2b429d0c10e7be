//! Typed field values as `slog` key-value pairs, and the reverse decoder.

use crate::encode;
use logbridge_ports::{FieldValue, Fields};
use slog::{Key, Record, Serializer, KV};

/// A field value wrapped for emission into an `slog` serializer.
///
/// Each variant picks the serializer method of matching width, so a
/// width-aware drain on the far side sees the native type, not a stringified
/// rendition. Blobs, timestamps, and durations use the same textual encodings
/// as the JSON engine.
pub struct EncodedField(pub FieldValue);

impl slog::Value for EncodedField {
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> slog::Result {
        match &self.0 {
            FieldValue::None => serializer.emit_none(key),
            FieldValue::Bool(v) => serializer.emit_bool(key, *v),
            FieldValue::I8(v) => serializer.emit_i8(key, *v),
            FieldValue::I16(v) => serializer.emit_i16(key, *v),
            FieldValue::I32(v) => serializer.emit_i32(key, *v),
            FieldValue::I64(v) => serializer.emit_i64(key, *v),
            FieldValue::U8(v) => serializer.emit_u8(key, *v),
            FieldValue::U16(v) => serializer.emit_u16(key, *v),
            FieldValue::U32(v) => serializer.emit_u32(key, *v),
            FieldValue::U64(v) => serializer.emit_u64(key, *v),
            // Widened before emission: JSON output of an f32 must match the
            // f64 rendering the JSON-line engine produces for the same value.
            FieldValue::F32(v) => serializer.emit_f64(key, f64::from(*v)),
            FieldValue::F64(v) => serializer.emit_f64(key, *v),
            FieldValue::Str(v) => serializer.emit_str(key, v),
            FieldValue::Bytes(v) => serializer.emit_str(key, &encode::encode_bytes(v)),
            FieldValue::Timestamp(v) => serializer.emit_str(key, &encode::format_timestamp(*v)),
            FieldValue::Duration(v) => serializer.emit_u64(key, encode::duration_nanos(*v)),
            FieldValue::Error(v) => serializer.emit_str(key, v),
            FieldValue::Seq(_) | FieldValue::Object(_) => slog::Value::serialize(
                &SerdeJson(encode::to_json(&self.0)),
                record,
                key,
                serializer,
            ),
        }
    }
}

/// A JSON value carried across the `slog` boundary structurally.
///
/// Drains with nested-value support receive the structure intact via
/// `emit_serde`; plain drains get the compact JSON text fallback.
#[derive(Clone, Debug)]
pub struct SerdeJson(pub serde_json::Value);

impl serde::Serialize for SerdeJson {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl slog::Value for SerdeJson {
    fn serialize(
        &self,
        _record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> slog::Result {
        serializer.emit_serde(key, self)
    }
}

impl slog::SerdeValue for SerdeJson {
    fn serialize_fallback(&self, key: Key, serializer: &mut dyn Serializer) -> slog::Result {
        serializer.emit_str(key, &self.0.to_string())
    }

    fn as_serde(&self) -> &dyn erased_serde::Serialize {
        &self.0
    }

    fn to_sendable(&self) -> Box<dyn slog::SerdeValue + Send> {
        Box::new(self.clone())
    }
}

/// An owned field set as an `slog` key-value list.
///
/// Pairs are stored pre-sorted (the map iterates in key order), so the
/// serialization order is deterministic regardless of how the set was built.
pub struct FieldList(Vec<(Key, EncodedField)>);

impl FieldList {
    /// Consume a field map into a sorted key-value list.
    pub fn from_fields(fields: Fields) -> Self {
        Self(
            fields
                .into_iter()
                .map(|(key, value)| (Key::from(key), EncodedField(value)))
                .collect(),
        )
    }
}

impl KV for FieldList {
    fn serialize(&self, record: &Record<'_>, serializer: &mut dyn Serializer) -> slog::Result {
        for (key, value) in &self.0 {
            slog::Value::serialize(value, record, key.clone(), serializer)?;
        }
        Ok(())
    }
}

/// Serializer that decodes an `slog` record's key-value pairs back into a
/// field map.
///
/// This is the inverse of [`EncodedField`]: each emit callback restores the
/// variant of matching width. Values that only exist as format arguments are
/// rendered to text. `slog` serializes pairs newest-first (record pairs, then
/// context from the most recently derived logger outward), so the collector
/// keeps the first value it sees per key: the newest write wins.
#[derive(Default)]
pub struct FieldCollector {
    fields: Fields,
}

impl FieldCollector {
    fn put(&mut self, key: Key, value: FieldValue) -> slog::Result {
        self.fields.entry(key.as_ref().to_owned()).or_insert(value);
        Ok(())
    }

    /// Finish decoding and hand back the accumulated map.
    pub fn into_fields(self) -> Fields {
        self.fields
    }
}

impl Serializer for FieldCollector {
    fn emit_arguments(&mut self, key: Key, val: &std::fmt::Arguments<'_>) -> slog::Result {
        self.put(key, FieldValue::Str(val.to_string()))
    }

    fn emit_bool(&mut self, key: Key, val: bool) -> slog::Result {
        self.put(key, FieldValue::Bool(val))
    }

    fn emit_char(&mut self, key: Key, val: char) -> slog::Result {
        self.put(key, FieldValue::Str(val.to_string()))
    }

    fn emit_i8(&mut self, key: Key, val: i8) -> slog::Result {
        self.put(key, FieldValue::I8(val))
    }

    fn emit_i16(&mut self, key: Key, val: i16) -> slog::Result {
        self.put(key, FieldValue::I16(val))
    }

    fn emit_i32(&mut self, key: Key, val: i32) -> slog::Result {
        self.put(key, FieldValue::I32(val))
    }

    fn emit_i64(&mut self, key: Key, val: i64) -> slog::Result {
        self.put(key, FieldValue::I64(val))
    }

    fn emit_isize(&mut self, key: Key, val: isize) -> slog::Result {
        self.put(key, FieldValue::I64(val as i64))
    }

    fn emit_u8(&mut self, key: Key, val: u8) -> slog::Result {
        self.put(key, FieldValue::U8(val))
    }

    fn emit_u16(&mut self, key: Key, val: u16) -> slog::Result {
        self.put(key, FieldValue::U16(val))
    }

    fn emit_u32(&mut self, key: Key, val: u32) -> slog::Result {
        self.put(key, FieldValue::U32(val))
    }

    fn emit_u64(&mut self, key: Key, val: u64) -> slog::Result {
        self.put(key, FieldValue::U64(val))
    }

    fn emit_usize(&mut self, key: Key, val: usize) -> slog::Result {
        self.put(key, FieldValue::U64(val as u64))
    }

    fn emit_f32(&mut self, key: Key, val: f32) -> slog::Result {
        self.put(key, FieldValue::F32(val))
    }

    fn emit_f64(&mut self, key: Key, val: f64) -> slog::Result {
        self.put(key, FieldValue::F64(val))
    }

    fn emit_str(&mut self, key: Key, val: &str) -> slog::Result {
        self.put(key, FieldValue::Str(val.to_owned()))
    }

    fn emit_unit(&mut self, key: Key) -> slog::Result {
        self.put(key, FieldValue::None)
    }

    fn emit_none(&mut self, key: Key) -> slog::Result {
        self.put(key, FieldValue::None)
    }

    fn emit_serde(&mut self, key: Key, value: &dyn slog::SerdeValue) -> slog::Result {
        let decoded = serde_json::to_value(value.as_serde()).map_err(|_| slog::Error::Other)?;
        self.put(key, FieldValue::Object(decoded))
    }
}

#[cfg(test)]
mod tests {
    use super::{EncodedField, FieldCollector, FieldList};
    use logbridge_ports::{fields, FieldValue};
    use slog::{b, record_static, Level, Record, Serializer, KV};
    use std::time::Duration;

    fn with_record<T>(f: impl FnOnce(&Record<'_>) -> T) -> T {
        let rstatic = record_static!(Level::Info, "");
        f(&Record::new(&rstatic, &format_args!("m"), b!()))
    }

    #[test]
    fn field_list_serializes_in_key_order() {
        let list = FieldList::from_fields(fields! {
            "zeta" => 1i64,
            "alpha" => "first",
        });

        let mut collector = FieldCollector::default();
        with_record(|record| list.serialize(record, &mut collector)).expect("serialize");

        let keys: Vec<String> = collector.into_fields().into_keys().collect();
        assert_eq!(keys, vec!["alpha".to_owned(), "zeta".to_owned()]);
    }

    #[test]
    fn typed_values_survive_the_round_trip() {
        let list = FieldList::from_fields(fields! {
            "flag" => true,
            "count" => 42u32,
            "ratio" => 0.5f64,
            "name" => "svc",
        });

        let mut collector = FieldCollector::default();
        with_record(|record| list.serialize(record, &mut collector)).expect("serialize");

        let fields = collector.into_fields();
        assert_eq!(fields.get("flag"), Some(&FieldValue::Bool(true)));
        assert_eq!(fields.get("count"), Some(&FieldValue::U32(42)));
        assert_eq!(fields.get("ratio"), Some(&FieldValue::F64(0.5)));
        assert_eq!(fields.get("name"), Some(&FieldValue::Str("svc".to_owned())));
    }

    #[test]
    fn durations_cross_as_integer_nanos() {
        let field = EncodedField(FieldValue::Duration(Duration::from_micros(2)));
        let mut collector = FieldCollector::default();
        with_record(|record| {
            slog::Value::serialize(&field, record, slog::Key::from("took".to_owned()), &mut collector)
        })
        .expect("serialize");

        assert_eq!(
            collector.into_fields().get("took"),
            Some(&FieldValue::U64(2_000))
        );
    }

    #[test]
    fn collector_keeps_the_first_pair_per_key() {
        let mut collector = FieldCollector::default();
        collector
            .emit_i64(slog::Key::from("k".to_owned()), 2)
            .expect("emit");
        collector
            .emit_i64(slog::Key::from("k".to_owned()), 1)
            .expect("emit");
        assert_eq!(collector.into_fields().get("k"), Some(&FieldValue::I64(2)));
    }
}
