//! Encoding parity between the JSON-line engine and the slog bridge.
//!
//! A field set must render the same JSON no matter which engine carries it,
//! so switching backends never changes what log consumers parse.

mod support;

use logbridge_adapters::{from_slog, JsonLogger};
use logbridge_ports::{fields, FieldValue, Fields, Logger};
use proptest::prelude::*;
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Log one record with `fields` through both engines and return the rendered
/// field entries (everything except the engine-owned `level`/`msg` keys).
fn render_both(fields: Fields) -> (serde_json::Value, serde_json::Value) {
    let sink = Arc::new(support::MemorySink::default());
    let json_logger = JsonLogger::new(sink.clone()).with_timestamps(false);
    json_logger.with_fields(fields.clone()).info(format_args!("m"));
    let line = sink.take().remove(0);
    let direct: serde_json::Value = serde_json::from_str(&line).expect("engine line is JSON");

    let (engine, buf) = support::json_slog();
    from_slog(engine)
        .with_fields(fields)
        .info(format_args!("m"));
    let bridged = buf.json_lines().remove(0);

    (strip_envelope(direct), strip_envelope(bridged))
}

fn strip_envelope(mut value: serde_json::Value) -> serde_json::Value {
    if let Some(object) = value.as_object_mut() {
        object.remove("level");
        object.remove("msg");
    }
    value
}

#[test]
fn representative_values_render_identically() {
    let time = UNIX_EPOCH + Duration::from_millis(1_500_000_000_123);
    let (direct, bridged) = render_both(fields! {
        "flag" => true,
        "small" => 7i8,
        "wide" => u64::MAX,
        "ratio" => 0.25f64,
        "name" => "svc",
        "blob" => vec![0xDEu8, 0xAD],
        "when" => time,
        "took" => Duration::from_micros(5),
        "ports" => vec![80u16, 443],
        "waits" => vec![Duration::from_secs(1), Duration::from_secs(2)],
        "cause" => FieldValue::Error("disk gone".to_owned()),
    });

    assert_eq!(direct, bridged);
    assert_eq!(direct["blob"], "3q0=");
    assert_eq!(direct["when"], "2017-07-14T02:40:00.123Z");
    assert_eq!(direct["took"], 5_000);
    assert_eq!(direct["ports"], serde_json::json!([80, 443]));
    assert_eq!(
        direct["waits"],
        serde_json::json!([1_000_000_000u64, 2_000_000_000u64])
    );
    assert_eq!(direct["cause"], "disk gone");
}

#[test]
fn both_engines_emit_the_full_envelope() {
    let context = fields! { "k1" => "v1", "k2" => "v2" };

    let sink = Arc::new(support::MemorySink::default());
    let logger = JsonLogger::new(sink.clone()).with_timestamps(false);
    logger
        .with_fields(context.clone())
        .info(format_args!("withfields"));
    let line = sink.take().remove(0);
    assert_eq!(
        line,
        "{\"level\":\"info\",\"msg\":\"withfields\",\"k1\":\"v1\",\"k2\":\"v2\"}\n"
    );

    let (engine, buf) = support::json_slog();
    from_slog(engine)
        .with_fields(context)
        .info(format_args!("withfields"));
    let bridged = buf.json_lines().remove(0);
    assert_eq!(bridged["level"], slog::Level::Info.as_str());
    assert_eq!(bridged["msg"], "withfields");
    assert_eq!(bridged["k1"], "v1");
    assert_eq!(bridged["k2"], "v2");
}

#[test]
fn structural_values_render_identically() {
    let (direct, bridged) = render_both(fields! {
        "meta" => serde_json::json!({ "region": "west", "replicas": 3 }),
        "absent" => FieldValue::None,
    });

    assert_eq!(direct, bridged);
    assert_eq!(direct["meta"]["region"], "west");
    assert!(direct["absent"].is_null());
}

fn field_value_strategy() -> impl Strategy<Value = FieldValue> {
    prop_oneof![
        any::<bool>().prop_map(FieldValue::from),
        any::<i64>().prop_map(FieldValue::from),
        any::<u64>().prop_map(FieldValue::from),
        "[a-z0-9 ]{0,16}".prop_map(FieldValue::from),
        (0u64..=u64::MAX / 2).prop_map(|n| FieldValue::from(Duration::from_nanos(n))),
        (0u64..=4_102_444_800).prop_map(|s| {
            FieldValue::from(SystemTime::UNIX_EPOCH + Duration::from_secs(s))
        }),
        proptest::collection::vec(any::<u8>(), 0..16).prop_map(FieldValue::from),
    ]
}

fn fields_strategy() -> impl Strategy<Value = Fields> {
    proptest::collection::btree_map("[a-z_]{1,12}", field_value_strategy(), 0..8)
}

proptest! {
    #[test]
    fn same_fields_always_render_the_same_line(fields in fields_strategy()) {
        let sink = Arc::new(support::MemorySink::default());
        let logger = JsonLogger::new(sink.clone()).with_timestamps(false);
        let derived = logger.with_fields(fields);

        derived.info(format_args!("m"));
        derived.info(format_args!("m"));

        let lines = sink.take();
        prop_assert_eq!(&lines[0], &lines[1]);
    }

    #[test]
    fn engines_agree_on_arbitrary_field_sets(fields in fields_strategy()) {
        let (direct, bridged) = render_both(fields);
        prop_assert_eq!(direct, bridged);
    }
}
