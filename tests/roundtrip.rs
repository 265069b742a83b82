//! Round-trip tests for primitive scalars, sequences, and mappings
//! through both format adapters.

use std::sync::Arc;
use tagwire::prelude::*;

fn codecs() -> (JsonCodec, YamlCodec) {
    let registry: Arc<TypeRegistry> = Arc::new(TypeRegistry::new());
    (JsonCodec::new(registry.clone()), YamlCodec::new(registry))
}

fn assert_round_trips(value: &Native) {
    let (json, yaml) = codecs();
    for codec in [&json as &dyn Codec, &yaml as &dyn Codec] {
        let text = codec.to_str(value).unwrap();
        assert_eq!(
            &codec.from_str(&text).unwrap(),
            value,
            "{} round trip failed for {value:?}",
            codec.codec_type(),
        );
    }
}

#[test]
fn scalars_round_trip() {
    assert_round_trips(&Native::Null);
    assert_round_trips(&Native::Bool(true));
    assert_round_trips(&Native::Bool(false));
    assert_round_trips(&Native::Int(0));
    assert_round_trips(&Native::Int(i64::MIN));
    assert_round_trips(&Native::Int(i64::MAX));
    assert_round_trips(&Native::Float(2.5));
    assert_round_trips(&Native::from("hello"));
    assert_round_trips(&Native::from("日本語"));
}

#[test]
fn sequences_round_trip() {
    assert_round_trips(&Native::List(vec![]));
    assert_round_trips(&Native::List(vec![
        Native::Int(1),
        Native::from("two"),
        Native::Bool(true),
        Native::Null,
    ]));
    assert_round_trips(&Native::List(vec![Native::List(vec![Native::List(vec![
        Native::Int(9),
    ])])]));
}

#[test]
fn mappings_round_trip() {
    assert_round_trips(&Native::map_of(vec![]));
    assert_round_trips(&Native::map_of(vec![
        ("a", Native::Int(1)),
        ("b", Native::map_of(vec![("c", Native::from("deep"))])),
    ]));
}

#[test]
fn booleans_never_coerce_to_integers() {
    let (json, yaml) = codecs();
    for codec in [&json as &dyn Codec, &yaml as &dyn Codec] {
        let wire = codec.encode(&Native::Bool(true)).unwrap();
        assert_eq!(wire, WireValue::Bool(true));
        assert_ne!(wire, WireValue::Int(1));

        let back = codec.decode(&WireValue::Bool(false)).unwrap();
        assert_eq!(back, Native::Bool(false));
        assert_ne!(back, Native::Int(0));
    }
}

#[test]
fn documented_scenario_shape() {
    // encode({"a": 1, "b": [true, 2.5, "x"]})
    let value = Native::map_of(vec![
        ("a", Native::Int(1)),
        (
            "b",
            Native::List(vec![
                Native::Bool(true),
                Native::Float(2.5),
                Native::from("x"),
            ]),
        ),
    ]);
    let (json, _) = codecs();

    let wire = json.encode(&value).unwrap();
    let expected = WireValue::mapping_of(vec![
        ("a", WireValue::Int(1)),
        (
            "b",
            WireValue::Sequence(vec![
                WireValue::Bool(true),
                WireValue::Float(2.5),
                WireValue::from("x"),
            ]),
        ),
    ]);
    assert_eq!(wire, expected);
    assert_eq!(json.decode(&wire).unwrap(), value);
}

#[test]
fn yaml_restores_timestamps_json_keeps_strings() {
    use chrono::{TimeZone, Utc};
    let (json, yaml) = codecs();
    let ts = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();
    let value = Native::map_of(vec![("at", Native::Timestamp(ts))]);

    // YAML's richer scalar conventions restore the timestamp.
    let yaml_text = yaml.to_str(&value).unwrap();
    assert_eq!(yaml.from_str(&yaml_text).unwrap(), value);

    // JSON's leaner set leaves it as the RFC 3339 string.
    let json_text = json.to_str(&value).unwrap();
    assert_eq!(
        json.from_str(&json_text).unwrap(),
        Native::map_of(vec![("at", Native::from("2024-03-01T12:30:00+00:00"))])
    );
}

#[test]
fn non_string_map_keys_come_back_stringified() {
    let (json, _) = codecs();
    let mut map = std::collections::BTreeMap::new();
    map.insert(MapKey::Int(7), Native::from("seven"));
    let text = json.to_str(&Native::Map(map)).unwrap();

    let back = json.from_str(&text).unwrap();
    assert_eq!(back, Native::map_of(vec![("7", Native::from("seven"))]));
}
