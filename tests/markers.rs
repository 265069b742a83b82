//! Class-marker behavior through the public codec API: custom instance
//! round-trips, resolution failures, reserved keys, and depth limits.

use std::sync::Arc;
use tagwire::prelude::*;
use tagwire_core::BoxError;

struct Point {
    x: i64,
    y: i64,
}

impl Reflect for Point {
    fn class_id(&self) -> ClassId {
        ClassId::new("geo", "Point")
    }

    fn fields(&self) -> std::result::Result<FieldMap, BoxError> {
        let mut fields = FieldMap::new();
        fields.insert("x".to_owned(), Native::Int(self.x));
        fields.insert("y".to_owned(), Native::Int(self.y));
        Ok(fields)
    }
}

struct NoFields;

impl Reflect for NoFields {
    fn class_id(&self) -> ClassId {
        ClassId::new("app", "NoFields")
    }

    fn fields(&self) -> std::result::Result<FieldMap, BoxError> {
        Err("introspection unavailable".into())
    }
}

fn geo_codec() -> JsonCodec {
    let mut registry = TypeRegistry::new();
    let id = ClassId::new("geo", "Point");
    registry.register_fn(id.clone(), move |fields| {
        for required in ["x", "y"] {
            if !fields.contains_key(required) {
                return Err(CodecError::InvalidFields {
                    class: id.to_string(),
                    reason: format!("missing field {required:?}"),
                });
            }
        }
        Ok(Instance::new(id.clone(), fields))
    });
    JsonCodec::new(Arc::new(registry))
}

#[test]
fn point_encodes_to_documented_marker() {
    let codec = geo_codec();
    let wire = codec.encode(&Point { x: 1, y: 2 }.to_native().unwrap()).unwrap();

    let expected = WireValue::mapping_of(vec![(
        "<geo.Point>",
        WireValue::mapping_of(vec![("x", WireValue::Int(1)), ("y", WireValue::Int(2))]),
    )]);
    assert_eq!(wire, expected);
}

#[test]
fn point_round_trips_to_equivalent_instance() {
    let codec = geo_codec();
    let original = Point { x: 1, y: 2 }.to_native().unwrap();

    let text = codec.to_str(&original).unwrap();
    let back = codec.from_str(&text).unwrap();

    let instance = back.as_instance().unwrap();
    assert_eq!(instance.class, ClassId::new("geo", "Point"));
    assert_eq!(instance.field("x"), Some(&Native::Int(1)));
    assert_eq!(instance.field("y"), Some(&Native::Int(2)));
    assert_eq!(back, original);
}

#[test]
fn instances_nest_inside_collections() {
    let codec = geo_codec();
    let value = Native::map_of(vec![(
        "corners",
        Native::List(vec![
            Point { x: 0, y: 0 }.to_native().unwrap(),
            Point { x: 4, y: 2 }.to_native().unwrap(),
        ]),
    )]);

    let text = codec.to_str(&value).unwrap();
    assert_eq!(codec.from_str(&text).unwrap(), value);
}

#[test]
fn unresolvable_marker_fails_with_missing_class() {
    let codec = geo_codec();
    let err = codec.from_str(r#"{"<missing.Foo>": {}}"#).unwrap_err();
    match err {
        CodecError::MissingClass { module, name, .. } => {
            assert_eq!(module, "missing");
            assert_eq!(name, "Foo");
        }
        other => panic!("expected MissingClass, got {other:?}"),
    }
}

#[test]
fn failing_introspection_names_the_class() {
    let err = NoFields.to_native().unwrap_err();
    match err {
        CodecError::NotEncodable { class, .. } => assert_eq!(class, "app.NoFields"),
        other => panic!("expected NotEncodable, got {other:?}"),
    }
}

#[test]
fn resolved_class_can_reject_fields() {
    let codec = geo_codec();
    let err = codec.from_str(r#"{"<geo.Point>": {"x": 1}}"#).unwrap_err();
    assert!(matches!(err, CodecError::InvalidFields { .. }));
}

#[test]
fn invalid_class_identity_never_reaches_the_wire() {
    // An identity whose marker key would not re-parse must fail encoding
    // instead of rendering text the same codec cannot read back.
    let codec = geo_codec();
    let value = Native::Instance(Instance::new(
        ClassId::new("bad module", "Thing"),
        FieldMap::new(),
    ));

    let err = codec.to_str(&value).unwrap_err();
    match err {
        CodecError::NotEncodable { class, .. } => assert_eq!(class, "bad module.Thing"),
        other => panic!("expected NotEncodable, got {other:?}"),
    }
}

#[test]
fn tag_key_without_mapping_payload_is_reserved() {
    let codec = geo_codec();
    let err = codec.from_str(r#"{"<geo.Point>": 1}"#).unwrap_err();
    assert!(matches!(err, CodecError::ReservedKey { .. }));
}

#[test]
fn literal_reserved_keys_are_rejected_both_ways() {
    let codec = geo_codec();

    let encode_err = codec
        .encode(&Native::map_of(vec![("<geo.Point>", Native::Int(1))]))
        .unwrap_err();
    assert!(matches!(encode_err, CodecError::ReservedKey { .. }));

    let decode_err = codec.from_str(r#"{"<weird>": 1}"#).unwrap_err();
    assert!(matches!(decode_err, CodecError::ReservedKey { .. }));
}

#[test]
fn plain_single_entry_mapping_is_not_a_marker() {
    let codec = geo_codec();
    let back = codec.from_str(r#"{"only": {"x": 1}}"#).unwrap();
    assert_eq!(
        back,
        Native::map_of(vec![("only", Native::map_of(vec![("x", Native::Int(1))]))])
    );
}

#[test]
fn depth_limit_is_enforced_through_the_codec() {
    let registry: Arc<TypeRegistry> = Arc::new(TypeRegistry::new());
    let codec = JsonCodec::with_options(registry, EngineOptions::with_max_depth(3));

    let mut value = Native::Int(0);
    for _ in 0..8 {
        value = Native::List(vec![value]);
    }
    let err = codec.encode(&value).unwrap_err();
    assert!(matches!(err, CodecError::DepthLimitExceeded { limit: 3 }));

    let deep_text = format!("{}0{}", "[".repeat(8), "]".repeat(8));
    let err = codec.from_str(&deep_text).unwrap_err();
    assert!(matches!(err, CodecError::DepthLimitExceeded { limit: 3 }));
}

#[test]
fn codecs_share_state_safely_across_threads() {
    let codec = Arc::new(geo_codec());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let codec = Arc::clone(&codec);
            std::thread::spawn(move || {
                let value = Point { x: i, y: -i }.to_native().unwrap();
                let text = codec.to_str(&value).unwrap();
                assert_eq!(codec.from_str(&text).unwrap(), value);
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
}
