//! Property tests for the render/parse boundary of both text backends.

use proptest::prelude::*;
use std::sync::Arc;
use tagwire_core::WireValue;
use tagwire_engine::TypeRegistry;
use tagwire_formats::{Codec, JsonCodec, YamlCodec};

fn arb_wire() -> impl Strategy<Value = WireValue> {
    let leaf = prop_oneof![
        Just(WireValue::Null),
        any::<bool>().prop_map(WireValue::Bool),
        any::<i64>().prop_map(WireValue::Int),
        (-1.0e9f64..1.0e9f64).prop_map(WireValue::Float),
        "[a-zA-Z0-9_ .-]{0,12}".prop_map(WireValue::String),
    ];
    leaf.prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(WireValue::Sequence),
            prop::collection::btree_map("[a-z][a-z0-9_]{0,6}", inner, 0..4)
                .prop_map(WireValue::Mapping),
        ]
    })
}

fn codecs() -> (JsonCodec, YamlCodec) {
    let registry: Arc<TypeRegistry> = Arc::new(TypeRegistry::new());
    (
        JsonCodec::new(registry.clone()),
        YamlCodec::new(registry),
    )
}

proptest! {
    #[test]
    fn json_render_parse_round_trips(wire in arb_wire()) {
        let (json, _) = codecs();
        let text = json.render(&wire).unwrap();
        prop_assert_eq!(json.parse(&text).unwrap(), wire);
    }

    #[test]
    fn yaml_render_parse_round_trips(wire in arb_wire()) {
        let (_, yaml) = codecs();
        let text = yaml.render(&wire).unwrap();
        prop_assert_eq!(yaml.parse(&text).unwrap(), wire);
    }
}
