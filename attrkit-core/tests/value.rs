use attrkit_core::AttrValue;

#[test]
fn truthiness() {
    assert!(!AttrValue::Null.is_truthy());
    assert!(!AttrValue::Bool(false).is_truthy());
    assert!(AttrValue::Bool(true).is_truthy());
    assert!(AttrValue::Integer(0).is_truthy());
    assert!(AttrValue::Float(0.0).is_truthy());
    assert!(AttrValue::String(String::new()).is_truthy());
    assert!(AttrValue::List(Vec::new()).is_truthy());
    assert!(AttrValue::Map(Vec::new()).is_truthy());
}

#[test]
fn from_impls() {
    assert_eq!(AttrValue::from(true), AttrValue::Bool(true));
    assert_eq!(AttrValue::from(42), AttrValue::Integer(42));
    assert_eq!(AttrValue::from(42u32), AttrValue::Integer(42));
    assert_eq!(AttrValue::from(1.5), AttrValue::Float(1.5));
    assert_eq!(AttrValue::from("Ezio"), AttrValue::String("Ezio".into()));
    assert_eq!(AttrValue::from(None::<i64>), AttrValue::Null);
    assert_eq!(AttrValue::from(Some("x")), AttrValue::String("x".into()));
    assert_eq!(
        AttrValue::from(vec![1, 2]),
        AttrValue::List(vec![AttrValue::Integer(1), AttrValue::Integer(2)])
    );
}

#[test]
fn json_conversion_preserves_structure() {
    let json = serde_json::json!({
        "name": "Ezio",
        "age": 42,
        "alive": true,
        "scores": [1.5, null],
    });
    let value = AttrValue::from_json(&json);
    match &value {
        AttrValue::Map(pairs) => {
            assert_eq!(pairs.len(), 4);
            assert_eq!(pairs[0], ("name".into(), AttrValue::String("Ezio".into())));
            assert_eq!(pairs[1], ("age".into(), AttrValue::Integer(42)));
            assert_eq!(pairs[2], ("alive".into(), AttrValue::Bool(true)));
            assert_eq!(
                pairs[3],
                (
                    "scores".into(),
                    AttrValue::List(vec![AttrValue::Float(1.5), AttrValue::Null])
                )
            );
        }
        other => panic!("expected map, got {:?}", other),
    }
    assert_eq!(value.to_json(), json);
}

#[test]
fn serialize_matches_json_form() {
    let value = AttrValue::Map(vec![
        ("name".into(), AttrValue::String("Altair".into())),
        ("alive".into(), AttrValue::Bool(false)),
    ]);
    let serialized = serde_json::to_value(&value).unwrap();
    assert_eq!(serialized, value.to_json());
}

#[test]
fn kind_names() {
    assert_eq!(AttrValue::Null.kind(), "null");
    assert_eq!(AttrValue::Bool(true).kind(), "a boolean");
    assert_eq!(AttrValue::List(Vec::new()).kind(), "a list");
    assert_eq!(AttrValue::Map(Vec::new()).kind(), "a map");
}

#[test]
fn display_renders_scalars_plainly() {
    assert_eq!(AttrValue::Null.to_string(), "null");
    assert_eq!(AttrValue::from("Ezio").to_string(), "Ezio");
    assert_eq!(AttrValue::from(3).to_string(), "3");
    assert_eq!(AttrValue::from(vec![1]).to_string(), "[1]");
}
