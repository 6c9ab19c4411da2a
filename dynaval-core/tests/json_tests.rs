//! JSON 输出测试

mod common;
use common::{parse_json, sample_object};
use dynaval_core::{array, ErrorStyle, JsonConfig, Value};
use serde_json::json;

#[test]
fn test_object_round_trip() {
    let v = sample_object();
    let text = v.to_json();

    assert!(text.starts_with('{') && text.ends_with('}'));
    assert_eq!(text.matches(',').count(), 4);
    assert_eq!(
        parse_json(&v),
        json!({"foo": "bar", "baz": 123, "qux": 123.456, "quux": true, "corge": false})
    );
}

#[test]
fn test_object_pairs_are_literal() {
    let text = sample_object().to_json();
    for pair in [
        r#""foo":"bar""#,
        r#""baz":123"#,
        r#""qux":123.456"#,
        r#""quux":true"#,
        r#""corge":false"#,
    ] {
        assert!(text.contains(pair), "{pair} missing from {text}");
    }
}

#[test]
fn test_array_push_order() {
    let mut v = Value::array();
    v.push("bar").unwrap();
    v.push(123).unwrap();
    v.push(123.456f32).unwrap();
    v.push(true).unwrap();
    v.push(false).unwrap();

    assert_eq!(v.to_json(), r#"["bar",123,123.456,true,false]"#);
    assert_eq!(v.to_string(), v.to_json());
}

#[test]
fn test_nested_document() {
    let mut doc = Value::object();
    doc.set_key("items", array![array![1u8, 2u8], array![]]).unwrap();
    doc.slot_key("meta").unwrap().set_key("count", Value::long(2)).unwrap();

    assert_eq!(
        parse_json(&doc),
        json!({"items": [[1, 2], []], "meta": {"count": 2}})
    );
}

#[test]
fn test_structured_errors_stay_valid_json() {
    let mut doc = Value::object();
    doc.set_key("result", Value::error_with("timeout", 504, ["poll", "read"]))
        .unwrap();

    assert_eq!(
        parse_json(&doc),
        json!({"result": {"error": {
            "message": "timeout",
            "statusCode": 504,
            "key": "",
            "stack": ["poll", "read"]
        }}})
    );
}

#[test]
fn test_rendered_errors() {
    let cfg = JsonConfig::default().with_error_style(ErrorStyle::Rendered);
    let v = array![Value::error_with("timeout", 504, ["poll"]), 1u8];
    assert_eq!(v.to_json_with(&cfg), "[Error(504): timeout,1]");
}

#[test]
fn test_config_from_json() {
    let cfg: JsonConfig = serde_json::from_str(r#"{"error_style":"rendered","max_depth":8}"#).unwrap();
    assert_eq!(cfg.error_style, ErrorStyle::Rendered);
    assert_eq!(cfg.max_depth, 8);
}

#[test]
fn test_control_characters() {
    let v = Value::string("tab\there\u{1f}");
    assert_eq!(v.to_json(), r#""tab\there\u001f""#);
    assert_eq!(parse_json(&v), json!("tab\there\u{1f}"));
}

#[test]
fn test_write_json_streams_into_writer() {
    let v = array!["a", Value::null()];
    let mut out = String::from("payload=");
    v.write_json(&mut out, &JsonConfig::default()).unwrap();
    assert_eq!(out, r#"payload=["a",null]"#);
}

#[test]
fn test_serde_agrees_with_emitter() {
    let v = common::config_tree();
    let via_serde: serde_json::Value =
        serde_json::from_str(&serde_json::to_string(&v).unwrap()).unwrap();
    assert_eq!(via_serde, parse_json(&v));
}
