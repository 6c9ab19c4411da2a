//! 冻结约束测试

mod common;
use common::mutators;
use dynaval_core::{Tag, Value, ValueError};

fn frozen_samples() -> Vec<Value> {
    vec![
        Value::null(),
        Value::int(5),
        Value::string("text"),
        Value::list([Value::int(1), Value::int(2)]),
        common::sample_object(),
        Value::error_with("e", 1, ["f"]),
    ]
}

#[test]
fn test_every_mutator_rejected() {
    for mut value in frozen_samples() {
        value.freeze();
        let tag = value.tag();
        let size = value.size();
        let json = value.to_json();

        for (name, mutate) in mutators() {
            assert_eq!(
                mutate(&mut value),
                Err(ValueError::FrozenValueViolation),
                "{name} on frozen {tag}"
            );
            assert_eq!(value.tag(), tag, "{name} changed tag");
            assert_eq!(value.size(), size, "{name} changed size");
            assert_eq!(value.to_json(), json, "{name} changed content");
        }
    }
}

#[test]
fn test_reads_unaffected() {
    let mut v = common::sample_object();
    v.freeze();

    assert!(v.is_frozen());
    assert_eq!(*v.get_key("foo"), "bar");
    assert!(v.contains_key("quux"));
    assert!(v.deep_copy().is_ok());
}

#[test]
fn test_unfreeze_restores_mutation() {
    let mut v = Value::array();
    v.freeze();
    assert!(v.push(1u8).is_err());

    v.unfreeze();
    v.push(1u8).unwrap();
    assert_eq!(v.size(), 1);
}

#[test]
fn test_freeze_is_per_handle() {
    let mut a = Value::array();
    let mut b = a.clone();
    a.freeze();

    b.push("via alias").unwrap();
    assert_eq!(a.size(), 1);
    assert_eq!(a.tag(), Tag::Array);
}

#[test]
fn test_mutators_succeed_when_not_frozen() {
    for (name, mutate) in mutators() {
        let mut value = common::sample_object();
        let result = mutate(&mut value);
        match name {
            "error_mut" => assert!(result.is_err()),
            _ => assert!(result.is_ok(), "{name} failed: {result:?}"),
        }
    }
}
