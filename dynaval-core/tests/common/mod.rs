//! 测试辅助工具

#![allow(dead_code)]

use dynaval_core::{Value, ValueResult};

/// 把值的 JSON 输出解析为 serde_json 值，断言与键顺序无关
pub fn parse_json(value: &Value) -> serde_json::Value {
    let text = value.to_json();
    serde_json::from_str(&text).unwrap_or_else(|e| panic!("invalid json {text:?}: {e}"))
}

/// `{"foo":"bar","baz":123,"qux":123.456,"quux":true,"corge":false}`
pub fn sample_object() -> Value {
    let mut v = Value::object();
    v.set_key("foo", "bar").unwrap();
    v.set_key("baz", 123).unwrap();
    v.set_key("qux", 123.456f32).unwrap();
    v.set_key("quux", true).unwrap();
    v.set_key("corge", false).unwrap();
    v
}

/// 一个嵌套的配置树
pub fn config_tree() -> Value {
    let mut root = Value::object();
    root.set_key("name", "node-1").unwrap();
    {
        let mut net = root.slot_key("net").unwrap();
        net.set_key("dhcp", true).unwrap();
        net.slot_key("dns").unwrap().push("1.1.1.1").unwrap();
    }
    root.slot_key("sensors").unwrap().push(Value::uint(3)).unwrap();
    root
}

pub type Mutator = fn(&mut Value) -> ValueResult<()>;

/// 所有修改入口，逐个作用于同一个值
pub fn mutators() -> Vec<(&'static str, Mutator)> {
    let list: &[(&'static str, Mutator)] = &[
        ("set", |v| v.set(1u8).map(drop)),
        ("reset", |v| v.reset()),
        ("clear", |v| v.clear()),
        ("push", |v| v.push("x").map(drop)),
        ("remove", |v| v.remove(0).map(drop)),
        ("insert", |v| v.insert("k", 1u8).map(drop)),
        ("remove_key", |v| v.remove_key("k").map(drop)),
        ("slot", |v| v.slot(0usize).map(drop)),
        ("slot_key", |v| v.slot_key("k").map(drop)),
        ("set_at", |v| v.set_at(0usize, 1u8)),
        ("set_key", |v| v.set_key("k", 1u8)),
        ("fill_from_bytes", |v| v.fill_from_bytes(&[1]).map(drop)),
        ("error_mut", |v| v.error_mut().map(drop)),
        ("become_array", |v| v.become_array().map(drop)),
        ("become_object", |v| v.become_object().map(drop)),
        ("become_string", |v| v.become_string().map(drop)),
        ("become_float", |v| v.become_float().map(drop)),
        ("become_double", |v| v.become_double().map(drop)),
        ("become_int", |v| v.become_int().map(drop)),
        ("become_uint", |v| v.become_uint().map(drop)),
        ("become_long", |v| v.become_long().map(drop)),
        ("become_bool", |v| v.become_bool().map(drop)),
        ("become_null", |v| v.become_null().map(drop)),
        ("become_undefined", |v| v.become_undefined().map(drop)),
        ("become_error", |v| v.become_error().map(drop)),
    ];
    list.to_vec()
}
