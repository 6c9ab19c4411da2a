//! 日志门面接入测试：值通过 `Display` 以 JSON 文本写入日志

mod common;
use dynaval_core::{array, Value};
use dynaval_log::{log_value, Level, LogConfig};

#[test]
fn test_log_value_renders_json() {
    let (logger, ring) = LogConfig::new(Level::Debug).with_ring_buffer(16).init();
    let ring = ring.unwrap();

    let v = array!["bar", 123, true];
    log_value!(logger, "payload", v);
    logger.log_display(Level::Warn, "dynaval::test", "null", Value::null_ref());

    let records = ring.dump_records();
    assert_eq!(records[0].message, r#"payload ["bar",123,true]"#);
    assert_eq!(records[1].message, "null null");
    assert_eq!(records[1].level, Level::Warn);
}

#[test]
fn test_indent_and_switch() {
    let (logger, ring) = LogConfig::new(Level::Info).with_ring_buffer(16).init();
    let ring = ring.unwrap();

    {
        let _guard = logger.indent();
        log_value!(logger, "tree", common::config_tree());
    }
    logger.disable();
    log_value!(logger, "hidden", Value::int(1));
    logger.force(Level::Info, "dynaval::test", "forced");

    let records = ring.dump_records();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].indent, 1);
    assert!(records[0].message.starts_with("tree {"));
    assert_eq!(records[1].message, "forced");
}
