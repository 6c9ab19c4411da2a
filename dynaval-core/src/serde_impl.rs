//! serde 桥接：值可以交给任意 serde 格式
//!
//! Undefined/Any 没有对应的数据模型，按 unit 输出（JSON 中为 `null`）。
//! 错误值输出为 `{"error":{...}}`，与结构化 JSON 输出一致。

use crate::config::DEFAULT_MAX_DEPTH;
use crate::error::ValueError;
use crate::record::ErrorRecord;
use crate::value::{Payload, Value};
use serde::ser::{Error as _, SerializeMap, SerializeSeq, SerializeStruct};
use serde::{Serialize, Serializer};

const NO_FRAMES: [u8; 0] = [];

/// 带当前嵌套深度的值
struct ValueAt<'a> {
    value: &'a Value,
    depth: usize,
}

struct RecordAt<'a> {
    record: &'a ErrorRecord,
    depth: usize,
}

impl Serialize for ErrorRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        RecordAt { record: self, depth: 0 }.serialize(serializer)
    }
}

impl Serialize for Value {
    /// 嵌套超过 [`DEFAULT_MAX_DEPTH`] 层时返回序列化器的自定义错误
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ValueAt { value: self, depth: 0 }.serialize(serializer)
    }
}

impl Serialize for RecordAt<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let record = self.record;
        let mut out = serializer.serialize_struct("ErrorRecord", 4)?;
        out.serialize_field("message", &record.message)?;
        out.serialize_field("statusCode", &record.status_code)?;
        out.serialize_field("key", &record.key)?;
        match &record.stack {
            Some(stack) => out.serialize_field(
                "stack",
                &ValueAt { value: stack, depth: self.depth + 1 },
            )?,
            None => out.serialize_field("stack", &NO_FRAMES)?,
        }
        out.end()
    }
}

impl Serialize for ValueAt<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let depth = self.depth;
        let payload = self.value.payload();
        if depth >= DEFAULT_MAX_DEPTH && payload.tag().is_container() {
            return Err(S::Error::custom(ValueError::TooDeep(DEFAULT_MAX_DEPTH)));
        }
        match payload {
            Payload::Null | Payload::Undefined | Payload::Any => serializer.serialize_unit(),
            Payload::Bool(b) => serializer.serialize_bool(*b),
            Payload::Int(n) => serializer.serialize_i32(*n),
            Payload::UInt(n) => serializer.serialize_u32(*n),
            Payload::Long(n) => serializer.serialize_i64(*n),
            Payload::Float(n) => serializer.serialize_f32(*n),
            Payload::Double(n) => serializer.serialize_f64(*n),
            Payload::String(s) => serializer.serialize_str(s),
            Payload::Array(seq) => {
                let seq = seq
                    .try_borrow()
                    .map_err(|_| S::Error::custom("array is mutably borrowed elsewhere"))?;
                let mut out = serializer.serialize_seq(Some(seq.len()))?;
                for item in seq.iter() {
                    out.serialize_element(&ValueAt { value: item, depth: depth + 1 })?;
                }
                out.end()
            }
            Payload::Object(map) => {
                let map = map
                    .try_borrow()
                    .map_err(|_| S::Error::custom("object is mutably borrowed elsewhere"))?;
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (key, item) in map.iter() {
                    out.serialize_entry(key, &ValueAt { value: item, depth: depth + 1 })?;
                }
                out.end()
            }
            Payload::Error(record) => {
                let mut out = serializer.serialize_map(Some(1))?;
                out.serialize_entry("error", &RecordAt { record: &**record, depth })?;
                out.end()
            }
        }
    }
}
