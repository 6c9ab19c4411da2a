//! 类型转换访问器

use super::{Payload, Value};
use crate::error::{ValueError, ValueResult};
use crate::tag::Tag;
use alloc::string::{String, ToString};

/// 转换模式
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Coercion {
    /// 只接受完全匹配的标签，否则返回 `TypeMismatch`
    #[default]
    Strict,
    /// 在数值族和 Bool 之间转换（true → 1，false → 0）
    Loose,
}

impl Value {
    pub(super) fn loose_integer(&self) -> Option<i64> {
        match self.payload {
            Payload::Int(n) => Some(n.into()),
            Payload::UInt(n) => Some(n.into()),
            Payload::Long(n) => Some(n),
            Payload::Float(n) => Some(n as i64),
            Payload::Double(n) => Some(n as i64),
            Payload::Bool(b) => Some(b.into()),
            _ => None,
        }
    }

    pub(super) fn loose_real(&self) -> Option<f64> {
        match self.payload {
            Payload::Int(n) => Some(n.into()),
            Payload::UInt(n) => Some(n.into()),
            Payload::Long(n) => Some(n as f64),
            Payload::Float(n) => Some(n.into()),
            Payload::Double(n) => Some(n),
            Payload::Bool(b) => Some(if b { 1.0 } else { 0.0 }),
            _ => None,
        }
    }

    fn loose_or_mismatch<T>(&self, expected: Tag, value: Option<T>) -> ValueResult<T> {
        value.ok_or_else(|| ValueError::mismatch(expected, self.tag()))
    }

    pub fn as_float(&self, coercion: Coercion) -> ValueResult<f32> {
        match (&self.payload, coercion) {
            (Payload::Float(n), _) => Ok(*n),
            (_, Coercion::Loose) => {
                self.loose_or_mismatch(Tag::Float, self.loose_real().map(|n| n as f32))
            }
            _ => Err(ValueError::mismatch(Tag::Float, self.tag())),
        }
    }

    pub fn as_double(&self, coercion: Coercion) -> ValueResult<f64> {
        match (&self.payload, coercion) {
            (Payload::Double(n), _) => Ok(*n),
            (_, Coercion::Loose) => self.loose_or_mismatch(Tag::Double, self.loose_real()),
            _ => Err(ValueError::mismatch(Tag::Double, self.tag())),
        }
    }

    pub fn as_int(&self, coercion: Coercion) -> ValueResult<i32> {
        match (&self.payload, coercion) {
            (Payload::Int(n), _) => Ok(*n),
            (_, Coercion::Loose) => {
                self.loose_or_mismatch(Tag::Int, self.loose_integer().map(|n| n as i32))
            }
            _ => Err(ValueError::mismatch(Tag::Int, self.tag())),
        }
    }

    /// 宽松模式下负数按二进制补码回绕
    pub fn as_unsigned(&self, coercion: Coercion) -> ValueResult<u32> {
        match (&self.payload, coercion) {
            (Payload::UInt(n), _) => Ok(*n),
            (_, Coercion::Loose) => {
                self.loose_or_mismatch(Tag::UInt, self.loose_integer().map(|n| n as u32))
            }
            _ => Err(ValueError::mismatch(Tag::UInt, self.tag())),
        }
    }

    pub fn as_long(&self, coercion: Coercion) -> ValueResult<i64> {
        match (&self.payload, coercion) {
            (Payload::Long(n), _) => Ok(*n),
            (_, Coercion::Loose) => self.loose_or_mismatch(Tag::Long, self.loose_integer()),
            _ => Err(ValueError::mismatch(Tag::Long, self.tag())),
        }
    }

    /// 宽松模式等价于 `!is_falsy()`，对任何标签都成功
    pub fn as_bool(&self, coercion: Coercion) -> ValueResult<bool> {
        match (&self.payload, coercion) {
            (Payload::Bool(b), _) => Ok(*b),
            (_, Coercion::Loose) => Ok(!self.is_falsy()),
            _ => Err(ValueError::mismatch(Tag::Bool, self.tag())),
        }
    }

    /// 文本表示
    ///
    /// 与 `Display`（JSON 文本）不同：字符串不加引号，容器渲染为占位符
    /// `[Array]` / `[Object]`，Undefined 和 Any 渲染为 `[Unknown]`。
    /// `interpret_array` 为真时把字节数组解释为 UTF-8 文本。
    pub fn as_string(&self, interpret_array: bool) -> ValueResult<String> {
        let text = match &self.payload {
            Payload::String(s) => s.clone(),
            Payload::Int(n) => n.to_string(),
            Payload::UInt(n) => n.to_string(),
            Payload::Long(n) => n.to_string(),
            Payload::Float(n) => n.to_string(),
            Payload::Double(n) => n.to_string(),
            Payload::Bool(b) => String::from(if *b { "true" } else { "false" }),
            Payload::Error(record) => record.to_string(),
            Payload::Null => String::from("null"),
            Payload::Undefined | Payload::Any => String::from("[Unknown]"),
            Payload::Array(_) if interpret_array => return self.array_to_string(),
            Payload::Array(_) => String::from("[Array]"),
            Payload::Object(_) => String::from("[Object]"),
        };
        Ok(text)
    }

    /// 是否为 Int；宽松模式也接受 UInt 和 Long
    pub fn is_int(&self, coercion: Coercion) -> bool {
        match coercion {
            Coercion::Strict => matches!(self.payload, Payload::Int(_)),
            Coercion::Loose => self.tag().is_integer(),
        }
    }

    /// 是否为 UInt；宽松模式也接受 Int 和 Long
    pub fn is_uint(&self, coercion: Coercion) -> bool {
        match coercion {
            Coercion::Strict => matches!(self.payload, Payload::UInt(_)),
            Coercion::Loose => self.tag().is_integer(),
        }
    }
}
