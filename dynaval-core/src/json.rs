//! JSON 文本输出（只输出，不解析）
//!
//! 字符串转义 `" \ \b \f \n \r \t`，其余 0x20 以下的字符输出为 `\u00xx`，
//! 其他字符原样输出。浮点数使用平台默认的十进制文本。对象的键顺序
//! 取决于哈希表，调用方不能依赖。

use crate::config::{ErrorStyle, JsonConfig};
use crate::record::ErrorRecord;
use crate::value::{Payload, Value};
use alloc::string::String;
use core::fmt::{self, Write};

/// 写入带引号并转义的 JSON 字符串
pub fn write_escaped<W: Write + ?Sized>(out: &mut W, s: &str) -> fmt::Result {
    out.write_char('"')?;
    for c in s.chars() {
        match c {
            '"' => out.write_str("\\\"")?,
            '\\' => out.write_str("\\\\")?,
            '\u{08}' => out.write_str("\\b")?,
            '\u{0c}' => out.write_str("\\f")?,
            '\n' => out.write_str("\\n")?,
            '\r' => out.write_str("\\r")?,
            '\t' => out.write_str("\\t")?,
            c if (c as u32) < 0x20 => write!(out, "\\u{:04x}", c as u32)?,
            c => out.write_char(c)?,
        }
    }
    out.write_char('"')
}

struct Emitter<'a, W: Write + ?Sized> {
    out: &'a mut W,
    config: &'a JsonConfig,
}

impl<W: Write + ?Sized> Emitter<'_, W> {
    fn value(&mut self, value: &Value, depth: usize) -> fmt::Result {
        match value.payload() {
            Payload::Null => self.out.write_str("null"),
            Payload::Undefined | Payload::Any => self.out.write_str("undefined"),
            Payload::Bool(b) => self.out.write_str(if *b { "true" } else { "false" }),
            Payload::Int(n) => write!(self.out, "{n}"),
            Payload::UInt(n) => write!(self.out, "{n}"),
            Payload::Long(n) => write!(self.out, "{n}"),
            Payload::Float(n) => write!(self.out, "{n}"),
            Payload::Double(n) => write!(self.out, "{n}"),
            Payload::String(s) => write_escaped(&mut *self.out, s),
            Payload::Error(record) => self.error(record, depth),
            Payload::Array(_) | Payload::Object(_) if depth >= self.config.max_depth => {
                tracing::warn!(target: "dynaval::json", depth, "nesting too deep, emitting null");
                self.out.write_str("null")
            }
            Payload::Array(seq) => {
                let Ok(seq) = seq.try_borrow() else {
                    return self.aliased();
                };
                self.out.write_char('[')?;
                for (i, item) in seq.iter().enumerate() {
                    if i > 0 {
                        self.out.write_char(',')?;
                    }
                    self.value(item, depth + 1)?;
                }
                self.out.write_char(']')
            }
            Payload::Object(map) => {
                let Ok(map) = map.try_borrow() else {
                    return self.aliased();
                };
                self.out.write_char('{')?;
                for (i, (key, item)) in map.iter().enumerate() {
                    if i > 0 {
                        self.out.write_char(',')?;
                    }
                    write_escaped(&mut *self.out, key)?;
                    self.out.write_char(':')?;
                    self.value(item, depth + 1)?;
                }
                self.out.write_char('}')
            }
        }
    }

    fn error(&mut self, record: &ErrorRecord, depth: usize) -> fmt::Result {
        match self.config.error_style {
            ErrorStyle::Rendered => write!(self.out, "{record}"),
            ErrorStyle::Structured => {
                self.out.write_str("{\"error\":{\"message\":")?;
                write_escaped(&mut *self.out, &record.message)?;
                write!(self.out, ",\"statusCode\":{},\"key\":", record.status_code)?;
                write_escaped(&mut *self.out, &record.key)?;
                self.out.write_str(",\"stack\":")?;
                match &record.stack {
                    Some(stack) => self.value(stack, depth + 1)?,
                    None => self.out.write_str("[]")?,
                }
                self.out.write_str("}}")
            }
        }
    }

    fn aliased(&mut self) -> fmt::Result {
        tracing::warn!(
            target: "dynaval::json",
            "container is mutably borrowed elsewhere, emitting null"
        );
        self.out.write_str("null")
    }
}

impl Value {
    /// JSON 文本，错误值按结构化对象输出
    pub fn to_json(&self) -> String {
        self.to_json_with(&JsonConfig::default())
    }

    pub fn to_json_with(&self, config: &JsonConfig) -> String {
        let mut out = String::new();
        // 写入 String 不会失败
        let _ = self.write_json(&mut out, config);
        out
    }

    /// 流式写入任意 `fmt::Write`
    pub fn write_json<W: Write + ?Sized>(&self, out: &mut W, config: &JsonConfig) -> fmt::Result {
        Emitter { out, config }.value(self, 0)
    }
}

/// 输出 JSON 文本（默认配置）
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_json(f, &JsonConfig::default())
    }
}
