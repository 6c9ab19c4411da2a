//! 字节数组辅助
//!
//! 字节数组是元素为 0..=255 整数的数组。越界或非整数元素返回错误，
//! 输出缓冲区在校验全部通过之前不会被写入。

use super::{Payload, Value};
use crate::error::{alloc_failed, ValueError, ValueResult};
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write;

/// `array_to_bytes` 调用方常用的缓冲区上限
pub const DEFAULT_BYTE_LIMIT: usize = 2048;

/// 整数族元素转为字节
fn byte_at(index: usize, item: &Value) -> ValueResult<u8> {
    if !item.tag().is_integer() {
        return Err(ValueError::NotAByte {
            index,
            found: item.tag(),
        });
    }
    let value = item.loose_integer().unwrap_or_default();
    u8::try_from(value).map_err(|_| ValueError::ByteOutOfRange { index, value })
}

impl Value {
    /// 由字节构建数组，元素为 UInt
    pub fn from_bytes(data: &[u8]) -> Value {
        Value::list(data.iter().map(|&b| Value::from(b)))
    }

    /// 把字节追加到数组末尾，不是数组时先变为数组
    pub fn fill_from_bytes(&mut self, data: &[u8]) -> ValueResult<&mut Self> {
        self.become_array()?;
        {
            let mut seq = self.sequence_mut()?;
            seq.try_reserve(data.len()).map_err(alloc_failed)?;
            seq.extend(data.iter().map(|&b| Value::from(b)));
        }
        Ok(self)
    }

    /// 写入 `min(size(), out.len())` 个字节，返回写入数量
    pub fn array_to_bytes(&self, out: &mut [u8]) -> ValueResult<usize> {
        let seq = self.as_array()?;
        let count = seq.len().min(out.len());
        for (index, item) in seq.iter().take(count).enumerate() {
            byte_at(index, item)?;
        }
        for (index, (slot, item)) in out.iter_mut().zip(seq.iter()).enumerate() {
            *slot = byte_at(index, item)?;
        }
        Ok(count)
    }

    /// 最多转换前 `limit` 个元素
    pub fn to_byte_vec(&self, limit: usize) -> ValueResult<Vec<u8>> {
        let seq = self.as_array()?;
        seq.iter()
            .take(limit)
            .enumerate()
            .map(|(index, item)| byte_at(index, item))
            .collect()
    }

    /// 冒号分隔的小写十六进制，如 `0a:ff:10`
    pub fn to_hex_string(&self) -> ValueResult<String> {
        let seq = self.as_array()?;
        let mut out = String::with_capacity(seq.len() * 3);
        for (index, item) in seq.iter().enumerate() {
            if index > 0 {
                out.push(':');
            }
            let _ = write!(out, "{:02x}", byte_at(index, item)?);
        }
        Ok(out)
    }

    /// 把 UInt 字节数组解释为 UTF-8 文本
    pub(crate) fn array_to_string(&self) -> ValueResult<String> {
        let seq = self.as_array()?;
        let mut bytes = Vec::with_capacity(seq.len());
        for (index, item) in seq.iter().enumerate() {
            let Payload::UInt(_) = item.payload else {
                return Err(ValueError::NotAByte {
                    index,
                    found: item.tag(),
                });
            };
            bytes.push(byte_at(index, item)?);
        }
        String::from_utf8(bytes).map_err(|_| ValueError::InvalidUtf8)
    }
}
