//! 错误记录：`Tag::Error` 值的载荷

use crate::error::ValueResult;
use crate::value::Value;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

/// 默认状态码
pub const DEFAULT_STATUS_CODE: i32 = 500;

/// 领域错误
///
/// 作为数据在值图中流动，调用方通过 `Value::is_error` 检查。
/// `stack` 通常是一个字符串数组值；它也是普通的值，可能与外层容器形成引用环。
#[derive(Clone, Debug)]
pub struct ErrorRecord {
    pub message: String,
    pub status_code: i32,
    pub key: String,
    pub stack: Option<Value>,
}

impl ErrorRecord {
    /// 创建错误记录，状态码为 500
    pub fn new(message: impl Into<String>) -> Self {
        Self::with_status(message, DEFAULT_STATUS_CODE)
    }

    pub fn with_status(message: impl Into<String>, status_code: i32) -> Self {
        ErrorRecord {
            message: message.into(),
            status_code,
            key: String::new(),
            stack: None,
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// 以字符串帧设置调用栈
    pub fn with_stack<I, S>(mut self, frames: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stack = Some(Value::list(frames.into_iter().map(Value::string)));
        self
    }

    /// 调用栈中的字符串帧，非字符串元素被跳过
    pub fn frames(&self) -> Vec<String> {
        let Some(stack) = &self.stack else {
            return Vec::new();
        };
        match stack.as_array() {
            Ok(seq) => seq
                .iter()
                .filter_map(|frame| frame.as_str().map(String::from))
                .collect(),
            Err(_) => Vec::new(),
        }
    }

    /// 深拷贝，调用栈不与原记录共享
    pub fn deep_copy(&self) -> ValueResult<Self> {
        self.deep_copy_at(0)
    }

    pub(crate) fn deep_copy_at(&self, depth: usize) -> ValueResult<Self> {
        let stack = match &self.stack {
            Some(stack) => Some(stack.deep_copy_at(depth + 1)?),
            None => None,
        };
        Ok(ErrorRecord {
            message: self.message.clone(),
            status_code: self.status_code,
            key: self.key.clone(),
            stack,
        })
    }
}

impl Default for ErrorRecord {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl fmt::Display for ErrorRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            f.write_str("Error(<null>): Unknown error occurred")
        } else {
            write!(f, "Error({}): {}", self.status_code, self.message)
        }
    }
}
