//! 日志记录定义（no_std 兼容）

use core::fmt;

/// 日志级别
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum Level {
    /// 最详细的跟踪信息
    Trace = 0,
    /// 调试信息
    Debug = 1,
    /// 一般信息
    Info = 2,
    /// 警告
    Warn = 3,
    /// 错误
    Error = 4,
}

impl Level {
    /// 将级别转换为字符串
    pub const fn as_str(&self) -> &'static str {
        match self {
            Level::Trace => "TRACE",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        }
    }

    /// 从u8解析级别
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Level::Trace),
            1 => Some(Level::Debug),
            2 => Some(Level::Info),
            3 => Some(Level::Warn),
            4 => Some(Level::Error),
            _ => None,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 单条日志记录
#[cfg(feature = "alloc")]
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    /// Unix时间戳（毫秒），no_std 下为单调计数
    pub timestamp_ms: u64,
    /// 日志级别
    pub level: Level,
    /// 模块路径（编译期确定）
    pub target: &'static str,
    /// 格式化后的消息
    pub message: alloc::string::String,
    /// 写入时 logger 的缩进层级
    pub indent: usize,
}

#[cfg(feature = "alloc")]
impl Record {
    /// 创建新记录
    pub fn new(
        level: Level,
        target: &'static str,
        message: impl Into<alloc::string::String>,
    ) -> Self {
        Self {
            timestamp_ms: current_timestamp_ms(),
            level,
            target,
            message: message.into(),
            indent: 0,
        }
    }

    /// 设置缩进层级
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// 格式化记录为字符串，每级缩进前置一个制表符
    pub fn format(&self) -> alloc::string::String {
        alloc::format!(
            "{}[{}] {} {}: {}",
            "\t".repeat(self.indent),
            format_timestamp(self.timestamp_ms),
            self.level,
            self.target,
            self.message
        )
    }
}

#[cfg(feature = "std")]
fn current_timestamp_ms() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

#[cfg(all(feature = "alloc", not(feature = "std")))]
static MONOTONIC_COUNTER: core::sync::atomic::AtomicU64 = core::sync::atomic::AtomicU64::new(0);

// 嵌入式目标没有墙钟，接入硬件 RTC 之前用单调计数代替
#[cfg(all(feature = "alloc", not(feature = "std")))]
fn current_timestamp_ms() -> u64 {
    MONOTONIC_COUNTER.fetch_add(1, core::sync::atomic::Ordering::Relaxed)
}

/// 格式化时间戳为可读字符串
#[cfg(feature = "alloc")]
fn format_timestamp(timestamp_ms: u64) -> alloc::string::String {
    let secs = timestamp_ms / 1000;
    let millis = timestamp_ms % 1000;

    let hours = (secs / 3600) % 24;
    let minutes = (secs / 60) % 60;
    let seconds = secs % 60;

    alloc::format!("{hours:02}:{minutes:02}:{seconds:02}.{millis:03}")
}
