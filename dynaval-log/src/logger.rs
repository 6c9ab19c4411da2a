//! 日志器实现（no_std + alloc 兼容）

use crate::record::{Level, Record};
use crate::spin::Mutex;
use alloc::boxed::Box;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;
use core::sync::atomic::{AtomicBool, AtomicU8, AtomicUsize, Ordering};

/// 日志输出目标trait
pub trait LogSink: Send + Sync {
    /// 写入日志记录
    fn write(&self, record: &Record);
}

/// 日志器配置和状态
///
/// 开关和缩进层级都属于实例，不存在进程级的全局状态。
pub struct Logger {
    /// 当前日志级别（原子存储）
    level: AtomicU8,
    /// 总开关，关闭时只有 `force` 能写出
    enabled: AtomicBool,
    /// 输出目标列表
    sinks: Mutex<Vec<Box<dyn LogSink>>>,
    /// 当前缩进层级
    indent: AtomicUsize,
}

impl Logger {
    /// 创建新的日志器
    pub fn new(level: Level) -> Arc<Self> {
        Arc::new(Logger {
            level: AtomicU8::new(level as u8),
            enabled: AtomicBool::new(true),
            sinks: Mutex::new(Vec::new()),
            indent: AtomicUsize::new(0),
        })
    }

    /// 添加输出目标
    pub fn with_sink<S: LogSink + 'static>(self: Arc<Self>, sink: S) -> Arc<Self> {
        self.add_sink(sink);
        self
    }

    /// 添加 sink（供 config 使用）
    pub fn add_sink<S: LogSink + 'static>(&self, sink: S) {
        let mut sinks = self.sinks.lock();
        sinks.push(Box::new(sink));
    }

    /// 动态设置日志级别
    pub fn set_level(&self, level: Level) {
        self.level.store(level as u8, Ordering::Relaxed);
    }

    /// 获取当前日志级别
    pub fn level(&self) -> Level {
        Level::from_u8(self.level.load(Ordering::Relaxed)).unwrap_or(Level::Info)
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Relaxed);
    }

    pub fn enable(&self) {
        self.set_enabled(true);
    }

    pub fn disable(&self) {
        self.set_enabled(false);
    }

    pub fn is_on(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    /// 检查指定级别是否启用
    pub fn is_enabled(&self, level: Level) -> bool {
        self.is_on() && level >= self.level()
    }

    /// 记录日志
    #[inline(never)]
    pub fn log(&self, level: Level, target: &'static str, message: impl Into<String>) {
        if !self.is_enabled(level) {
            return;
        }
        self.emit(Record::new(level, target, message));
    }

    /// 记录 "标签 值" 形式的一行，值通过 `Display` 渲染
    ///
    /// `dynaval_core::Value` 的 `Display` 输出 JSON 文本，所以这里
    /// 不需要依赖值类型本身。
    pub fn log_display(
        &self,
        level: Level,
        target: &'static str,
        label: &str,
        value: &dyn fmt::Display,
    ) {
        if !self.is_enabled(level) {
            return;
        }
        self.emit(Record::new(level, target, alloc::format!("{label} {value}")));
    }

    /// 忽略总开关和级别，强制写出
    pub fn force(&self, level: Level, target: &'static str, message: impl Into<String>) {
        self.emit(Record::new(level, target, message));
    }

    fn emit(&self, record: Record) {
        let record = record.with_indent(self.indent_depth());
        let sinks = self.sinks.lock();
        for sink in sinks.iter() {
            sink.write(&record);
        }
    }

    /// 增加一级缩进，守卫析构时恢复
    pub fn indent(self: &Arc<Self>) -> IndentGuard {
        self.indent.fetch_add(1, Ordering::Relaxed);
        IndentGuard {
            logger: Arc::clone(self),
        }
    }

    pub fn indent_depth(&self) -> usize {
        self.indent.load(Ordering::Relaxed)
    }

    /// 创建没有任何 sink 的日志器（用于测试或禁用场景）
    pub fn noop() -> Arc<Self> {
        Self::new(Level::Error)
    }
}

/// 缩进守卫，析构时减少一级缩进
pub struct IndentGuard {
    logger: Arc<Logger>,
}

impl Drop for IndentGuard {
    fn drop(&mut self) {
        // 不会低于 0
        let _ = self
            .logger
            .indent
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |depth| {
                depth.checked_sub(1)
            });
    }
}

// 为Arc<Logger>实现LogSink，支持链式日志器
impl LogSink for Arc<Logger> {
    fn write(&self, record: &Record) {
        self.log(record.level, record.target, record.message.clone());
    }
}

#[cfg(feature = "std")]
/// 标准输出sink
pub struct StdoutSink;

#[cfg(feature = "std")]
impl LogSink for StdoutSink {
    fn write(&self, record: &Record) {
        println!("{}", record.format());
    }
}

#[cfg(feature = "std")]
/// 标准错误sink
pub struct StderrSink;

#[cfg(feature = "std")]
impl LogSink for StderrSink {
    fn write(&self, record: &Record) {
        eprintln!("{}", record.format());
    }
}

#[cfg(feature = "std")]
/// 文件sink
pub struct FileSink {
    file: std::sync::Mutex<std::fs::File>,
}

#[cfg(feature = "std")]
impl FileSink {
    /// 创建文件sink（追加模式）
    pub fn new(path: impl AsRef<std::path::Path>) -> std::io::Result<Self> {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;

        Ok(FileSink {
            file: std::sync::Mutex::new(file),
        })
    }
}

#[cfg(feature = "std")]
impl LogSink for FileSink {
    #[inline(never)]
    fn write(&self, record: &Record) {
        use std::io::Write;
        if let Ok(mut file) = self.file.lock() {
            let _ = writeln!(file, "{}", record.format());
        }
    }
}
