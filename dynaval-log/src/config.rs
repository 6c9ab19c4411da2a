//! 日志配置
//!
//! 提供便捷的日志初始化配置。

use crate::{Level, LogRingBuffer, Logger};
use alloc::sync::Arc;
use alloc::vec::Vec;

/// 日志输出目标配置
#[derive(Clone, Debug, PartialEq)]
pub enum OutputConfig {
    /// 输出到标准输出
    #[cfg(feature = "stdout")]
    Stdout,
    /// 输出到标准错误
    #[cfg(feature = "stderr")]
    Stderr,
    /// 输出到文件（路径）
    #[cfg(feature = "file")]
    File(alloc::string::String),
    /// 输出到环形缓冲区（容量）
    RingBuffer(usize),
}

/// 日志配置
///
/// 用于一键初始化日志系统
///
/// # 示例
///
/// ```
/// use dynaval_log::{LogConfig, Level};
///
/// let config = LogConfig::new(Level::Debug)
///     .with_ring_buffer(10000);
///
/// let (logger, ring) = config.init();
/// assert!(ring.is_some());
/// ```
#[derive(Clone, Debug)]
pub struct LogConfig {
    /// 日志级别
    pub level: Level,
    /// 输出目标列表
    pub outputs: Vec<OutputConfig>,
    /// 初始化后是否立即启用
    pub enabled: bool,
}

impl LogConfig {
    /// 创建配置（无输出）
    pub fn new(level: Level) -> Self {
        LogConfig {
            level,
            outputs: Vec::new(),
            enabled: true,
        }
    }

    /// 开发环境推荐配置
    ///
    /// - Debug 级别
    /// - 输出到 stdout
    /// - 环形缓冲区 10000 条（用于崩溃转储）
    #[cfg(feature = "stdout")]
    pub fn dev() -> Self {
        LogConfig {
            level: Level::Debug,
            outputs: alloc::vec![OutputConfig::Stdout, OutputConfig::RingBuffer(10000)],
            enabled: true,
        }
    }

    /// 生产环境推荐配置
    ///
    /// - Warn 级别
    /// - 输出到 stderr
    /// - 环形缓冲区 1000 条
    #[cfg(feature = "stderr")]
    pub fn production() -> Self {
        LogConfig {
            level: Level::Warn,
            outputs: alloc::vec![OutputConfig::Stderr, OutputConfig::RingBuffer(1000)],
            enabled: true,
        }
    }

    /// 测试环境配置（静默）
    pub fn test() -> Self {
        LogConfig {
            level: Level::Error,
            outputs: Vec::new(),
            enabled: false,
        }
    }

    /// 添加 stdout 输出
    #[cfg(feature = "stdout")]
    pub fn with_stdout(mut self) -> Self {
        if !self.outputs.contains(&OutputConfig::Stdout) {
            self.outputs.push(OutputConfig::Stdout);
        }
        self
    }

    /// 添加 stderr 输出
    #[cfg(feature = "stderr")]
    pub fn with_stderr(mut self) -> Self {
        if !self.outputs.contains(&OutputConfig::Stderr) {
            self.outputs.push(OutputConfig::Stderr);
        }
        self
    }

    /// 添加文件输出
    #[cfg(feature = "file")]
    pub fn with_file(mut self, path: impl Into<alloc::string::String>) -> Self {
        self.outputs.push(OutputConfig::File(path.into()));
        self
    }

    /// 添加环形缓冲区输出
    pub fn with_ring_buffer(mut self, capacity: usize) -> Self {
        self.outputs.push(OutputConfig::RingBuffer(capacity));
        self
    }

    /// 初始化后保持关闭，需要时再调用 `Logger::enable`
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// 初始化日志系统
    ///
    /// 返回 (logger, Option<ring_buffer>)，配置了多个环形缓冲区时返回最后一个
    pub fn init(self) -> (Arc<Logger>, Option<Arc<LogRingBuffer>>) {
        let logger = Logger::new(self.level);
        logger.set_enabled(self.enabled);
        let mut ring_buffer: Option<Arc<LogRingBuffer>> = None;

        for output in self.outputs {
            match output {
                #[cfg(feature = "stdout")]
                OutputConfig::Stdout => logger.add_sink(crate::StdoutSink),
                #[cfg(feature = "stderr")]
                OutputConfig::Stderr => logger.add_sink(crate::StderrSink),
                #[cfg(feature = "file")]
                OutputConfig::File(path) => {
                    if let Ok(sink) = crate::FileSink::new(&path) {
                        logger.add_sink(sink);
                    }
                }
                OutputConfig::RingBuffer(capacity) => {
                    let ring = LogRingBuffer::new(capacity);
                    ring_buffer = Some(Arc::clone(&ring));
                    logger.add_sink(ring);
                }
            }
        }

        (logger, ring_buffer)
    }
}
