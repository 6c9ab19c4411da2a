//! dynaval-log - DynaVal 的日志门面
//!
//! 接收预先渲染好的字符串，或任意实现了 `Display` 的值（`Value` 的
//! `Display` 即其 JSON 文本），写入一个或多个输出目标。特点：
//! - **无平台耦合**：支持 `no_std` + `alloc`，通过 feature flag 选择平台
//! - **显式传递**：无全局 logger，开关与缩进层级都挂在 `Logger` 实例上
//! - **非阻塞**：环形缓冲区满了覆盖旧数据
//!
//! # 平台支持
//!
//! | Feature | 说明 | 适用场景 |
//! |---------|------|----------|
//! | `std` (默认) | 完整标准库支持 | 主机/测试 |
//! | `alloc` | 仅分配器，无std | 嵌入式 |
//!
//! # 快速开始
//!
//! ```ignore
//! use dynaval_log::{LogConfig, Level, info, log_value};
//!
//! let (logger, ring) = LogConfig::dev().init();
//! info!(logger, "启动完成");
//!
//! let _guard = logger.indent();
//! log_value!(logger, "payload", value);
//! ```
//!
//! ## no_std + alloc 平台
//!
//! ```ignore
//! use dynaval_log::{Logger, Level, LogRingBuffer, debug};
//!
//! let ring = LogRingBuffer::new(256);
//! let logger = Logger::new(Level::Debug).with_sink(ring);
//! debug!(logger, "嵌入式日志");
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

mod macros;
mod record;

#[cfg(feature = "alloc")]
mod ring_buffer;

#[cfg(feature = "alloc")]
mod spin;

#[cfg(feature = "alloc")]
mod logger;

#[cfg(feature = "alloc")]
mod config;

pub use record::{Level, Record};

// 宏通过 #[macro_export] 自动导出到 crate 根：
// trace!, debug!, info!, warn!, error!, log!, log_value!

#[cfg(feature = "alloc")]
pub use ring_buffer::{LogRingBuffer, RingBufferStats};

#[cfg(feature = "alloc")]
pub use logger::{IndentGuard, LogSink, Logger};

#[cfg(feature = "std")]
pub use logger::{FileSink, StderrSink, StdoutSink};

#[cfg(feature = "alloc")]
pub use config::{LogConfig, OutputConfig};

#[doc(hidden)]
#[cfg(feature = "alloc")]
pub mod __private {
    pub use alloc::format;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordering() {
        assert!(Level::Trace < Level::Debug);
        assert!(Level::Error > Level::Warn);
    }
}
