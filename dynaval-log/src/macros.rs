//! 日志宏实现（no_std 兼容）

/// 记录 Trace 级别日志
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)*) => {
        $crate::log!($logger, $crate::Level::Trace, $($arg)*)
    };
}

/// 记录 Debug 级别日志
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)*) => {
        $crate::log!($logger, $crate::Level::Debug, $($arg)*)
    };
}

/// 记录 Info 级别日志
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)*) => {
        $crate::log!($logger, $crate::Level::Info, $($arg)*)
    };
}

/// 记录 Warn 级别日志
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)*) => {
        $crate::log!($logger, $crate::Level::Warn, $($arg)*)
    };
}

/// 记录 Error 级别日志
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)*) => {
        $crate::log!($logger, $crate::Level::Error, $($arg)*)
    };
}

/// 通用日志宏
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)*) => {{
        // 惰性求值：先检查级别，只有启用时才格式化消息
        if $logger.is_enabled($level) {
            let message = $crate::__private::format!($($arg)*);
            $logger.log($level, module_path!(), message);
        }
    }};
}

/// 以 Info 级别记录 "标签 值"，值按 `Display` 渲染
#[macro_export]
macro_rules! log_value {
    ($logger:expr, $label:expr, $value:expr) => {
        $crate::log_value!($logger, $crate::Level::Info, $label, $value)
    };
    ($logger:expr, $level:expr, $label:expr, $value:expr) => {
        $logger.log_display($level, module_path!(), $label, &$value)
    };
}

#[cfg(test)]
mod tests {
    use crate::{Level, LogRingBuffer, Logger};

    #[test]
    fn test_level_filtering_in_macros() {
        let ring = LogRingBuffer::new(100);
        let logger = Logger::new(Level::Warn).with_sink(ring.clone());

        trace!(logger, "trace msg");
        debug!(logger, "debug msg");
        info!(logger, "info msg");
        warn!(logger, "warn msg");
        error!(logger, "error msg");

        let records = ring.dump_records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].level, Level::Warn);
        assert_eq!(records[1].level, Level::Error);
    }

    #[test]
    fn test_formatting() {
        let ring = LogRingBuffer::new(100);
        let logger = Logger::new(Level::Debug).with_sink(ring.clone());

        let name = "tag";
        debug!(logger, "processing {}: count = {}", name, 42);

        let records = ring.dump_records();
        assert_eq!(records[0].message, "processing tag: count = 42");
        assert_eq!(records[0].target, module_path!());
    }

    #[test]
    fn test_log_value_macro() {
        let ring = LogRingBuffer::new(100);
        let logger = Logger::new(Level::Debug).with_sink(ring.clone());

        log_value!(logger, "count", 7);
        log_value!(logger, Level::Debug, "flag", true);

        let records = ring.dump_records();
        assert_eq!(records[0].message, "count 7");
        assert_eq!(records[0].level, Level::Info);
        assert_eq!(records[1].message, "flag true");
    }
}
