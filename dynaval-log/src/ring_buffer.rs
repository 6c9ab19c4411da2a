//! 崩溃转储用的环形缓冲区（no_std + alloc 兼容）
//!
//! 固定数量的槽位，按写入序号取模定位；满了覆盖最旧的记录。

use crate::logger::LogSink;
use crate::record::{Level, Record};
use crate::spin;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

/// 缓冲区快照统计
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RingBufferStats {
    /// 当前保留的记录数
    pub record_count: usize,
    /// 被覆盖的记录数
    pub dropped_count: usize,
    /// 自创建或上次清空以来写入的总数
    pub total_written: u64,
    pub capacity: usize,
}

struct Slots {
    entries: Vec<Option<Record>>,
    /// 下一条记录的序号
    next: u64,
    dropped: usize,
}

impl Slots {
    fn with_capacity(capacity: usize) -> Self {
        let mut entries = Vec::with_capacity(capacity);
        entries.resize_with(capacity, || None);
        Slots {
            entries,
            next: 0,
            dropped: 0,
        }
    }

    fn retained(&self) -> usize {
        (self.next as usize).min(self.entries.len())
    }

    /// 按写入顺序遍历保留的记录
    fn ordered(&self) -> impl Iterator<Item = &Record> + '_ {
        let cap = self.entries.len();
        let start = self.next - self.retained() as u64;
        (start..self.next).filter_map(move |seq| self.entries[(seq % cap as u64) as usize].as_ref())
    }
}

/// 日志环形缓冲区
///
/// 容量为 0 时丢弃所有记录。
pub struct LogRingBuffer {
    slots: spin::Mutex<Slots>,
    capacity: usize,
}

impl LogRingBuffer {
    pub fn new(capacity: usize) -> Arc<Self> {
        Arc::new(LogRingBuffer {
            slots: spin::Mutex::new(Slots::with_capacity(capacity)),
            capacity,
        })
    }

    fn push(&self, record: Record) {
        let mut slots = self.slots.lock();
        if self.capacity == 0 {
            slots.dropped += 1;
            slots.next += 1;
            return;
        }
        let index = (slots.next % self.capacity as u64) as usize;
        if slots.entries[index].replace(record).is_some() {
            slots.dropped += 1;
        }
        slots.next += 1;
    }

    /// 保留的记录，最旧的在前
    pub fn dump_records(&self) -> Vec<Record> {
        self.slots.lock().ordered().cloned().collect()
    }

    /// 只取级别不低于 `level` 的记录
    pub fn dump_at_least(&self, level: Level) -> Vec<Record> {
        self.slots
            .lock()
            .ordered()
            .filter(|r| r.level >= level)
            .cloned()
            .collect()
    }

    /// 每条记录一行
    pub fn dump(&self) -> String {
        let slots = self.slots.lock();
        let mut out = String::new();
        for (i, record) in slots.ordered().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.push_str(&record.format());
        }
        out
    }

    pub fn clear(&self) {
        *self.slots.lock() = Slots::with_capacity(self.capacity);
    }

    pub fn stats(&self) -> RingBufferStats {
        let slots = self.slots.lock();
        RingBufferStats {
            record_count: slots.retained(),
            dropped_count: slots.dropped,
            total_written: slots.next,
            capacity: self.capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.slots.lock().retained()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn dropped_count(&self) -> usize {
        self.slots.lock().dropped
    }
}

impl LogSink for LogRingBuffer {
    fn write(&self, record: &Record) {
        self.push(record.clone());
    }
}

impl LogSink for Arc<LogRingBuffer> {
    fn write(&self, record: &Record) {
        self.push(record.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(message: String) -> Record {
        Record::new(Level::Info, "test", message)
    }

    #[test]
    fn test_keeps_order_until_full() {
        let buffer = LogRingBuffer::new(3);
        assert!(buffer.is_empty());

        buffer.push(info("a".into()));
        buffer.push(info("b".into()));
        assert_eq!(buffer.len(), 2);
        assert_eq!(buffer.dropped_count(), 0);

        let messages: Vec<_> = buffer.dump_records().into_iter().map(|r| r.message).collect();
        assert_eq!(messages, ["a", "b"]);
    }

    #[test]
    fn test_wraps_and_overwrites_oldest() {
        let buffer = LogRingBuffer::new(3);
        for i in 0..5 {
            buffer.push(info(alloc::format!("msg{i}")));
        }

        let records = buffer.dump_records();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].message, "msg2");
        assert_eq!(records[2].message, "msg4");
        assert_eq!(buffer.dropped_count(), 2);
    }

    #[test]
    fn test_zero_capacity_drops_everything() {
        let buffer = LogRingBuffer::new(0);
        buffer.push(info("lost".into()));

        assert!(buffer.is_empty());
        assert_eq!(buffer.stats().dropped_count, 1);
        assert_eq!(buffer.dump(), "");
    }

    #[test]
    fn test_clear_resets_counters() {
        let buffer = LogRingBuffer::new(1);
        buffer.push(info("msg1".into()));
        buffer.push(info("msg2".into()));
        assert_eq!(buffer.dropped_count(), 1);

        buffer.clear();
        assert!(buffer.is_empty());
        assert_eq!(buffer.stats(), RingBufferStats { capacity: 1, ..Default::default() });
    }

    #[test]
    fn test_dump_at_least() {
        let buffer = LogRingBuffer::new(8);
        buffer.write(&Record::new(Level::Debug, "test", "noise"));
        buffer.write(&Record::new(Level::Warn, "test", "frozen"));
        buffer.write(&Record::new(Level::Error, "test", "alloc"));

        let severe = buffer.dump_at_least(Level::Warn);
        assert_eq!(severe.len(), 2);
        assert_eq!(severe[0].message, "frozen");
    }

    #[test]
    fn test_dump_format() {
        let buffer = LogRingBuffer::new(10);
        buffer.write(&Record::new(Level::Info, "test", "first line"));
        buffer.write(&Record::new(Level::Warn, "test", "second line").with_indent(1));

        let dump = buffer.dump();
        let lines: Vec<&str> = dump.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("INFO") && lines[0].contains("first line"));
        assert!(lines[1].starts_with('\t') && lines[1].contains("WARN"));
    }

    #[test]
    fn test_stats_total_written() {
        let buffer = LogRingBuffer::new(5);
        for i in 0..7 {
            buffer.push(info(alloc::format!("msg{i}")));
        }

        let stats = buffer.stats();
        assert_eq!(stats.record_count, 5);
        assert_eq!(stats.dropped_count, 2);
        assert_eq!(stats.total_written, 7);
    }

    #[test]
    fn test_concurrent_writers() {
        use std::sync::Barrier;

        let buffer = LogRingBuffer::new(1000);
        let barrier = Arc::new(Barrier::new(4));
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let buf = Arc::clone(&buffer);
                let b = Arc::clone(&barrier);
                std::thread::spawn(move || {
                    b.wait();
                    for j in 0..25 {
                        buf.push(info(format!("thread {i} msg {j}")));
                    }
                })
            })
            .collect();

        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(buffer.len(), 100);
    }
}
