//! DynaVal Core - 动态标签值
//!
//! 一个句柄类型承载 null/undefined、布尔、多种数值、字符串、
//! 有序序列、键值映射以及错误记录。
//!
//! # 共享语义
//!
//! `Value::clone()` 是句柄复制：数组、对象和错误记录通过引用计数共享，
//! 两个句柄看到同一个底层容器，直到其中一个通过 `become_*` / `set`
//! 绑定新容器。需要独立副本时使用 [`Value::deep_copy`]。
//!
//! 容器不是线程安全的（`Rc` + `RefCell`），跨线程使用由调用方负责同步。
//!
//! # 平台
//!
//! - `std`（默认）：主机平台
//! - 关闭 `std`：`no_std + alloc`，用于嵌入式目标
//! - `psram`：容器缓冲区从外部 PSRAM 分配（ESP-IDF）

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod config;
pub mod error;
pub mod json;
pub mod path;
pub mod record;
pub mod reflect;
pub mod region;
mod serde_impl;
pub mod tag;
pub mod value;

pub use config::{ErrorStyle, JsonConfig, DEFAULT_MAX_DEPTH};
pub use error::{ValueError, ValueResult};
pub use path::path_get;
pub use record::ErrorRecord;
pub use reflect::{make_param, make_type};
pub use region::{HeapRegion, PsramRegion, Region};
pub use tag::Tag;
pub use value::{
    Coercion, ElementIndex, Mapping, Payload, Sequence, Value, ValueRef, DEFAULT_BYTE_LIMIT,
};

/// 构建数组值，嵌套调用得到嵌套数组
///
/// ```
/// use dynaval_core::{array, Value};
///
/// let v = array!["a", Value::int(1), array![true, false]];
/// assert_eq!(v.to_json(), r#"["a",1,[true,false]]"#);
/// ```
#[macro_export]
macro_rules! array {
    () => {
        $crate::Value::array()
    };
    ($($item:expr),+ $(,)?) => {
        $crate::Value::list([$($crate::Value::from($item)),+])
    };
}
