//! 契约违规错误
//!
//! 值级错误（`Tag::Error`）是数据，见 [`crate::ErrorRecord`]；
//! 这里是误用值时返回的失败，例如修改已冻结的值。

use crate::tag::Tag;
use thiserror::Error;

/// 值操作失败
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueError {
    /// 值已冻结，拒绝修改
    #[error("attempted to modify a frozen value")]
    FrozenValueViolation,

    /// 严格访问时类型不符
    #[error("expected {expected}, found {found}")]
    TypeMismatch { expected: Tag, found: Tag },

    /// 对 Error 值使用字符串键
    #[error("keyed access on a value of type error")]
    KeyedAccessOnError,

    /// 可变路径上的负索引
    #[error("negative index {0}")]
    NegativeIndex(i64),

    /// 字节转换遇到非整数元素
    #[error("element {index} is {found}, not a byte")]
    NotAByte { index: usize, found: Tag },

    /// 字节转换遇到 0..=255 以外的值
    #[error("element {index} value {value} is out of byte range (0-255)")]
    ByteOutOfRange { index: usize, value: i64 },

    /// 字节数组不是合法 UTF-8
    #[error("byte array is not valid utf-8")]
    InvalidUtf8,

    /// 共享容器正被另一个句柄借用
    #[error("container is already borrowed through another handle")]
    Aliased,

    /// 分配器无法满足请求
    #[error("allocation failed")]
    AllocFailed,

    /// 容器嵌套超过上限，通常是自引用
    #[error("nesting deeper than {0} levels")]
    TooDeep(usize),
}

/// 值操作结果
pub type ValueResult<T> = Result<T, ValueError>;

impl ValueError {
    pub(crate) fn mismatch(expected: Tag, found: Tag) -> Self {
        ValueError::TypeMismatch { expected, found }
    }
}

/// 把容器的 `TryReserveError` 映射为 `AllocFailed`
pub(crate) fn alloc_failed<E: core::fmt::Debug>(err: E) -> ValueError {
    tracing::warn!(target: "dynaval::region", error = ?err, "container reservation failed");
    ValueError::AllocFailed
}
