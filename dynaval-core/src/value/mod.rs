//! 动态值（核心）
//!
//! `Value` 是一个句柄：标量内联存储，数组、对象、错误记录通过 `Rc`
//! 共享。克隆句柄只复制引用，两个句柄修改的是同一个容器：
//!
//! ```
//! use dynaval_core::Value;
//!
//! let mut a = Value::array();
//! let b = a.clone();
//! a.push(1u8).unwrap();
//! assert_eq!(b.size(), 1);
//!
//! let c = a.deep_copy().unwrap();
//! a.push(2u8).unwrap();
//! assert_eq!(c.size(), 1);
//! ```

mod access;
mod bytes;
mod coerce;
mod copy;
mod eq;
mod mutate;

pub use access::ElementIndex;
pub use bytes::DEFAULT_BYTE_LIMIT;
pub use coerce::Coercion;

use crate::error::{ValueError, ValueResult};
use crate::record::ErrorRecord;
use crate::region::Region;
use crate::tag::Tag;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::{Ref, RefCell};
use core::ops::Deref;

/// 有序序列，缓冲区来自 [`Region`]
pub type Sequence = allocator_api2::vec::Vec<Value, Region>;

/// 键值映射，缓冲区来自 [`Region`]，不保证迭代顺序
pub type Mapping =
    hashbrown::HashMap<String, Value, hashbrown::DefaultHashBuilder, Region>;

/// 值载荷，每个标签对应一个变体
#[derive(Clone, Debug)]
pub enum Payload {
    Error(Rc<ErrorRecord>),
    Undefined,
    Null,
    Any,
    Int(i32),
    UInt(u32),
    Float(f32),
    Double(f64),
    Long(i64),
    Bool(bool),
    String(String),
    Array(Rc<RefCell<Sequence>>),
    Object(Rc<RefCell<Mapping>>),
}

impl Payload {
    pub fn tag(&self) -> Tag {
        match self {
            Payload::Error(_) => Tag::Error,
            Payload::Undefined => Tag::Undefined,
            Payload::Null => Tag::Null,
            Payload::Any => Tag::Any,
            Payload::Int(_) => Tag::Int,
            Payload::UInt(_) => Tag::UInt,
            Payload::Float(_) => Tag::Float,
            Payload::Double(_) => Tag::Double,
            Payload::Long(_) => Tag::Long,
            Payload::Bool(_) => Tag::Bool,
            Payload::String(_) => Tag::String,
            Payload::Array(_) => Tag::Array,
            Payload::Object(_) => Tag::Object,
        }
    }
}

/// 动态值句柄
#[derive(Clone, Debug)]
pub struct Value {
    payload: Payload,
    frozen: bool,
    /// 保留标志，只随句柄传递
    solid: bool,
}

struct Sentinel(Value);

// Null 载荷不含 Rc，也没有任何路径能拿到它的可变引用
unsafe impl Sync for Sentinel {}

static NULL_SENTINEL: Sentinel = Sentinel(Value::null());

/// 只读访问的结果：容器内元素的借用，或共享的 Null 哨兵
pub enum ValueRef<'a> {
    Borrowed(Ref<'a, Value>),
    Null,
}

impl ValueRef<'_> {
    /// 是否为共享的 Null 哨兵（未命中）
    pub fn is_sentinel(&self) -> bool {
        matches!(self, ValueRef::Null)
    }
}

impl Deref for ValueRef<'_> {
    type Target = Value;

    fn deref(&self) -> &Value {
        match self {
            ValueRef::Borrowed(r) => &**r,
            ValueRef::Null => Value::null_ref(),
        }
    }
}

impl core::fmt::Debug for ValueRef<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Debug::fmt(&**self, f)
    }
}

// ==================== 构造 ====================

impl Value {
    #[inline]
    pub(crate) const fn from_payload(payload: Payload) -> Self {
        Value {
            payload,
            frozen: false,
            solid: false,
        }
    }

    pub const fn null() -> Self {
        Self::from_payload(Payload::Null)
    }

    /// 进程级共享的不可变 Null
    pub fn null_ref() -> &'static Value {
        &NULL_SENTINEL.0
    }

    pub const fn undefined() -> Self {
        Self::from_payload(Payload::Undefined)
    }

    pub const fn any() -> Self {
        Self::from_payload(Payload::Any)
    }

    pub const fn int(n: i32) -> Self {
        Self::from_payload(Payload::Int(n))
    }

    pub const fn uint(n: u32) -> Self {
        Self::from_payload(Payload::UInt(n))
    }

    pub const fn float(n: f32) -> Self {
        Self::from_payload(Payload::Float(n))
    }

    pub const fn double(n: f64) -> Self {
        Self::from_payload(Payload::Double(n))
    }

    pub const fn long(n: i64) -> Self {
        Self::from_payload(Payload::Long(n))
    }

    pub const fn bool(b: bool) -> Self {
        Self::from_payload(Payload::Bool(b))
    }

    pub fn string(s: impl Into<String>) -> Self {
        Self::from_payload(Payload::String(s.into()))
    }

    /// 空数组
    pub fn array() -> Self {
        Self::from(Sequence::new_in(Region::default()))
    }

    /// 空对象
    pub fn object() -> Self {
        Self::from(Mapping::new_in(Region::default()))
    }

    /// 由元素序列构建数组（对应初始化列表）
    pub fn list<I: IntoIterator<Item = Value>>(items: I) -> Self {
        let mut seq = Sequence::new_in(Region::default());
        seq.extend(items);
        Self::from(seq)
    }

    /// 错误值：状态码 0，调用栈为空数组
    pub fn error(message: impl Into<String>) -> Self {
        Self::error_with(message, 0, core::iter::empty::<String>())
    }

    /// 错误值：指定状态码和调用栈帧
    pub fn error_with<I, S>(message: impl Into<String>, status_code: i32, frames: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from(ErrorRecord::with_status(message, status_code).with_stack(frames))
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::null()
    }
}

// u8/u16/u32 → UInt；其余整数类型 → Float
macro_rules! impl_from_scalar {
    ($($t:ty => $variant:ident as $target:ty),* $(,)?) => {
        $(
            impl From<$t> for Value {
                #[inline]
                fn from(n: $t) -> Self {
                    Value::from_payload(Payload::$variant(n as $target))
                }
            }
        )*
    };
}

impl_from_scalar! {
    u8 => UInt as u32,
    u16 => UInt as u32,
    u32 => UInt as u32,
    i8 => Float as f32,
    i16 => Float as f32,
    i32 => Float as f32,
    i64 => Float as f32,
    isize => Float as f32,
    u64 => Float as f32,
    usize => Float as f32,
    f32 => Float as f32,
    f64 => Double as f64,
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::string(s)
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::string(s.as_str())
    }
}

impl From<ErrorRecord> for Value {
    fn from(record: ErrorRecord) -> Self {
        Value::from_payload(Payload::Error(Rc::new(record)))
    }
}

impl From<Sequence> for Value {
    fn from(seq: Sequence) -> Self {
        Value::from_payload(Payload::Array(Rc::new(RefCell::new(seq))))
    }
}

impl From<Mapping> for Value {
    fn from(map: Mapping) -> Self {
        Value::from_payload(Payload::Object(Rc::new(RefCell::new(map))))
    }
}

/// 包装已有的共享序列，不复制
impl From<Rc<RefCell<Sequence>>> for Value {
    fn from(seq: Rc<RefCell<Sequence>>) -> Self {
        Value::from_payload(Payload::Array(seq))
    }
}

/// 包装已有的共享映射，不复制
impl From<Rc<RefCell<Mapping>>> for Value {
    fn from(map: Rc<RefCell<Mapping>>) -> Self {
        Value::from_payload(Payload::Object(map))
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::list(items.into_iter().map(Into::into))
    }
}

impl<T: Into<Value>> FromIterator<T> for Value {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Value::list(iter.into_iter().map(Into::into))
    }
}

// ==================== 查询 ====================

impl Value {
    #[inline]
    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    #[inline]
    pub fn tag(&self) -> Tag {
        self.payload.tag()
    }

    /// 类型名称，见 [`Tag::name`]
    pub fn type_name(&self) -> &'static str {
        self.tag().name()
    }

    pub fn is_error(&self) -> bool {
        matches!(self.payload, Payload::Error(_))
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self.payload, Payload::Undefined)
    }

    pub fn is_null(&self) -> bool {
        matches!(self.payload, Payload::Null)
    }

    pub fn is_any(&self) -> bool {
        matches!(self.payload, Payload::Any)
    }

    pub fn is_float(&self) -> bool {
        matches!(self.payload, Payload::Float(_))
    }

    pub fn is_double(&self) -> bool {
        matches!(self.payload, Payload::Double(_))
    }

    pub fn is_long(&self) -> bool {
        matches!(self.payload, Payload::Long(_))
    }

    pub fn is_bool(&self) -> bool {
        matches!(self.payload, Payload::Bool(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self.payload, Payload::String(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self.payload, Payload::Array(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self.payload, Payload::Object(_))
    }

    /// 既不是 Null 也不是 Undefined
    pub fn is_present(&self) -> bool {
        !matches!(self.payload, Payload::Null | Payload::Undefined)
    }

    /// 按约定视为 false
    ///
    /// 错误值永远不是 falsy，即使消息为空。
    pub fn is_falsy(&self) -> bool {
        match &self.payload {
            Payload::Bool(b) => !b,
            Payload::Null | Payload::Undefined => true,
            Payload::Int(n) => *n == 0,
            Payload::UInt(n) => *n == 0,
            Payload::Float(n) => *n == 0.0,
            Payload::Double(n) => *n == 0.0,
            Payload::Long(n) => *n == 0,
            Payload::String(s) => s.is_empty(),
            Payload::Array(seq) => seq.try_borrow().is_ok_and(|s| s.is_empty()),
            Payload::Object(map) => map.try_borrow().is_ok_and(|m| m.is_empty()),
            Payload::Error(_) | Payload::Any => false,
        }
    }

    /// 数组或对象的元素个数，其他类型为 0
    pub fn size(&self) -> usize {
        match &self.payload {
            Payload::Array(seq) => seq.try_borrow().map_or(0, |s| s.len()),
            Payload::Object(map) => map.try_borrow().map_or(0, |m| m.len()),
            _ => 0,
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        match &self.payload {
            Payload::Object(map) => map.try_borrow().is_ok_and(|m| m.contains_key(key)),
            _ => false,
        }
    }

    /// 两个句柄是否共享同一个容器或错误记录
    pub fn ptr_eq(&self, other: &Value) -> bool {
        match (&self.payload, &other.payload) {
            (Payload::Array(a), Payload::Array(b)) => Rc::ptr_eq(a, b),
            (Payload::Object(a), Payload::Object(b)) => Rc::ptr_eq(a, b),
            (Payload::Error(a), Payload::Error(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match &self.payload {
            Payload::String(s) => Some(s),
            _ => None,
        }
    }

    /// 借用数组内容
    pub fn as_array(&self) -> ValueResult<Ref<'_, Sequence>> {
        match &self.payload {
            Payload::Array(seq) => seq.try_borrow().map_err(|_| ValueError::Aliased),
            other => Err(ValueError::mismatch(Tag::Array, other.tag())),
        }
    }

    /// 借用对象内容
    pub fn as_object(&self) -> ValueResult<Ref<'_, Mapping>> {
        match &self.payload {
            Payload::Object(map) => map.try_borrow().map_err(|_| ValueError::Aliased),
            other => Err(ValueError::mismatch(Tag::Object, other.tag())),
        }
    }

    pub fn to_error(&self) -> ValueResult<&ErrorRecord> {
        match &self.payload {
            Payload::Error(record) => Ok(record),
            other => Err(ValueError::mismatch(Tag::Error, other.tag())),
        }
    }

    /// 可变访问错误记录；记录被共享时先复制一份
    pub fn error_mut(&mut self) -> ValueResult<&mut ErrorRecord> {
        self.ensure_mutable()?;
        match &mut self.payload {
            Payload::Error(record) => Ok(Rc::make_mut(record)),
            other => Err(ValueError::mismatch(Tag::Error, other.tag())),
        }
    }

    // ==================== 冻结 ====================

    /// 冻结后所有修改入口返回 `FrozenValueViolation`
    ///
    /// 标志属于句柄，别名句柄不受影响。
    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    pub fn unfreeze(&mut self) {
        self.frozen = false;
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    pub fn is_solid(&self) -> bool {
        self.solid
    }

    pub fn set_solid(&mut self, solid: bool) {
        self.solid = solid;
    }
}
