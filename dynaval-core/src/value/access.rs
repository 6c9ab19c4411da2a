//! 索引访问
//!
//! 只读形式从不分配也不修改接收者，未命中时返回共享的 Null 哨兵。
//! 可变形式会把接收者原地变为数组或对象，并按需扩展。

use super::{Payload, Value, ValueRef};
use crate::error::{alloc_failed, ValueError, ValueResult};
use core::cell::{Ref, RefMut};

/// 可用作数组下标的整数类型
pub trait ElementIndex: Copy {
    /// 转为 `usize`；负数原样返回在 `Err` 中
    fn to_index(self) -> Result<usize, i64>;
}

impl ElementIndex for usize {
    fn to_index(self) -> Result<usize, i64> {
        Ok(self)
    }
}

impl ElementIndex for u32 {
    fn to_index(self) -> Result<usize, i64> {
        Ok(self as usize)
    }
}

macro_rules! impl_signed_index {
    ($($t:ty),*) => {
        $(
            impl ElementIndex for $t {
                fn to_index(self) -> Result<usize, i64> {
                    usize::try_from(self).map_err(|_| self as i64)
                }
            }
        )*
    };
}

impl_signed_index!(i32, i64, isize);

impl Value {
    /// 读取数组元素
    pub fn get(&self, index: impl ElementIndex) -> ValueRef<'_> {
        let (Ok(index), Payload::Array(seq)) = (index.to_index(), &self.payload) else {
            return ValueRef::Null;
        };
        let Ok(seq) = seq.try_borrow() else {
            tracing::warn!(target: "dynaval::value", index, "array is mutably borrowed elsewhere");
            return ValueRef::Null;
        };
        match Ref::filter_map(seq, |s| s.get(index)) {
            Ok(item) => ValueRef::Borrowed(item),
            Err(_) => ValueRef::Null,
        }
    }

    /// 读取对象成员
    pub fn get_key(&self, key: &str) -> ValueRef<'_> {
        let Payload::Object(map) = &self.payload else {
            return ValueRef::Null;
        };
        let Ok(map) = map.try_borrow() else {
            tracing::warn!(target: "dynaval::value", key, "object is mutably borrowed elsewhere");
            return ValueRef::Null;
        };
        match Ref::filter_map(map, |m| m.get(key)) {
            Ok(item) => ValueRef::Borrowed(item),
            Err(_) => ValueRef::Null,
        }
    }

    /// 可写的数组槽位
    ///
    /// 不是数组时先变为数组；下标超出长度时用 Null 填充到该位置。
    pub fn slot(&mut self, index: impl ElementIndex) -> ValueResult<RefMut<'_, Value>> {
        self.ensure_mutable()?;
        let index = index.to_index().map_err(ValueError::NegativeIndex)?;
        self.become_array()?;

        let mut seq = self.sequence_mut()?;
        let len = seq.len();
        if index >= len {
            let wanted = index.checked_add(1).ok_or(ValueError::AllocFailed)?;
            seq.try_reserve(wanted - len).map_err(alloc_failed)?;
            seq.extend((len..=index).map(|_| Value::null()));
        }
        Ok(RefMut::map(seq, |s| &mut s[index]))
    }

    /// 可写的对象槽位，键不存在时插入 Null
    ///
    /// 错误值返回 `KeyedAccessOnError`；其他非对象先变为对象。
    pub fn slot_key(&mut self, key: &str) -> ValueResult<RefMut<'_, Value>> {
        self.ensure_mutable()?;
        if self.is_error() {
            return Err(ValueError::KeyedAccessOnError);
        }
        self.become_object()?;

        let mut map = self.mapping_mut()?;
        if !map.contains_key(key) {
            map.try_reserve(1).map_err(alloc_failed)?;
        }
        Ok(RefMut::map(map, |m| m.entry_ref(key).or_insert_with(Value::null)))
    }

    /// `slot(index)` 后对槽位调用 `set`，槽位自身冻结时同样拒绝
    pub fn set_at(&mut self, index: impl ElementIndex, value: impl Into<Value>) -> ValueResult<()> {
        self.slot(index)?.set(value)?;
        Ok(())
    }

    /// `slot_key(key)` 后对槽位调用 `set`
    pub fn set_key(&mut self, key: &str, value: impl Into<Value>) -> ValueResult<()> {
        self.slot_key(key)?.set(value)?;
        Ok(())
    }
}
