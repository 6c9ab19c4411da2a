//! 修改入口与标签转换
//!
//! 所有入口先检查冻结标志。`become_*` 在标签已匹配时什么也不做，
//! 否则绑定新的空载荷，与之前共享的容器脱离。

use super::{Mapping, Payload, Sequence, Value};
use crate::error::{alloc_failed, ValueError, ValueResult};
use crate::record::ErrorRecord;
use crate::region::Region;
use crate::tag::Tag;
use alloc::rc::Rc;
use alloc::string::String;
use core::cell::{RefCell, RefMut};

fn fresh_sequence() -> Payload {
    Payload::Array(Rc::new(RefCell::new(Sequence::new_in(Region::default()))))
}

fn fresh_mapping() -> Payload {
    Payload::Object(Rc::new(RefCell::new(Mapping::new_in(Region::default()))))
}

impl Value {
    pub(crate) fn ensure_mutable(&self) -> ValueResult<()> {
        if self.frozen {
            tracing::debug!(
                target: "dynaval::value",
                tag = self.type_name(),
                "rejected mutation of frozen value"
            );
            return Err(ValueError::FrozenValueViolation);
        }
        Ok(())
    }

    pub(crate) fn sequence_mut(&self) -> ValueResult<RefMut<'_, Sequence>> {
        match &self.payload {
            Payload::Array(seq) => seq.try_borrow_mut().map_err(|_| ValueError::Aliased),
            other => Err(ValueError::mismatch(Tag::Array, other.tag())),
        }
    }

    pub(crate) fn mapping_mut(&self) -> ValueResult<RefMut<'_, Mapping>> {
        match &self.payload {
            Payload::Object(map) => map.try_borrow_mut().map_err(|_| ValueError::Aliased),
            other => Err(ValueError::mismatch(Tag::Object, other.tag())),
        }
    }

    fn become_with(&mut self, tag: Tag, init: impl FnOnce() -> Payload) -> ValueResult<&mut Self> {
        self.ensure_mutable()?;
        if self.tag() != tag {
            self.payload = init();
        }
        Ok(self)
    }

    // ==================== 标签转换 ====================

    pub fn become_array(&mut self) -> ValueResult<&mut Self> {
        self.become_with(Tag::Array, fresh_sequence)
    }

    pub fn become_object(&mut self) -> ValueResult<&mut Self> {
        self.become_with(Tag::Object, fresh_mapping)
    }

    pub fn become_string(&mut self) -> ValueResult<&mut Self> {
        self.become_with(Tag::String, || Payload::String(String::new()))
    }

    pub fn become_float(&mut self) -> ValueResult<&mut Self> {
        self.become_with(Tag::Float, || Payload::Float(0.0))
    }

    pub fn become_double(&mut self) -> ValueResult<&mut Self> {
        self.become_with(Tag::Double, || Payload::Double(0.0))
    }

    pub fn become_int(&mut self) -> ValueResult<&mut Self> {
        self.become_with(Tag::Int, || Payload::Int(0))
    }

    pub fn become_uint(&mut self) -> ValueResult<&mut Self> {
        self.become_with(Tag::UInt, || Payload::UInt(0))
    }

    pub fn become_long(&mut self) -> ValueResult<&mut Self> {
        self.become_with(Tag::Long, || Payload::Long(0))
    }

    pub fn become_bool(&mut self) -> ValueResult<&mut Self> {
        self.become_with(Tag::Bool, || Payload::Bool(false))
    }

    pub fn become_null(&mut self) -> ValueResult<&mut Self> {
        self.become_with(Tag::Null, || Payload::Null)
    }

    pub fn become_undefined(&mut self) -> ValueResult<&mut Self> {
        self.become_with(Tag::Undefined, || Payload::Undefined)
    }

    /// 变为错误值，记录为默认值（状态码 500，消息为空）
    pub fn become_error(&mut self) -> ValueResult<&mut Self> {
        self.become_with(Tag::Error, || {
            Payload::Error(Rc::new(ErrorRecord::default()))
        })
    }

    // ==================== 赋值 ====================

    /// 替换载荷
    ///
    /// 传入另一个句柄时共享它的容器（句柄复制）；本句柄的冻结和
    /// solid 标志保持不变。
    pub fn set(&mut self, value: impl Into<Value>) -> ValueResult<&mut Self> {
        self.ensure_mutable()?;
        self.payload = value.into().payload;
        Ok(self)
    }

    /// 变为 Null
    pub fn reset(&mut self) -> ValueResult<()> {
        self.ensure_mutable()?;
        self.payload = Payload::Null;
        Ok(())
    }

    /// 清空当前载荷但保留标签
    ///
    /// 容器换成新的空容器，不影响共享旧容器的其他句柄。
    pub fn clear(&mut self) -> ValueResult<()> {
        self.ensure_mutable()?;
        let replacement = match &mut self.payload {
            Payload::String(s) => {
                s.clear();
                None
            }
            Payload::Array(_) => Some(fresh_sequence()),
            Payload::Object(_) => Some(fresh_mapping()),
            Payload::Error(_) => Some(Payload::Error(Rc::new(ErrorRecord::default()))),
            _ => None,
        };
        if let Some(payload) = replacement {
            self.payload = payload;
        }
        Ok(())
    }

    // ==================== 容器操作 ====================

    /// 追加元素，返回新元素的可变借用
    ///
    /// 不是数组时先原地变为数组。
    pub fn push(&mut self, value: impl Into<Value>) -> ValueResult<RefMut<'_, Value>> {
        let value = value.into();
        self.become_array()?;
        let mut seq = self.sequence_mut()?;
        seq.try_reserve(1).map_err(alloc_failed)?;
        let index = seq.len();
        seq.push(value);
        Ok(RefMut::map(seq, |s| &mut s[index]))
    }

    /// 移除并返回指定位置的元素；不是数组或越界时返回 `None`
    pub fn remove(&mut self, index: usize) -> ValueResult<Option<Value>> {
        self.ensure_mutable()?;
        if !self.is_array() {
            return Ok(None);
        }
        let mut seq = self.sequence_mut()?;
        if index >= seq.len() {
            return Ok(None);
        }
        Ok(Some(seq.remove(index)))
    }

    /// 写入键，返回旧值
    ///
    /// 不是对象时先原地变为对象；错误值返回 `KeyedAccessOnError`。
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> ValueResult<Option<Value>> {
        self.ensure_mutable()?;
        if self.is_error() {
            return Err(ValueError::KeyedAccessOnError);
        }
        self.become_object()?;
        let mut map = self.mapping_mut()?;
        map.try_reserve(1).map_err(alloc_failed)?;
        Ok(map.insert(key.into(), value.into()))
    }

    /// 删除键，返回旧值；不是对象时返回 `None`
    pub fn remove_key(&mut self, key: &str) -> ValueResult<Option<Value>> {
        self.ensure_mutable()?;
        if !self.is_object() {
            return Ok(None);
        }
        Ok(self.mapping_mut()?.remove(key))
    }
}
