//! 深拷贝：打破共享的唯一方式

use super::{Mapping, Payload, Sequence, Value};
use crate::config::DEFAULT_MAX_DEPTH;
use crate::error::{alloc_failed, ValueError, ValueResult};
use crate::region::Region;
use alloc::rc::Rc;
use core::cell::RefCell;

impl Value {
    /// 递归重建所有容器，结果与原值没有任何共享
    ///
    /// 错误值连同消息、状态码、键和调用栈一起复制。结果不带冻结标志。
    /// 嵌套超过 [`DEFAULT_MAX_DEPTH`] 层（例如数组包含自身）时返回 `TooDeep`。
    pub fn deep_copy(&self) -> ValueResult<Value> {
        self.deep_copy_at(0)
    }

    pub(crate) fn deep_copy_at(&self, depth: usize) -> ValueResult<Value> {
        if depth >= DEFAULT_MAX_DEPTH && self.tag().is_container() {
            return Err(ValueError::TooDeep(DEFAULT_MAX_DEPTH));
        }
        let payload = match &self.payload {
            Payload::Array(seq) => {
                let seq = seq.try_borrow().map_err(|_| ValueError::Aliased)?;
                let mut copy = Sequence::new_in(Region::default());
                copy.try_reserve(seq.len()).map_err(alloc_failed)?;
                for item in seq.iter() {
                    copy.push(item.deep_copy_at(depth + 1)?);
                }
                Payload::Array(Rc::new(RefCell::new(copy)))
            }
            Payload::Object(map) => {
                let map = map.try_borrow().map_err(|_| ValueError::Aliased)?;
                let mut copy = Mapping::new_in(Region::default());
                copy.try_reserve(map.len()).map_err(alloc_failed)?;
                for (key, item) in map.iter() {
                    copy.insert(key.clone(), item.deep_copy_at(depth + 1)?);
                }
                Payload::Object(Rc::new(RefCell::new(copy)))
            }
            Payload::Error(record) => Payload::Error(Rc::new(record.deep_copy_at(depth)?)),
            scalar => scalar.clone(),
        };
        Ok(Value::from_payload(payload))
    }
}
