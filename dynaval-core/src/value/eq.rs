//! 相等比较
//!
//! 标签感知：Null/Undefined 只等于同标签；整数族按数值比较；
//! Float/Double 只与同标签比较载荷；数组、对象和错误比较的是
//! 共享身份（同一个 `Rc`），内容相同但分配不同的两个数组不相等。

use super::{Payload, Value};
use alloc::rc::Rc;
use alloc::string::String;

impl PartialEq for Value {
    fn eq(&self, other: &Value) -> bool {
        match (&self.payload, &other.payload) {
            (Payload::Null, Payload::Null)
            | (Payload::Undefined, Payload::Undefined)
            | (Payload::Any, Payload::Any) => true,
            (Payload::Int(_) | Payload::UInt(_) | Payload::Long(_), _)
                if other.tag().is_integer() =>
            {
                self.loose_integer() == other.loose_integer()
            }
            (Payload::Float(a), Payload::Float(b)) => a == b,
            (Payload::Double(a), Payload::Double(b)) => a == b,
            (Payload::Bool(a), Payload::Bool(b)) => a == b,
            (Payload::String(a), Payload::String(b)) => a == b,
            (Payload::Array(a), Payload::Array(b)) => Rc::ptr_eq(a, b),
            (Payload::Object(a), Payload::Object(b)) => Rc::ptr_eq(a, b),
            (Payload::Error(a), Payload::Error(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == Some(other)
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}

impl PartialEq<String> for Value {
    fn eq(&self, other: &String) -> bool {
        self.as_str() == Some(other.as_str())
    }
}

impl PartialEq<bool> for Value {
    fn eq(&self, other: &bool) -> bool {
        matches!(self.payload, Payload::Bool(b) if b == *other)
    }
}

impl PartialEq<i32> for Value {
    fn eq(&self, other: &i32) -> bool {
        match self.payload {
            Payload::Int(n) => n == *other,
            Payload::UInt(n) => n == *other as u32,
            Payload::Long(n) => n == i64::from(*other),
            Payload::Float(n) => n == *other as f32,
            _ => false,
        }
    }
}

impl PartialEq<u32> for Value {
    fn eq(&self, other: &u32) -> bool {
        match self.payload {
            Payload::UInt(n) => n == *other,
            Payload::Int(n) => n == *other as i32,
            Payload::Long(n) => n == i64::from(*other),
            Payload::Float(n) => n == *other as f32,
            _ => false,
        }
    }
}

impl PartialEq<f32> for Value {
    fn eq(&self, other: &f32) -> bool {
        match self.payload {
            Payload::Float(n) => n == *other,
            Payload::Int(n) => n as f32 == *other,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_and_undefined() {
        assert_eq!(Value::null(), Value::null());
        assert_ne!(Value::null(), Value::undefined());
        assert_ne!(Value::undefined(), Value::bool(false));
    }

    #[test]
    fn test_integer_family_cross_compares() {
        assert_eq!(Value::int(5), Value::uint(5));
        assert_eq!(Value::uint(5), Value::long(5));
        assert_ne!(Value::int(-1), Value::uint(u32::MAX));
        assert_ne!(Value::int(5), Value::float(5.0));
    }

    #[test]
    fn test_float_same_tag_only() {
        assert_eq!(Value::float(1.5), Value::float(1.5));
        assert_ne!(Value::float(1.0), Value::double(1.0));
    }

    #[test]
    fn test_containers_compare_by_identity() {
        let a = Value::list([Value::int(1)]);
        let b = Value::list([Value::int(1)]);
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
        assert_eq!(a.to_json(), b.to_json());

        let e = Value::error("x");
        assert_eq!(e, e.clone());
        assert_ne!(e, Value::error("x"));
    }

    #[test]
    fn test_scalar_comparisons() {
        assert_eq!(Value::string("a"), "a");
        assert_eq!(Value::string("a"), String::from("a"));
        assert_ne!(Value::int(0), "0");
        assert_eq!(Value::bool(true), true);
        assert_eq!(Value::uint(3), 3i32);
        assert_eq!(Value::int(3), 3u32);
        assert_eq!(Value::from(3), 3i32);
        assert_eq!(Value::int(2), 2.0f32);
        assert_ne!(Value::uint(2), 2.0f32);
    }
}
