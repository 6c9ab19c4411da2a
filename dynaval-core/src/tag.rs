//! 值的类型标签

use core::fmt;

/// 值当前承载的类型
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tag {
    Error,
    Undefined,
    Null,
    Any,
    Int,
    UInt,
    Float,
    Double,
    Long,
    Bool,
    String,
    Array,
    Object,
}

impl Tag {
    /// 所有标签，按声明顺序
    pub const ALL: [Tag; 13] = [
        Tag::Error,
        Tag::Undefined,
        Tag::Null,
        Tag::Any,
        Tag::Int,
        Tag::UInt,
        Tag::Float,
        Tag::Double,
        Tag::Long,
        Tag::Bool,
        Tag::String,
        Tag::Array,
        Tag::Object,
    ];

    /// 规范名称，用于诊断和反射节点
    pub const fn name(self) -> &'static str {
        match self {
            Tag::Error => "error",
            Tag::Undefined => "undefined",
            Tag::Null => "null",
            Tag::Any => "any",
            Tag::Int => "int",
            Tag::UInt => "u_int",
            Tag::Float => "float",
            Tag::Double => "double",
            Tag::Long => "long",
            Tag::Bool => "boolean",
            Tag::String => "string",
            Tag::Array => "array",
            Tag::Object => "object",
        }
    }

    /// 整数族：Int / UInt / Long
    pub const fn is_integer(self) -> bool {
        matches!(self, Tag::Int | Tag::UInt | Tag::Long)
    }

    /// 数值族（含浮点）
    pub const fn is_numeric(self) -> bool {
        matches!(
            self,
            Tag::Int | Tag::UInt | Tag::Long | Tag::Float | Tag::Double
        )
    }

    /// 有共享容器载荷
    pub const fn is_container(self) -> bool {
        matches!(self, Tag::Array | Tag::Object)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names() {
        assert_eq!(Tag::UInt.name(), "u_int");
        assert_eq!(Tag::Bool.name(), "boolean");
        assert_eq!(Tag::Object.to_string(), "object");
    }

    #[test]
    fn test_names_are_unique() {
        for (i, a) in Tag::ALL.iter().enumerate() {
            for b in &Tag::ALL[i + 1..] {
                assert_ne!(a.name(), b.name());
            }
        }
    }

    #[test]
    fn test_families() {
        assert!(Tag::Long.is_integer());
        assert!(!Tag::Float.is_integer());
        assert!(Tag::Double.is_numeric());
        assert!(!Tag::Bool.is_numeric());
        assert!(Tag::Array.is_container());
        assert!(!Tag::Error.is_container());
    }
}
