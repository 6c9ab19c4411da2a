//! 反射节点构建
//!
//! 用值本身描述类型和参数，供外部构建类 AST 结构：
//!
//! - 类型：`{kind:"DATA_TYPE", value:<类型名>, subType?}`
//! - 参数：`{kind:"IDENTIFIER", value, type}`，带默认值时为
//!   `{kind:"ASSIGNMENT_PATTERN", left:{...}, operator:"=", right:{kind:"LITERAL", value}}`

use crate::error::ValueResult;
use crate::tag::Tag;
use crate::value::Value;

/// 类型描述节点；`sub_type` 为 Null 时等同于不提供，其他值（包括 Undefined）照常写入
pub fn make_type(tag: Tag, sub_type: Option<Value>) -> ValueResult<Value> {
    let mut node = Value::object();
    node.insert("kind", "DATA_TYPE")?;
    node.insert("value", tag.name())?;
    if let Some(sub_type) = sub_type.filter(|sub| !sub.is_null()) {
        node.insert("subType", sub_type)?;
    }
    Ok(node)
}

/// 参数描述节点，`type_node` 以句柄形式共享
pub fn make_param(name: &str, type_node: Value, default: Option<Value>) -> ValueResult<Value> {
    let mut identifier = Value::object();
    identifier.insert("kind", "IDENTIFIER")?;
    identifier.insert("value", name)?;
    identifier.insert("type", type_node)?;

    let Some(default) = default else {
        return Ok(identifier);
    };

    let mut literal = Value::object();
    literal.insert("kind", "LITERAL")?;
    literal.insert("value", default)?;

    let mut node = Value::object();
    node.insert("kind", "ASSIGNMENT_PATTERN")?;
    node.insert("left", identifier)?;
    node.insert("operator", "=")?;
    node.insert("right", literal)?;
    Ok(node)
}
