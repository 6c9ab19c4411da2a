//! 点分路径访问

use crate::value::Value;

/// 沿 `a.b.c` 逐级查找对象成员
///
/// 返回命中值的句柄副本（容器与原树共享）；任一段缺失时返回 Null。
pub fn path_get(root: &Value, path: &str) -> Value {
    let mut current = root.clone();
    for segment in path.split('.') {
        if !current.contains_key(segment) {
            return Value::null();
        }
        let next = current.get_key(segment).clone();
        current = next;
    }
    current
}
