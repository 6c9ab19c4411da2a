//! 序列化配置 - 纯数据，无逻辑、无全局状态

use serde::{Deserialize, Serialize};

/// 默认嵌套深度上限，JSON 输出、深拷贝和 serde 桥接共用
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// 错误值在 JSON 文本中的表示方式
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorStyle {
    /// `{"error":{"message":..,"statusCode":..,"key":..,"stack":[..]}}`
    #[default]
    Structured,
    /// 裸文本 `Error(<code>): <message>`，输出不再是合法 JSON
    Rendered,
}

/// JSON 输出配置
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JsonConfig {
    /// 错误值的表示方式
    pub error_style: ErrorStyle,
    /// 超过该嵌套深度的容器输出为 `null`
    pub max_depth: usize,
}

impl JsonConfig {
    pub fn with_error_style(mut self, error_style: ErrorStyle) -> Self {
        self.error_style = error_style;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for JsonConfig {
    fn default() -> Self {
        Self {
            error_style: ErrorStyle::Structured,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
