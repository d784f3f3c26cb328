//! 配置错误
//!
//! 拓扑描述无法构建为网络时返回的错误类型。传播与路径搜索本身不产生错误。

use std::path::PathBuf;

/// 拓扑配置错误（构建阶段致命，不会留下半成品网络）
#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    /// 拓扑文件读取失败
    #[error("failed to read topology file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON 格式错误，或缺少 `position` / `connected_nodes` 等必需字段
    #[error("malformed topology description: {0}")]
    Parse(#[from] serde_json::Error),

    /// 节点标签为空字符串
    #[error("node label must not be empty")]
    EmptyLabel,

    /// 坐标为 NaN 或无穷
    #[error("node {label} has a non-finite position ({x}, {y})")]
    NonFinitePosition { label: String, x: f64, y: f64 },
}
