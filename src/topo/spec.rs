//! 拓扑描述
//!
//! JSON 格式：节点标签 -> `{ "position": [x, y], "connected_nodes": [...] }`，
//! 未知字段忽略。

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::net::ConfigurationError;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TopologySpec {
    pub nodes: BTreeMap<String, NodeSpec>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeSpec {
    /// 坐标（米）
    pub position: [f64; 2],
    pub connected_nodes: Vec<String>,
}

impl TopologySpec {
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigurationError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// 添加（或替换）一个节点
    pub fn insert<I, S>(&mut self, label: impl Into<String>, position: [f64; 2], connected_nodes: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.nodes.insert(
            label.into(),
            NodeSpec {
                position,
                connected_nodes: connected_nodes.into_iter().map(Into::into).collect(),
            },
        );
    }
}

/// 从文件读取拓扑描述
pub fn load_topology(path: impl AsRef<Path>) -> Result<TopologySpec, ConfigurationError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| ConfigurationError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let spec = TopologySpec::from_json_str(&raw)?;
    debug!(path = %path.display(), nodes = spec.nodes.len(), "读取拓扑描述");
    Ok(spec)
}
