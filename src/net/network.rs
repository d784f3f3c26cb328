//! 网络拓扑管理
//!
//! 由声明式拓扑描述构建节点与有向线路，并负责节点与线路之间的接线。

use std::collections::BTreeMap;

use super::error::ConfigurationError;
use super::id::line_label;
use super::line::Line;
use super::node::Node;
use super::position::Position;
use crate::topo::TopologySpec;
use tracing::{debug, info, trace};

/// 网络拓扑
///
/// 节点与线路都以标签为键；节点和线路之间只通过标签互相引用。
#[derive(Debug, Default, Clone)]
pub struct Network {
    nodes: BTreeMap<String, Node>,
    lines: BTreeMap<String, Line>,
    connected: bool,
}

impl Network {
    /// 由拓扑描述构建网络（尚未接线）
    ///
    /// 邻接列表中引用了不存在节点的条目会被跳过，不创建线路。
    #[tracing::instrument(skip(spec), fields(nodes = spec.nodes.len()))]
    pub fn from_spec(spec: &TopologySpec) -> Result<Self, ConfigurationError> {
        let mut nodes = BTreeMap::new();
        for (label, node_spec) in &spec.nodes {
            if label.is_empty() {
                return Err(ConfigurationError::EmptyLabel);
            }
            let position = Position::from(node_spec.position);
            if !position.is_finite() {
                return Err(ConfigurationError::NonFinitePosition {
                    label: label.clone(),
                    x: position.x,
                    y: position.y,
                });
            }
            trace!(label = %label, ?position, "创建节点");
            nodes.insert(
                label.clone(),
                Node::new(label.clone(), position, node_spec.connected_nodes.clone()),
            );
        }

        let mut lines = BTreeMap::new();
        for (label, node) in &nodes {
            for next in node.connected_nodes() {
                let Some(peer) = nodes.get(next) else {
                    debug!(from = %label, to = %next, "邻接节点不存在，跳过");
                    continue;
                };
                let line = line_label(label, next);
                let length = node.position().distance_to(&peer.position());
                trace!(line = %line, length, "创建线路");
                lines.insert(line.clone(), Line::new(line, length));
            }
        }

        info!(nodes = nodes.len(), lines = lines.len(), "拓扑构建完成");
        Ok(Self {
            nodes,
            lines,
            connected: false,
        })
    }

    /// 解析 JSON 拓扑描述并构建网络
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigurationError> {
        let spec = TopologySpec::from_json_str(raw)?;
        Self::from_spec(&spec)
    }

    pub fn nodes(&self) -> &BTreeMap<String, Node> {
        &self.nodes
    }

    pub fn lines(&self) -> &BTreeMap<String, Line> {
        &self.lines
    }

    pub fn node(&self, label: &str) -> Option<&Node> {
        self.nodes.get(label)
    }

    pub fn line(&self, label: &str) -> Option<&Line> {
        self.lines.get(label)
    }

    /// 是否已经调用过 [`Network::connect`]
    ///
    /// 仅供查询：路径枚举与传播不读取该标志，未接线时传播在起点处静默停止。
    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// 接线：为每个节点 A 及其邻接 B，若线路 "AB" 存在，则
    /// `A.successive[B] = "AB"`，且 "AB" 的终点为 B。
    ///
    /// 重复调用结果不变（同键覆盖写入）。
    #[tracing::instrument(skip(self))]
    pub fn connect(&mut self) {
        let mut wired = 0usize;
        for (label, node) in self.nodes.iter_mut() {
            let routes = node
                .connected_nodes()
                .iter()
                .map(|next| (next.clone(), line_label(label, next)))
                .collect::<Vec<_>>();
            for (next, line_id) in routes {
                let Some(line) = self.lines.get_mut(&line_id) else {
                    continue;
                };
                line.set_successive(next.clone());
                node.set_successive(next, line_id);
                wired += 1;
            }
        }
        self.connected = true;
        debug!(wired, "接线完成");
    }
}
