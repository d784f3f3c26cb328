//! 节点类型
//!
//! 图的顶点：记录声明的邻接关系，以及接线后"下一跳标签 -> 出线路标签"的路由表。

use std::collections::BTreeMap;

use super::position::Position;
use super::signal::Signal;
use tracing::{debug, trace};

/// 网络节点
#[derive(Debug, Clone)]
pub struct Node {
    label: String,
    position: Position,
    connected_nodes: Vec<String>,
    /// 下一跳节点标签 -> 出线路标签（接线后填充）
    successive: BTreeMap<String, String>,
}

impl Node {
    /// 创建新节点（路由表为空）
    pub fn new(label: impl Into<String>, position: Position, connected_nodes: Vec<String>) -> Self {
        Self {
            label: label.into(),
            position,
            connected_nodes,
            successive: BTreeMap::new(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// 拓扑描述中声明的相邻节点（保持声明顺序，可能包含不存在的节点）
    pub fn connected_nodes(&self) -> &[String] {
        &self.connected_nodes
    }

    pub fn successive(&self) -> &BTreeMap<String, String> {
        &self.successive
    }

    /// 写入一条路由（同一下一跳后写覆盖先写）
    pub fn set_successive(&mut self, next: impl Into<String>, line: impl Into<String>) {
        self.successive.insert(next.into(), line.into());
    }

    /// 节点步：消费路径头，返回应交给哪条线路继续传播。
    ///
    /// 返回 `None` 表示传播静默停止：路径为空、路径头不是本节点、
    /// 本节点就是终点，或路由表里没有通往下一跳的线路。
    #[tracing::instrument(skip(self, signal), fields(node = %self.label))]
    pub fn propagate(&self, signal: &mut Signal) -> Option<&str> {
        if signal.head() != Some(self.label.as_str()) {
            debug!(head = ?signal.head(), "路径头与本节点不符，停止传播");
            return None;
        }
        signal.update_path();

        let Some(next) = signal.head() else {
            trace!("已到达终点");
            return None;
        };
        match self.successive.get(next) {
            Some(line) => {
                trace!(next, line = %line, "转发到出线路");
                Some(line.as_str())
            }
            None => {
                debug!(next, "没有通往下一跳的线路，停止传播");
                None
            }
        }
    }
}
