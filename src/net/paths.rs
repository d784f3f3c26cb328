//! 路径枚举
//!
//! 在声明的邻接关系上做深度优先搜索，列出两节点间所有简单路径（节点不重复）。

use super::network::Network;
use tracing::{debug, trace};

impl Network {
    /// 列出从 `start` 到 `end` 的所有简单路径，每条路径包含两端节点。
    ///
    /// - `start == end` 时返回单元素路径 `[start]`
    /// - 不连通时返回空集合
    ///
    /// 结果顺序由各节点 `connected_nodes` 的声明顺序决定。
    #[tracing::instrument(skip(self))]
    pub fn find_paths(&self, start: &str, end: &str) -> Vec<Vec<String>> {
        let paths = self.find_paths_from(start, end, Vec::new());
        debug!(count = paths.len(), "路径枚举完成");
        paths
    }

    /// `visited` 为到达 `start` 之前已经走过的节点；每个分支拿到各自的副本。
    fn find_paths_from(&self, start: &str, end: &str, mut visited: Vec<String>) -> Vec<Vec<String>> {
        visited.push(start.to_string());
        if start == end {
            return vec![visited];
        }

        // 邻接表里可能引用了不存在的节点，走到这里就是死路
        let Some(node) = self.node(start) else {
            trace!(start, "节点不存在，放弃该分支");
            return Vec::new();
        };

        let mut paths = Vec::new();
        for next in node.connected_nodes() {
            if visited.iter().any(|v| v == next) {
                continue;
            }
            paths.extend(self.find_paths_from(next, end, visited.clone()));
        }
        paths
    }
}
