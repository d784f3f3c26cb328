//! Visualization hooks for the network.

use crate::viz::{VizLineInfo, VizNodeInfo, VizTopology};

use super::Network;
use super::id::line_label;

impl Network {
    /// 导出拓扑的结构化描述（节点坐标 + 有向线路），供离线绘图使用。
    pub fn viz_topology(&self) -> VizTopology {
        let nodes = self
            .nodes()
            .values()
            .map(|n| VizNodeInfo {
                label: n.label().to_string(),
                x: n.position().x,
                y: n.position().y,
                connected_nodes: n.connected_nodes().to_vec(),
            })
            .collect::<Vec<_>>();

        // 线路标签是两端标签的拼接，无法可靠拆分，这里从节点侧反查端点
        let lines = self
            .nodes()
            .values()
            .flat_map(|n| {
                n.connected_nodes()
                    .iter()
                    .map(move |next| (n.label(), next.as_str()))
            })
            .filter_map(|(from, to)| {
                let label = line_label(from, to);
                self.line(&label).map(|l| VizLineInfo {
                    label,
                    from: from.to_string(),
                    to: to.to_string(),
                    length_m: l.length(),
                })
            })
            .collect::<Vec<_>>();

        VizTopology { nodes, lines }
    }
}
