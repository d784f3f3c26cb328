use serde::{Deserialize, Serialize};

/// 节点信息（坐标单位与拓扑描述一致）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VizNodeInfo {
    pub label: String,
    pub x: f64,
    pub y: f64,
    /// 声明的相邻节点（可能包含不存在的节点）
    pub connected_nodes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VizLineInfo {
    pub label: String,
    pub from: String,
    pub to: String,
    /// 线路长度（米）
    pub length_m: f64,
}

/// 整个拓扑的快照（JSON）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VizTopology {
    pub nodes: Vec<VizNodeInfo>,
    pub lines: Vec<VizLineInfo>,
}

impl VizTopology {
    /// 绘图坐标范围 `(min_x, min_y, max_x, max_y)`；没有节点时为 `None`
    pub fn bounds(&self) -> Option<(f64, f64, f64, f64)> {
        let first = self.nodes.first()?;
        let init = (first.x, first.y, first.x, first.y);
        Some(self.nodes.iter().fold(init, |(x0, y0, x1, y1), n| {
            (x0.min(n.x), y0.min(n.y), x1.max(n.x), y1.max(n.y))
        }))
    }
}
