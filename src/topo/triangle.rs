//! 三角形拓扑构建

use super::spec::TopologySpec;

/// 三角形拓扑配置选项
#[derive(Debug, Clone)]
pub struct TriangleOpts {
    /// 直角边长度（米）
    pub side_m: f64,
}

impl Default for TriangleOpts {
    fn default() -> Self {
        Self { side_m: 300_000.0 }
    }
}

/// 构建三角形拓扑
///
/// 拓扑结构：A(0,0)、B(0,side)、C(side,side)，三点两两相连。
pub fn build_triangle(opts: &TriangleOpts) -> TopologySpec {
    let s = opts.side_m;
    let mut spec = TopologySpec::default();
    spec.insert("A", [0.0, 0.0], ["B", "C"]);
    spec.insert("B", [0.0, s], ["A", "C"]);
    spec.insert("C", [s, s], ["A", "B"]);
    spec
}
