//! 拓扑可视化数据（用于离线绘图）
//!
//! 设计目标：
//! - **结构化**：输出 JSON，而不是直接调用绘图库
//! - **轻量**：只包含绘制点和连线所需的字段

mod types;

pub use types::{VizLineInfo, VizNodeInfo, VizTopology};
