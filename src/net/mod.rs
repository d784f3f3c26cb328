//! 网络模型模块
//!
//! 此模块包含光传输网络的核心组件：信号、节点、线路、网络拓扑，以及路径枚举和信号传播。

// 子模块声明
mod error;
mod id;
mod position;
mod signal;
mod node;
mod line;
mod network;
mod network_viz;
mod paths;
mod propagate;

// 重新导出公共接口
pub use error::ConfigurationError;
pub use id::line_label;
pub use position::Position;
pub use signal::Signal;
pub use node::Node;
pub use line::{FIBER_VELOCITY_FACTOR, Line, NOISE_COEFFICIENT, SPEED_OF_LIGHT};
pub use network::Network;
