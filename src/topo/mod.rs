//! 拓扑描述与内置拓扑

mod spec;
pub mod triangle;

pub use spec::{NodeSpec, TopologySpec, load_topology};
