//! 全节点对扫描
//!
//! 对每个有序节点对（源 != 目的）枚举所有路径，逐条用新信号传播并记录结果。

use super::record::PathRecord;
use crate::net::{Network, Signal};
use tracing::{debug, info};

/// 扫描选项
#[derive(Debug, Clone)]
pub struct SweepOpts {
    /// 发射功率（W）
    pub signal_power_w: f64,
    /// 只扫描该源节点
    pub from: Option<String>,
    /// 只扫描该目的节点
    pub to: Option<String>,
}

impl Default for SweepOpts {
    fn default() -> Self {
        Self {
            signal_power_w: 1e-3,
            from: None,
            to: None,
        }
    }
}

/// 需要扫描的有序节点对（按标签排序，跳过源 == 目的）
pub fn pairs(net: &Network, opts: &SweepOpts) -> Vec<(String, String)> {
    let mut out = Vec::new();
    for src in net.nodes().keys().filter(|l| selected(opts.from.as_deref(), l.as_str())) {
        for dst in net.nodes().keys().filter(|l| selected(opts.to.as_deref(), l.as_str())) {
            if src != dst {
                out.push((src.clone(), dst.clone()));
            }
        }
    }
    out
}

fn selected(filter: Option<&str>, label: &str) -> bool {
    filter.is_none_or(|f| f == label)
}

/// 单个节点对：每条路径一条记录
#[tracing::instrument(skip(net))]
pub fn sweep_pair(net: &Network, src: &str, dst: &str, signal_power_w: f64) -> Vec<PathRecord> {
    net.find_paths(src, dst)
        .into_iter()
        .map(|path| {
            let signal = net.propagate(Signal::new(signal_power_w, path.iter().cloned()));
            debug!(
                path = %path.join("->"),
                latency = signal.latency(),
                noise = signal.noise(),
                "路径传播完成"
            );
            PathRecord::from_signal(path, &signal)
        })
        .collect()
}

/// 扫描所有节点对
pub fn sweep(net: &Network, opts: &SweepOpts) -> Vec<PathRecord> {
    let records = pairs(net, opts)
        .iter()
        .flat_map(|(src, dst)| sweep_pair(net, src, dst, opts.signal_power_w))
        .collect::<Vec<_>>();
    info!(records = records.len(), "扫描完成");
    records
}
