//! 信号状态
//!
//! 单个信号在传播过程中被逐跳修改的状态：功率、累积噪声、累积时延和剩余路径。

use std::collections::VecDeque;

/// 一次路径仿真所用的信号
///
/// `path` 的首元素始终是下一个要处理该信号的节点标签，直到路径被消费完。
#[derive(Debug, Clone, PartialEq)]
pub struct Signal {
    power: f64,
    noise: f64,
    latency: f64,
    path: VecDeque<String>,
}

impl Signal {
    /// 创建新信号（噪声与时延从 0 开始）
    pub fn new<I, S>(power: f64, path: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            power,
            noise: 0.0,
            latency: 0.0,
            path: path.into_iter().map(Into::into).collect(),
        }
    }

    /// 信号功率（W）
    pub fn power(&self) -> f64 {
        self.power
    }

    /// 累积噪声功率（W）
    pub fn noise(&self) -> f64 {
        self.noise
    }

    /// 累积时延（s）
    pub fn latency(&self) -> f64 {
        self.latency
    }

    /// 剩余路径
    pub fn path(&self) -> &VecDeque<String> {
        &self.path
    }

    /// 当前路径头（下一个处理该信号的节点）
    pub fn head(&self) -> Option<&str> {
        self.path.front().map(String::as_str)
    }

    pub fn is_exhausted(&self) -> bool {
        self.path.is_empty()
    }

    pub fn update_power(&mut self, delta: f64) {
        self.power += delta;
    }

    pub fn update_noise(&mut self, delta: f64) {
        self.noise += delta;
    }

    pub fn set_noise(&mut self, noise: f64) {
        self.noise = noise;
    }

    pub fn update_latency(&mut self, delta: f64) {
        self.latency += delta;
    }

    pub fn set_latency(&mut self, latency: f64) {
        self.latency = latency;
    }

    /// 消费路径头，返回被移除的节点标签
    pub fn update_path(&mut self) -> Option<String> {
        self.path.pop_front()
    }
}
