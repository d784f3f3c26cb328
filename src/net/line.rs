//! 线路类型
//!
//! 有向光纤线路及其时延、噪声贡献的计算。

use super::signal::Signal;
use tracing::{debug, trace};

/// 真空光速（m/s）
pub const SPEED_OF_LIGHT: f64 = 3e8;

/// 光纤中群速度相对真空光速的比例
pub const FIBER_VELOCITY_FACTOR: f64 = 2.0 / 3.0;

/// 每米、每瓦信号功率产生的噪声功率
pub const NOISE_COEFFICIENT: f64 = 1e-9;

/// 有向线路（A<->B 的双向连接对应 "AB"、"BA" 两条线路）
///
/// 标签是两端标签的直接拼接，"A"+"BC" 与 "AB"+"C" 会得到同一条 "ABC"；
/// 这种冲突下线路只保留最后一次接线写入的终点。
#[derive(Debug, Clone)]
pub struct Line {
    label: String,
    length: f64,
    /// 线路终点节点标签（接线后填充）
    successive: Option<String>,
}

impl Line {
    /// 创建新线路，长度单位为米
    pub fn new(label: impl Into<String>, length: f64) -> Self {
        Self {
            label: label.into(),
            length,
            successive: None,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn successive(&self) -> Option<&str> {
        self.successive.as_deref()
    }

    pub fn set_successive(&mut self, destination: impl Into<String>) {
        self.successive = Some(destination.into());
    }

    /// 单次经过该线路的传播时延（s）
    pub fn latency_generation(&self) -> f64 {
        self.length / (FIBER_VELOCITY_FACTOR * SPEED_OF_LIGHT)
    }

    /// 单次经过该线路引入的噪声功率（W），与长度和当前信号功率成正比
    pub fn noise_generation(&self, signal_power: f64) -> f64 {
        NOISE_COEFFICIENT * self.length * signal_power
    }

    /// 线路步：累加时延和噪声，若路径头正是本线路终点则返回该终点。
    #[tracing::instrument(skip(self, signal), fields(line = %self.label, length = self.length))]
    pub fn propagate(&self, signal: &mut Signal) -> Option<&str> {
        let latency = self.latency_generation();
        let noise = self.noise_generation(signal.power());
        signal.update_latency(latency);
        signal.update_noise(noise);
        trace!(latency, noise, "累加线路贡献");

        let head = signal.head()?;
        match self.successive.as_deref() {
            Some(dest) if dest == head => Some(dest),
            dest => {
                debug!(head, dest = ?dest, "路径头不是线路终点，停止传播");
                None
            }
        }
    }
}
