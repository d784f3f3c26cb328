//! 加权路径记录

use crate::net::Signal;

/// 一条路径的传播结果
#[derive(Debug, Clone, PartialEq)]
pub struct PathRecord {
    pub path: Vec<String>,
    /// 总时延（s）
    pub latency_s: f64,
    /// 总噪声（W）
    pub noise_w: f64,
    /// 信噪比（dB）；累积噪声不为正时无定义
    pub snr_db: Option<f64>,
}

impl PathRecord {
    /// 由传播完成的信号生成记录
    pub fn from_signal(path: Vec<String>, signal: &Signal) -> Self {
        Self {
            path,
            latency_s: signal.latency(),
            noise_w: signal.noise(),
            snr_db: snr_db(signal.power(), signal.noise()),
        }
    }

    /// `A->B->C`
    pub fn path_string(&self) -> String {
        self.path.join("->")
    }
}

/// 信噪比 `10 * log10(power / noise)`（dB）
///
/// 调用方需保证噪声严格为正（路径至少经过一条非零长度线路）；否则返回 `None`。
pub fn snr_db(signal_power: f64, noise_power: f64) -> Option<f64> {
    if noise_power > 0.0 {
        Some(10.0 * (signal_power / noise_power).log10())
    } else {
        None
    }
}
