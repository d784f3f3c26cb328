//! 信号传播
//!
//! 沿信号的剩余路径交替执行"节点步"（消费路径头）和"线路步"（累加时延与噪声），
//! 直到路径耗尽或遇到缺失的路由。缺失路由不是错误：信号保留已累积的部分结果。

use super::network::Network;
use super::signal::Signal;
use tracing::debug;

impl Network {
    /// 沿 `signal` 自带的路径传播，返回修改后的信号。
    ///
    /// 起点不在网络中时原样返回。
    pub fn propagate(&self, mut signal: Signal) -> Signal {
        self.propagate_in_place(&mut signal);
        signal
    }

    /// 原地传播版本
    #[tracing::instrument(skip(self, signal), fields(start = ?signal.head(), hops = signal.path().len()))]
    pub fn propagate_in_place(&self, signal: &mut Signal) {
        let Some(mut node) = signal.head().and_then(|head| self.node(head)) else {
            debug!("起点不在网络中，信号保持不变");
            return;
        };

        let mut lines_traversed = 0usize;
        loop {
            let Some(line_id) = node.propagate(signal) else {
                break;
            };
            let Some(line) = self.line(line_id) else {
                debug!(line = line_id, "路由指向不存在的线路，停止传播");
                break;
            };
            lines_traversed += 1;
            let Some(next) = line.propagate(signal) else {
                break;
            };
            let Some(next_node) = self.node(next) else {
                debug!(next, "线路终点不在网络中，停止传播");
                break;
            };
            node = next_node;
        }

        debug!(
            lines_traversed,
            remaining = signal.path().len(),
            latency = signal.latency(),
            noise = signal.noise(),
            "传播结束"
        );
    }
}
