//! 加权路径报表
//!
//! 把路径枚举与信号传播的结果整理成表格（每条路径一行），并渲染为 CSV。

mod csv;
mod record;
mod sweep;

pub use csv::{CSV_HEADER, to_csv};
pub use record::{PathRecord, snr_db};
pub use sweep::{SweepOpts, pairs, sweep, sweep_pair};
