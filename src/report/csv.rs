//! CSV 输出

use super::record::PathRecord;

pub const CSV_HEADER: &str = "Path,Total Latency (s),Total Noise (W),SNR (dB)";

/// 一行表头 + 每条路径一行；SNR 无定义时留空
pub fn to_csv(records: &[PathRecord]) -> String {
    let mut out = String::from(CSV_HEADER);
    out.push('\n');
    for r in records {
        let snr = r.snr_db.map(|v| v.to_string()).unwrap_or_default();
        out.push_str(&format!(
            "{},{},{},{}\n",
            quote_field(&r.path_string()),
            r.latency_s,
            r.noise_w,
            snr
        ));
    }
    out
}

/// 含分隔符、引号或换行的字段用双引号包裹，内部引号加倍
fn quote_field(field: &str) -> String {
    if field.contains([',', '"', '\r', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
