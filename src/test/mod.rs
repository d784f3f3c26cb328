mod propagate;
mod topology_spec;

/// 浮点比较（相对误差）
pub(crate) fn approx_eq(a: f64, b: f64) -> bool {
    let scale = a.abs().max(b.abs()).max(f64::MIN_POSITIVE);
    (a - b).abs() / scale < 1e-9
}

pub(crate) fn labels(path: &[&str]) -> Vec<String> {
    path.iter().map(|s| s.to_string()).collect()
}
