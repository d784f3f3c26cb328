//! 标识符
//!
//! 节点用字符串标签标识；有向线路的标签由起点、终点标签直接拼接而成。

/// 有向线路标签：`line_label("A", "B") == "AB"`，反向线路为 `"BA"`。
pub fn line_label(from: &str, to: &str) -> String {
    format!("{from}{to}")
}
