use crate::net::ConfigurationError;
use crate::topo::{TopologySpec, load_topology};
use std::fs;

#[test]
fn topology_spec_parses_positions_and_neighbors() {
    let raw = r#"
    {
        "A": { "position": [-350000.0, 150000.0], "connected_nodes": ["B", "C"] },
        "B": { "position": [-100000, 400000], "connected_nodes": ["A"] }
    }
    "#;
    let spec = TopologySpec::from_json_str(raw).expect("parse");
    assert_eq!(spec.nodes.len(), 2);
    let a = &spec.nodes["A"];
    assert_eq!(a.position, [-350000.0, 150000.0]);
    assert_eq!(a.connected_nodes, ["B", "C"]);
    assert_eq!(spec.nodes["B"].position, [-100000.0, 400000.0]);
}

#[test]
fn topology_spec_roundtrips_through_json() {
    let mut spec = TopologySpec::default();
    spec.insert("X", [1.0, 2.0], ["Y"]);
    spec.insert("Y", [3.0, 4.0], ["X"]);
    let raw = serde_json::to_string(&spec).expect("serialize");
    assert!(raw.starts_with("{\"X\":"));
    assert_eq!(TopologySpec::from_json_str(&raw).expect("parse"), spec);
}

#[test]
fn load_topology_reports_missing_file() {
    let path = std::env::temp_dir().join(format!(
        "optsim-rs-missing-{}.json",
        std::process::id()
    ));
    let _ = fs::remove_file(&path);
    let err = load_topology(&path).expect_err("missing file");
    assert!(matches!(err, ConfigurationError::Io { .. }));
    assert!(err.to_string().contains("failed to read topology file"));
}

#[test]
fn load_topology_reads_file() {
    let path = std::env::temp_dir().join(format!("optsim-rs-load-{}.json", std::process::id()));
    fs::write(
        &path,
        r#"{ "A": { "position": [0, 0], "connected_nodes": [] } }"#,
    )
    .expect("write temp file");
    let spec = load_topology(&path).expect("load");
    assert_eq!(spec.nodes.len(), 1);
    let _ = fs::remove_file(&path);
}
