use super::{approx_eq, labels};
use crate::net::{Network, Signal};
use crate::report::snr_db;
use crate::topo::triangle::{TriangleOpts, build_triangle};

fn wired_triangle() -> Network {
    let mut net = Network::from_spec(&build_triangle(&TriangleOpts::default())).expect("build");
    net.connect();
    net
}

#[test]
fn triangle_scenario_accumulates_per_line_contributions() {
    let net = wired_triangle();
    let sig = net.propagate(Signal::new(1e-3, ["A", "B", "C"]));

    assert!(sig.is_exhausted());
    let ab = net.line("AB").expect("AB");
    let bc = net.line("BC").expect("BC");
    assert!(approx_eq(ab.latency_generation(), 1.5e-3));
    assert!(approx_eq(ab.noise_generation(1e-3), 3e-10));

    assert!(approx_eq(sig.latency(), ab.latency_generation() + bc.latency_generation()));
    assert!(approx_eq(sig.latency(), 3e-3));
    assert!(approx_eq(sig.noise(), ab.noise_generation(1e-3) + bc.noise_generation(1e-3)));
    assert!(approx_eq(sig.noise(), 6e-10));

    let snr = snr_db(sig.power(), sig.noise()).expect("positive noise");
    assert!(approx_eq(snr, 10.0 * (1e-3f64 / 6e-10).log10()));
    assert_eq!(sig.power(), 1e-3);
}

#[test]
fn every_enumerated_path_is_fully_consumed() {
    let net = wired_triangle();
    for src in ["A", "B", "C"] {
        for dst in ["A", "B", "C"] {
            for path in net.find_paths(src, dst) {
                let sig = net.propagate(Signal::new(1e-3, path.iter().cloned()));
                assert!(sig.is_exhausted(), "path {path:?} left {:?}", sig.path());
            }
        }
    }
}

#[test]
fn single_node_path_adds_nothing() {
    let net = wired_triangle();
    let sig = net.propagate(Signal::new(1e-3, ["A"]));
    assert!(sig.is_exhausted());
    assert_eq!(sig.latency(), 0.0);
    assert_eq!(sig.noise(), 0.0);
}

#[test]
fn unknown_start_node_leaves_signal_untouched() {
    let net = wired_triangle();
    let before = Signal::new(1e-3, ["Q", "A"]);
    let after = net.propagate(before.clone());
    assert_eq!(after, before);

    let empty = Signal::new(1e-3, Vec::<String>::new());
    assert_eq!(net.propagate(empty.clone()), empty);
}

#[test]
fn unreachable_hop_stops_silently_with_partial_accumulation() {
    let raw = r#"
    {
        "A": { "position": [0, 0], "connected_nodes": ["B"] },
        "B": { "position": [0, 300000], "connected_nodes": ["A"] },
        "C": { "position": [300000, 300000], "connected_nodes": [] }
    }
    "#;
    let mut net = Network::from_json_str(raw).expect("build");
    net.connect();

    // B 没有到 C 的线路
    let sig = net.propagate(Signal::new(1e-3, ["A", "B", "C"]));
    assert_eq!(sig.path().iter().cloned().collect::<Vec<_>>(), labels(&["C"]));
    assert!(approx_eq(sig.latency(), 1.5e-3));
    assert!(approx_eq(sig.noise(), 3e-10));
}

#[test]
fn propagation_on_unwired_network_only_consumes_the_start() {
    let net = Network::from_spec(&build_triangle(&TriangleOpts::default())).expect("build");
    let sig = net.propagate(Signal::new(1e-3, ["A", "B"]));
    assert_eq!(sig.head(), Some("B"));
    assert_eq!(sig.latency(), 0.0);
}

#[test]
fn path_with_a_cycle_terminates() {
    let net = wired_triangle();
    let sig = net.propagate(Signal::new(1e-3, ["A", "B", "A", "B"]));
    assert!(sig.is_exhausted());
    assert!(approx_eq(sig.latency(), 3.0 * 1.5e-3));
}

#[test]
fn noise_scales_with_launch_power() {
    let net = wired_triangle();
    let low = net.propagate(Signal::new(1e-3, ["A", "C"]));
    let high = net.propagate(Signal::new(2e-3, ["A", "C"]));
    assert!(approx_eq(high.noise(), 2.0 * low.noise()));
    assert!(approx_eq(high.latency(), low.latency()));
}

#[test]
fn propagate_in_place_matches_owned_variant() {
    let net = wired_triangle();
    let mut sig = Signal::new(1e-3, ["C", "A", "B"]);
    net.propagate_in_place(&mut sig);
    let owned = net.propagate(Signal::new(1e-3, ["C", "A", "B"]));
    assert_eq!(sig, owned);
}
