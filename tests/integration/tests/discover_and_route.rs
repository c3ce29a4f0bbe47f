//! Integration test: full discover-then-route flow across crates.
//!
//! Builds the reference office topology with a static oracle, runs one
//! discovery pass on a device, then resolves cheapest paths over the
//! discovered network.

use lanmap_core::Graph;
use lanmap_device::Device;
use lanmap_discovery::StaticOracle;
use lanmap_routing::find_path;

/// The reference office topology, seen from the workstation "chandra-s25".
fn office_network() -> StaticOracle {
    let mut oracle = StaticOracle::new();
    oracle.add_link("chandra-s25", "router-051797", 1.0);
    oracle.add_link("chandra-s25", "helen-pc", 2.0);
    oracle.add_link("router-051797", "ws-102", 1.2);
    oracle.add_link("router-051797", "switch-12", 0.8);
    oracle.add_link("router-051797", "srv-07", 1.0);
    oracle.add_link("helen-pc", "ws-14", 1.5);
    oracle
}

async fn discovered_workstation() -> Device {
    let mut device = Device::new("chandra-s25");
    device
        .discover_network(&office_network())
        .await
        .expect("discovery should succeed");
    device
}

#[tokio::test]
async fn test_discovery_covers_whole_office() {
    let mut device = Device::new("chandra-s25");
    let report = device
        .discover_network(&office_network())
        .await
        .expect("discovery should succeed");

    // 7 devices: the workstation, the router, helen-pc, and 4 leaves.
    assert_eq!(device.network().len(), 7);
    assert_eq!(report.devices_probed, 7);
    assert_eq!(report.edges_recorded, 6);
    assert_eq!(report.edges_rejected, 0);

    assert!(device.network().is_child("chandra-s25", "router-051797"));
    assert!(device.network().is_child("router-051797", "srv-07"));
    assert!(device.network().is_child("helen-pc", "ws-14"));
    assert!(!device.network().is_child("router-051797", "chandra-s25"));
}

#[tokio::test]
async fn test_route_to_switch() {
    let device = discovered_workstation().await;

    let route = device.find_path("switch-12").expect("path should exist");
    assert_eq!(route.hops(), ["chandra-s25", "router-051797", "switch-12"]);
    assert!((route.total_weight() - 1.8).abs() < 1e-9);
}

#[tokio::test]
async fn test_route_to_ws14() {
    let device = discovered_workstation().await;

    let route = device.find_path("ws-14").expect("path should exist");
    assert_eq!(route.hops(), ["chandra-s25", "helen-pc", "ws-14"]);
    assert!((route.total_weight() - 3.5).abs() < 1e-9);
}

#[tokio::test]
async fn test_route_to_nonexistent_device() {
    let device = discovered_workstation().await;
    assert!(device.find_path("nonexistent").is_none());
}

#[tokio::test]
async fn test_repeated_queries_are_stable() {
    let device = discovered_workstation().await;

    let first = device.find_path("srv-07").expect("path should exist");
    for _ in 0..5 {
        let again = device.find_path("srv-07").expect("path should exist");
        assert_eq!(again, first);
    }
}

#[test]
fn test_path_engine_reads_any_prebuilt_graph() {
    // The path engine is a pure consumer: a graph assembled by hand
    // resolves exactly like one built by discovery.
    let mut graph = Graph::new();
    graph.add_edge("chandra-s25", "router-051797", 1.0);
    graph.add_edge("chandra-s25", "helen-pc", 2.0);
    graph.add_edge("router-051797", "switch-12", 0.8);

    let route = find_path(&graph, "chandra-s25", "switch-12").expect("path should exist");
    assert_eq!(route.hops(), ["chandra-s25", "router-051797", "switch-12"]);
    assert!((route.total_weight() - 1.8).abs() < 1e-9);
}

#[tokio::test]
async fn test_discovery_handles_cyclic_topology() {
    let mut oracle = StaticOracle::new();
    oracle.add_link("a", "b", 1.0);
    oracle.add_link("b", "c", 1.0);
    oracle.add_link("c", "a", 1.0);
    oracle.add_link("c", "d", 5.0);

    let mut device = Device::new("a");
    let report = device
        .discover_network(&oracle)
        .await
        .expect("discovery should terminate on cycles");

    assert_eq!(report.devices_probed, 4);
    let route = device.find_path("d").expect("path should exist");
    assert_eq!(route.hops(), ["a", "b", "c", "d"]);
    assert!((route.total_weight() - 7.0).abs() < 1e-9);
}
