use std::collections::BTreeMap;

use lanmap_core::{Edge, Graph};
use lanmap_discovery::{Discoverer, DiscoveryConfig, DiscoveryError, DiscoveryReport, Oracle};
use lanmap_routing::{find_path, Route};

/// A network device with a privately discovered view of its surroundings.
///
/// A device is a named node with its own direct edge map, plus an owned
/// `network` graph seeded with only the device itself. Discovery writes
/// into `network`, not into the direct edge map; the copy of the device
/// inside `network` is an independent entity, which avoids aliasing between
/// the two views.
#[derive(Debug, Clone)]
pub struct Device {
    name: String,
    links: BTreeMap<String, Edge>,
    network: Graph,
}

impl Device {
    /// Create a device whose discovered network initially contains only
    /// itself.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let mut network = Graph::new();
        network.add_vertex(&name);
        Self {
            name,
            links: BTreeMap::new(),
            network,
        }
    }

    /// The label of this device.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The authoritative record of everything discovered around this
    /// device. Empty of edges until [`Device::discover_network`] runs.
    pub fn network(&self) -> &Graph {
        &self.network
    }

    /// Record a direct link from this device. Distinct from the edges
    /// inside `network`; discovery never touches this map.
    pub fn add_link(&mut self, destination: &str, weight: f64) {
        self.links
            .entry(destination.to_string())
            .or_insert_with(|| Edge::new(&self.name, destination, weight));
    }

    /// Iterate over this device's direct links, ordered by destination.
    pub fn links(&self) -> impl Iterator<Item = &Edge> {
        self.links.values()
    }

    /// Discover the surrounding network with the default configuration.
    ///
    /// Runs one breadth-first pass over the oracle, populating `network`.
    /// Designed for a single pass: a repeat invocation re-probes, but
    /// already-recorded edges keep their first observed weight.
    pub async fn discover_network<O>(
        &mut self,
        oracle: &O,
    ) -> Result<DiscoveryReport, DiscoveryError>
    where
        O: Oracle + ?Sized,
    {
        self.discover_network_with(DiscoveryConfig::default(), oracle)
            .await
    }

    /// Discover the surrounding network with a caller-supplied
    /// configuration (e.g. a tighter probe deadline).
    pub async fn discover_network_with<O>(
        &mut self,
        config: DiscoveryConfig,
        oracle: &O,
    ) -> Result<DiscoveryReport, DiscoveryError>
    where
        O: Oracle + ?Sized,
    {
        tracing::debug!(device = %self.name, "starting network discovery");
        Discoverer::new(config)
            .discover(&self.name, oracle, &mut self.network)
            .await
    }

    /// The cheapest path from this device to `destination` over the
    /// discovered network, or `None` when the destination was never
    /// discovered or is unreachable. Read-only; issues no probes.
    pub fn find_path(&self, destination: &str) -> Option<Route> {
        find_path(&self.network, &self.name, destination)
    }
}
