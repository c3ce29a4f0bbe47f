use std::collections::{HashSet, VecDeque};
use std::time::Duration;

use lanmap_core::Graph;

use crate::error::DiscoveryError;
use crate::oracle::Oracle;

/// Configuration for a discovery pass.
#[derive(Debug, Clone)]
pub struct DiscoveryConfig {
    /// Deadline applied to each individual oracle probe. An elapsed
    /// deadline aborts discovery like any other probe failure.
    pub probe_timeout: Duration,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            probe_timeout: Duration::from_secs(5),
        }
    }
}

/// Summary of a completed discovery pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscoveryReport {
    /// Number of devices expanded (one probe each).
    pub devices_probed: usize,
    /// Number of edges recorded into the network graph.
    pub edges_recorded: usize,
    /// Number of oracle edges rejected as malformed.
    pub edges_rejected: usize,
}

/// The breadth-first discovery engine.
///
/// Explores the network reachable from an origin device by repeatedly
/// probing the oracle, expanding each device at most once while recording
/// every edge observed. Probing order follows non-decreasing hop count from
/// the origin, which matters because the oracle may be path-sensitive.
pub struct Discoverer {
    config: DiscoveryConfig,
}

impl Discoverer {
    /// Create a new engine with the given configuration.
    pub fn new(config: DiscoveryConfig) -> Self {
        Self { config }
    }

    /// Create an engine with default configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: DiscoveryConfig::default(),
        }
    }

    /// Populate `network` with everything reachable from `origin`.
    ///
    /// On failure the error is surfaced immediately and `network` retains
    /// whatever was recorded before the failing probe; discovery is not
    /// transactional and does not retry. Callers needing resilience must
    /// wrap the oracle with their own retry policy.
    pub async fn discover<O>(
        &self,
        origin: &str,
        oracle: &O,
        network: &mut Graph,
    ) -> Result<DiscoveryReport, DiscoveryError>
    where
        O: Oracle + ?Sized,
    {
        let mut visited: HashSet<String> = HashSet::new();
        let mut queue: VecDeque<Vec<String>> = VecDeque::new();
        queue.push_back(vec![origin.to_string()]);

        let mut report = DiscoveryReport::default();

        while let Some(path) = queue.pop_front() {
            let Some(current) = path.last().cloned() else {
                continue;
            };
            // A device reached via multiple routes is expanded only once.
            if !visited.insert(current.clone()) {
                continue;
            }

            let probe = oracle.probe(&path);
            let edges = match tokio::time::timeout(self.config.probe_timeout, probe).await {
                Ok(Ok(edges)) => edges,
                Ok(Err(source)) => {
                    return Err(DiscoveryError::Probe {
                        device: current,
                        source,
                    })
                }
                Err(_) => {
                    return Err(DiscoveryError::ProbeTimeout {
                        device: current,
                        timeout: self.config.probe_timeout,
                    })
                }
            };

            report.devices_probed += 1;
            tracing::debug!(
                device = %current,
                depth = path.len() - 1,
                neighbors = edges.len(),
                "expanded device"
            );

            for edge in edges {
                if let Err(err) = edge.validate() {
                    tracing::warn!(%edge, %err, "rejected malformed oracle edge");
                    report.edges_rejected += 1;
                    continue;
                }
                if edge.origin() != current {
                    tracing::warn!(
                        %edge,
                        expected_origin = %current,
                        "rejected oracle edge with mismatched origin"
                    );
                    report.edges_rejected += 1;
                    continue;
                }

                // Edges into already-visited devices are still recorded;
                // only re-expansion is skipped.
                network.add_edge(edge.origin(), edge.destination(), edge.weight());
                report.edges_recorded += 1;

                if !visited.contains(edge.destination()) {
                    let mut next = path.clone();
                    next.push(edge.destination().to_string());
                    queue.push_back(next);
                }
            }
        }

        tracing::debug!(
            devices = report.devices_probed,
            edges = report.edges_recorded,
            rejected = report.edges_rejected,
            "discovery complete"
        );
        Ok(report)
    }
}
