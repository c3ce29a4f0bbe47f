use std::collections::HashMap;

use async_trait::async_trait;
use lanmap_core::Edge;

use crate::error::OracleError;

/// The probing contract for network discovery.
///
/// `path` is the ordered sequence of device names traversed from the origin
/// device to the device currently being expanded; the returned edges are
/// the outgoing edges of the *last* device in `path`.
#[async_trait]
pub trait Oracle: Send + Sync {
    /// Reveal the immediate outgoing edges of the last device in `path`.
    ///
    /// A device with no further neighbors yields `Ok` with an empty list,
    /// never an error. For a given path the result must be deterministic.
    async fn probe(&self, path: &[String]) -> Result<Vec<Edge>, OracleError>;
}

/// An in-memory oracle backed by a fixed neighbor table.
///
/// Ignores everything but the last element of the path, which is a valid
/// (if degenerate) special case of the [`Oracle`] contract. Used by tests
/// and simulations in place of real network probing.
#[derive(Debug, Clone, Default)]
pub struct StaticOracle {
    neighbors: HashMap<String, Vec<Edge>>,
}

impl StaticOracle {
    /// Create an oracle with an empty neighbor table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `origin` has a direct link to `destination` with the
    /// given weight.
    pub fn add_link(&mut self, origin: &str, destination: &str, weight: f64) {
        self.neighbors
            .entry(origin.to_string())
            .or_default()
            .push(Edge::new(origin, destination, weight));
    }

    /// Number of devices with at least one recorded link.
    pub fn device_count(&self) -> usize {
        self.neighbors.len()
    }
}

#[async_trait]
impl Oracle for StaticOracle {
    async fn probe(&self, path: &[String]) -> Result<Vec<Edge>, OracleError> {
        let Some(last) = path.last() else {
            return Ok(Vec::new());
        };
        Ok(self.neighbors.get(last).cloned().unwrap_or_default())
    }
}
