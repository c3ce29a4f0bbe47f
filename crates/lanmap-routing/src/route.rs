use std::fmt;

use serde::{Deserialize, Serialize};

/// A resolved path from an origin device to a destination device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    /// Ordered device names from origin to destination, inclusive.
    hops: Vec<String>,
    /// Sum of edge weights along the path.
    total_weight: f64,
}

impl Route {
    /// Create a route from an ordered hop list and its cumulative weight.
    pub fn new(hops: Vec<String>, total_weight: f64) -> Self {
        Self { hops, total_weight }
    }

    /// The ordered device names, origin first.
    pub fn hops(&self) -> &[String] {
        &self.hops
    }

    /// Number of edges traversed. Zero for the trivial origin-only route.
    pub fn hop_count(&self) -> usize {
        self.hops.len().saturating_sub(1)
    }

    /// Total cost of the route.
    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (weight {})", self.hops.join(" -> "), self.total_weight)
    }
}
