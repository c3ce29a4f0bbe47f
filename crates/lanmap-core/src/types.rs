use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::GraphError;

/// A directed, weighted connection between two named devices.
///
/// Immutable once created: the only way to build one is [`Edge::new`], and
/// all fields are read through accessors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    origin: String,
    destination: String,
    weight: f64,
}

impl Edge {
    /// Create a new edge from `origin` to `destination` with the given weight.
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        weight: f64,
    ) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            weight,
        }
    }

    /// Name of the device this edge leaves from.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Name of the device this edge points to.
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Traversal cost of this edge.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Validate that all fields are within acceptable ranges.
    ///
    /// Negative weights are rejected because the path engine's optimality
    /// guarantee only holds for non-negative weights.
    pub fn validate(&self) -> Result<(), GraphError> {
        if self.origin.is_empty() {
            return Err(self.invalid("origin name is empty"));
        }
        if self.destination.is_empty() {
            return Err(self.invalid("destination name is empty"));
        }
        if !self.weight.is_finite() {
            return Err(self.invalid(&format!("weight is not finite: {}", self.weight)));
        }
        if self.weight < 0.0 {
            return Err(self.invalid(&format!("weight is negative: {}", self.weight)));
        }
        Ok(())
    }

    fn invalid(&self, reason: &str) -> GraphError {
        GraphError::InvalidEdge {
            origin: self.origin.clone(),
            destination: self.destination.clone(),
            reason: reason.to_string(),
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({})", self.origin, self.destination, self.weight)
    }
}

/// A named node owning its outgoing edges, keyed by destination name.
///
/// Invariant: at most one outgoing edge per distinct destination. Inserting
/// an edge for a destination that already has one is a no-op, so the first
/// recorded edge to a destination wins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vertex {
    name: String,
    edges: BTreeMap<String, Edge>,
}

impl Vertex {
    /// Create a vertex with no outgoing edges.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            edges: BTreeMap::new(),
        }
    }

    /// The label of this vertex.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The edge toward `destination`, if one is recorded.
    pub fn edge_to(&self, destination: &str) -> Option<&Edge> {
        self.edges.get(destination)
    }

    /// Record an outgoing edge. No-op if an edge to the same destination
    /// already exists.
    pub fn insert_edge(&mut self, edge: Edge) {
        self.edges.entry(edge.destination().to_string()).or_insert(edge);
    }

    /// Iterate over all outgoing edges, ordered by destination name.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.values()
    }

    /// Number of outgoing edges.
    pub fn out_degree(&self) -> usize {
        self.edges.len()
    }
}
