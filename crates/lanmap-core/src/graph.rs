use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::{Edge, Vertex};

/// An unordered collection of vertices, keyed by name.
///
/// The graph is append-only within a session: vertices and edges are never
/// removed once recorded. [`Graph::add_edge`] is the sole entry point for
/// new vertices during discovery; it lazily creates any vertex it needs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Graph {
    vertices: HashMap<String, Vertex>,
}

impl Graph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self {
            vertices: HashMap::new(),
        }
    }

    /// The vertex with the given name, if present.
    pub fn find_vertex(&self, name: &str) -> Option<&Vertex> {
        self.vertices.get(name)
    }

    /// Append a new vertex with no edges. No-op if a vertex with that name
    /// already exists, so recorded edges are never silently discarded.
    pub fn add_vertex(&mut self, name: &str) {
        self.vertices
            .entry(name.to_string())
            .or_insert_with(|| Vertex::new(name));
    }

    /// Returns `true` if a vertex named `name` is present.
    pub fn contains(&self, name: &str) -> bool {
        self.vertices.contains_key(name)
    }

    /// Returns `true` iff a vertex named `u_name` exists and has a recorded
    /// edge whose destination is `v_name`.
    pub fn is_child(&self, u_name: &str, v_name: &str) -> bool {
        self.get_edge(u_name, v_name).is_some()
    }

    /// The edge from `u_name` to `v_name`, if one is recorded.
    pub fn get_edge(&self, u_name: &str, v_name: &str) -> Option<&Edge> {
        self.vertices.get(u_name)?.edge_to(v_name)
    }

    /// Record a directed edge, creating any missing vertices first.
    /// No-op if an edge `origin -> destination` already exists.
    pub fn add_edge(&mut self, origin: &str, destination: &str, weight: f64) {
        if self.is_child(origin, destination) {
            return;
        }
        self.add_vertex(origin);
        self.add_vertex(destination);
        if let Some(vertex) = self.vertices.get_mut(origin) {
            vertex.insert_edge(Edge::new(origin, destination, weight));
        }
    }

    /// Iterate over all vertices. No ordering contract.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.values()
    }

    /// Number of vertices in the graph.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}
