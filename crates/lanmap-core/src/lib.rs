//! Lanmap Core — the graph model shared by discovery and routing.
//!
//! This crate provides:
//! - [`Edge`] — a directed, weighted connection between two named devices.
//! - [`Vertex`] — a named node owning its outgoing edges.
//! - [`Graph`] — the append-only collection of vertices a device builds
//!   while discovering its surroundings.

pub mod error;
pub mod graph;
pub mod types;

pub use error::GraphError;
pub use graph::Graph;
pub use types::{Edge, Vertex};
