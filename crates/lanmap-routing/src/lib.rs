//! Lanmap Routing — cheapest-first search over an already-discovered graph.
//!
//! This crate provides:
//! - [`find_path`] — uniform-cost search returning the minimum-total-weight
//!   path between two named devices, or `None` when no path exists.
//! - [`Route`] — an ordered sequence of device names with its total weight.
//!
//! The search is a pure, read-only consumer of the graph: it issues no
//! probes and never mutates anything.

pub mod pathfinder;
pub mod route;

pub use pathfinder::find_path;
pub use route::Route;
