//! Lanmap Discovery — breadth-first, oracle-driven network exploration.
//!
//! This crate provides:
//! - [`Oracle`] — the probing contract: given the traversal path used to
//!   reach a device, reveal that device's immediate outgoing edges.
//! - [`StaticOracle`] — an in-memory oracle backed by a fixed neighbor
//!   table, for tests and simulations.
//! - [`Discoverer`] — the breadth-first engine that populates a
//!   [`lanmap_core::Graph`] with everything reachable from an origin device.

pub mod engine;
pub mod error;
pub mod oracle;

pub use engine::{Discoverer, DiscoveryConfig, DiscoveryReport};
pub use error::{DiscoveryError, OracleError};
pub use oracle::{Oracle, StaticOracle};
