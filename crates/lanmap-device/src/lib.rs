//! Lanmap Device — a network node that owns a privately discovered graph.
//!
//! A [`Device`] is the entry point of the system: construct it, run one
//! discovery pass against an [`lanmap_discovery::Oracle`], then query
//! cheapest paths over the discovered network any number of times.

pub mod device;

pub use device::Device;
