#![forbid(unsafe_code)]
//! nexus-core library.
//!
//! Immutable graph model for the institutional collaboration network, the
//! adjacency builder every metric consumes, dataset loading, and the
//! `nexus.toml` configuration.
//!
//! # Conventions
//!
//! - **Errors**: typed `thiserror` enums for construction failures
//!   ([`error::ModelError`], [`error::ConfigError`]); `anyhow::Result` for
//!   file loading.
//! - **Logging**: Use `tracing` macros (`info!`, `warn!`, `debug!`).

pub mod config;
pub mod dataset;
pub mod error;
pub mod graph;
pub mod model;
pub mod network;
pub mod series;

pub use dataset::Dataset;
pub use graph::{Adjacency, build_adjacency};
pub use model::{Domain, Edge, Node, NodeId};
pub use network::Network;
