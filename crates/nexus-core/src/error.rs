//! Typed construction errors.
//!
//! The analytics engine itself never fails on plausible graph data: unknown
//! edge endpoints are skipped and every division is guarded. Errors only
//! arise when a [`Network`](crate::network::Network) or a
//! [`NexusConfig`](crate::config::NexusConfig) is built from input that would
//! make every downstream metric meaningless.

use crate::model::NodeId;

/// Rejected node set.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ModelError {
    /// Two nodes share an id. All metrics key by id, so this is fatal.
    #[error("duplicate node id {id}: '{first}' and '{second}'")]
    DuplicateNodeId {
        id: NodeId,
        first: String,
        second: String,
    },

    /// Funding must be a positive, finite amount.
    #[error("node {id} ('{name}') has invalid funding {funding}")]
    InvalidFunding {
        id: NodeId,
        name: String,
        funding: f64,
    },
}

/// Rejected analytics configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// Damping factor outside the open interval (0, 1).
    #[error("pagerank damping must lie in (0, 1), got {0}")]
    InvalidDamping(f64),

    /// PageRank needs at least one iteration.
    #[error("pagerank iterations must be at least 1, got {0}")]
    InvalidIterations(usize),
}
