//! Degree centrality.
//!
//! `degree(v) / max(n - 1, 1)`: the share of the other institutions a node
//! collaborates with directly. Degree is counted from the adjacency lists,
//! so parallel edges each count and a self-loop counts twice. Values can
//! therefore exceed 1.0 on multigraphs; on simple graphs they stay in
//! `[0, 1]`.

use std::collections::HashMap;

use nexus_core::{Adjacency, NodeId};

/// Normalized degree for every node in `adj`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn degree_centrality(adj: &Adjacency) -> HashMap<NodeId, f64> {
    let denom = adj.node_count().saturating_sub(1).max(1) as f64;
    adj.ids()
        .iter()
        .enumerate()
        .map(|(idx, &id)| (id, adj.neighbor_indices(idx).len() as f64 / denom))
        .collect()
}
