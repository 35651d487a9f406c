//! What-if resilience simulation.
//!
//! # Overview
//!
//! [`simulate`] answers "how structurally important is institution X?" by
//! removing it and recomputing every metric from scratch over the derived
//! network. Importance is read off the side effects: edges lost, whether
//! the network fragments, and how large the surviving core is.
//!
//! ```text
//! baseline Network ──without(k)──▶ derived Network
//!        │                               │ adjacency()
//!        │                               ├─ centrality_table
//!        │                               ├─ connected_components
//!        │                               └─ density
//!        └──────────── Impact (deltas against baseline) ◀┘
//! ```
//!
//! There is no incremental update. Every call is independent, so distinct
//! scenarios can run in parallel ([`sweep::impact_sweep`] does).
//!
//! Removing an id that is not in the network is not an error: the result is
//! identical to simulating with no removal.

pub mod sweep;

use nexus_core::{Network, Node, NodeId};
use serde::Serialize;
use tracing::{debug, instrument};

use crate::metrics::{CentralityTable, PageRankConfig, centrality_table};
use crate::structure::{ComponentInfo, connected_components, density};

pub use sweep::{ImpactRow, impact_sweep};

/// Structural deltas between the baseline and the perturbed network.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Impact {
    pub baseline_nodes: usize,
    /// Edges retained by the baseline adjacency.
    pub baseline_edges: usize,
    pub baseline_components: usize,
    /// `baseline_edges - active_edges`.
    pub edges_lost: usize,
    /// Change in component count. Negative when an isolated node is removed.
    pub components_gained: i64,
    /// Whether the perturbed network has more than one component.
    pub fragmented: bool,
    /// Size of the largest surviving component.
    pub largest_component: usize,
    /// Nodes that had neighbors before the removal and have none after.
    pub newly_isolated: Vec<NodeId>,
}

/// Full metric snapshot of a (possibly perturbed) network.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Simulation {
    /// The node actually removed; `None` for the full network or when the
    /// requested id was not present.
    pub removed: Option<Node>,
    /// Derived network the metrics were computed on.
    #[serde(skip)]
    pub network: Network,
    pub active_nodes: usize,
    pub active_edges: usize,
    pub components: ComponentInfo,
    pub density: f64,
    pub centrality: CentralityTable,
    pub impact: Impact,
}

/// Simulate removing `removed` from `baseline` and recompute everything.
#[must_use]
#[instrument(skip(baseline, config), fields(nodes = baseline.node_count()))]
pub fn simulate(
    baseline: &Network,
    removed: Option<NodeId>,
    config: &PageRankConfig,
) -> Simulation {
    let removed_node = removed.and_then(|id| baseline.node(id)).cloned();
    let network = match &removed_node {
        Some(node) => baseline.without(node.id),
        None => baseline.clone(),
    };

    let baseline_adj = baseline.adjacency();
    let baseline_components = connected_components(&baseline_adj);

    let adj = network.adjacency();
    let components = connected_components(&adj);
    let active_nodes = adj.node_count();
    let active_edges = adj.edge_count();

    let newly_isolated = components
        .isolated
        .iter()
        .copied()
        .filter(|&id| baseline_adj.degree(id) > 0)
        .collect();

    let impact = Impact {
        baseline_nodes: baseline_adj.node_count(),
        baseline_edges: baseline_adj.edge_count(),
        baseline_components: baseline_components.count,
        edges_lost: baseline_adj.edge_count().saturating_sub(active_edges),
        components_gained: signed(components.count) - signed(baseline_components.count),
        fragmented: components.count > 1,
        largest_component: components.largest,
        newly_isolated,
    };

    let centrality = centrality_table(&network, &adj, config);
    let density = density(active_nodes, active_edges);

    debug!(
        removed = removed_node.as_ref().map(|n| n.id),
        active_nodes,
        active_edges,
        components = components.count,
        "simulation complete"
    );

    Simulation {
        removed: removed_node,
        network,
        active_nodes,
        active_edges,
        components,
        density,
        centrality,
        impact,
    }
}

fn signed(count: usize) -> i64 {
    i64::try_from(count).unwrap_or(i64::MAX)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
