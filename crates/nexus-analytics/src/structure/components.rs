//! Connected-component discovery.
//!
//! Walks the petgraph view of the adjacency with breadth-first search,
//! starting a new component at every node (in input order) not yet reached.
//! Sizes are reported in discovery order, which makes the output stable for
//! a given node order.

use fixedbitset::FixedBitSet;
use nexus_core::{Adjacency, NodeId};
use petgraph::graph::NodeIndex;
use petgraph::visit::Bfs;
use serde::Serialize;
use tracing::instrument;

/// Connected components of an undirected graph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ComponentInfo {
    /// Number of components (0 for an empty graph).
    pub count: usize,
    /// Node count of each component, in discovery order.
    pub sizes: Vec<usize>,
    /// Size of the largest component (0 for an empty graph).
    pub largest: usize,
    /// Member ids of each component, in BFS order.
    pub members: Vec<Vec<NodeId>>,
    /// Nodes with no neighbors at all.
    pub isolated: Vec<NodeId>,
}

impl ComponentInfo {
    /// Whether the graph is a single connected piece.
    #[must_use]
    pub const fn is_connected(&self) -> bool {
        self.count == 1
    }
}

/// Discover the connected components of `adj`.
#[must_use]
#[instrument(skip(adj), fields(nodes = adj.node_count()))]
pub fn connected_components(adj: &Adjacency) -> ComponentInfo {
    let graph = adj.graph();
    let n = adj.node_count();

    let mut visited = FixedBitSet::with_capacity(n);
    let mut members: Vec<Vec<NodeId>> = Vec::new();

    for start in 0..n {
        if visited.contains(start) {
            continue;
        }

        let mut component = Vec::new();
        let mut bfs = Bfs::new(graph, NodeIndex::new(start));
        while let Some(node) = bfs.next(graph) {
            visited.insert(node.index());
            component.push(graph[node]);
        }
        members.push(component);
    }

    let sizes: Vec<usize> = members.iter().map(Vec::len).collect();
    let isolated = (0..n)
        .filter(|&idx| adj.neighbor_indices(idx).is_empty())
        .map(|idx| adj.id_at(idx))
        .collect();

    ComponentInfo {
        count: sizes.len(),
        largest: sizes.iter().copied().max().unwrap_or(0),
        sizes,
        members,
        isolated,
    }
}
