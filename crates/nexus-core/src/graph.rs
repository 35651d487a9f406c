//! Adjacency construction for the collaboration graph.
//!
//! # Overview
//!
//! [`build_adjacency`] is the single substrate every metric consumes. It is
//! a pure projection of `(nodes, edges)`: recomputed on every call, never
//! cached and never mutated after construction.
//!
//! ## Indexing
//!
//! Nodes receive dense indices in input order so the algorithms can work on
//! plain vectors. The same indices are used for the petgraph view returned
//! by [`Adjacency::graph`], which backs component traversal.
//!
//! ## Edge conventions
//!
//! - Edges whose endpoints are not both known are skipped, not errors.
//! - Parallel edges are kept; each one adds a neighbor entry.
//! - A self-loop adds the node to its own list twice, so it counts 2
//!   towards degree and `Σ degree == 2 * edge_count` always holds.

use std::collections::{BTreeMap, HashMap};

use petgraph::graph::{NodeIndex, UnGraph};
use tracing::{debug, instrument, warn};

use crate::model::{Edge, Node, NodeId};

// ---------------------------------------------------------------------------
// Adjacency
// ---------------------------------------------------------------------------

/// Undirected adjacency lists keyed by dense node index.
#[derive(Debug, Clone)]
pub struct Adjacency {
    ids: Vec<NodeId>,
    index: HashMap<NodeId, usize>,
    neighbors: Vec<Vec<usize>>,
    graph: UnGraph<NodeId, ()>,
    edge_count: usize,
    skipped_edges: usize,
}

/// Build adjacency lists for `nodes`, keeping only edges whose endpoints are
/// both present.
///
/// If `nodes` contains a repeated id, the first occurrence wins and the rest
/// are ignored. [`Network::new`](crate::network::Network::new) rejects such
/// input up front.
#[must_use]
#[instrument(skip_all, fields(nodes = nodes.len(), edges = edges.len()))]
pub fn build_adjacency(nodes: &[Node], edges: &[Edge]) -> Adjacency {
    let mut ids = Vec::with_capacity(nodes.len());
    let mut index = HashMap::with_capacity(nodes.len());
    let mut graph = UnGraph::<NodeId, ()>::with_capacity(nodes.len(), edges.len());

    for node in nodes {
        if index.contains_key(&node.id) {
            warn!(id = node.id, name = %node.name, "ignoring repeated node id");
            continue;
        }
        index.insert(node.id, ids.len());
        ids.push(node.id);
        graph.add_node(node.id);
    }

    let mut neighbors: Vec<Vec<usize>> = vec![Vec::new(); ids.len()];
    let mut edge_count = 0usize;
    let mut skipped_edges = 0usize;

    for &Edge(a, b) in edges {
        let (Some(&ia), Some(&ib)) = (index.get(&a), index.get(&b)) else {
            skipped_edges += 1;
            continue;
        };
        neighbors[ia].push(ib);
        neighbors[ib].push(ia);
        graph.add_edge(NodeIndex::new(ia), NodeIndex::new(ib), ());
        edge_count += 1;
    }

    if skipped_edges > 0 {
        debug!(skipped_edges, "skipped edges with unknown endpoints");
    }

    Adjacency {
        ids,
        index,
        neighbors,
        graph,
        edge_count,
        skipped_edges,
    }
}

impl Adjacency {
    /// Number of distinct nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.ids.len()
    }

    /// Number of edges retained (both endpoints known).
    #[must_use]
    pub const fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Number of input edges dropped because an endpoint was unknown.
    #[must_use]
    pub const fn skipped_edges(&self) -> usize {
        self.skipped_edges
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Node ids in index order.
    #[must_use]
    pub fn ids(&self) -> &[NodeId] {
        &self.ids
    }

    /// Dense index of `id`, if the node is present.
    #[must_use]
    pub fn index_of(&self, id: NodeId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    /// Node id at dense index `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= node_count()`.
    #[must_use]
    pub fn id_at(&self, idx: usize) -> NodeId {
        self.ids[idx]
    }

    /// Neighbor indices of the node at `idx`, one entry per edge end.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= node_count()`.
    #[must_use]
    pub fn neighbor_indices(&self, idx: usize) -> &[usize] {
        &self.neighbors[idx]
    }

    /// Neighbor ids of `id`. Empty if `id` is unknown.
    pub fn neighbors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.index_of(id)
            .map(|idx| self.neighbors[idx].as_slice())
            .unwrap_or_default()
            .iter()
            .map(|&n| self.ids[n])
    }

    /// Number of edge ends at `id` (0 if unknown).
    #[must_use]
    pub fn degree(&self, id: NodeId) -> usize {
        self.index_of(id).map_or(0, |idx| self.neighbors[idx].len())
    }

    /// Petgraph view of the same graph. Node weights are node ids and
    /// `NodeIndex::index()` equals the dense index used here.
    #[must_use]
    pub const fn graph(&self) -> &UnGraph<NodeId, ()> {
        &self.graph
    }

    /// Plain `id -> neighbor ids` mapping.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<NodeId, Vec<NodeId>> {
        self.ids
            .iter()
            .zip(&self.neighbors)
            .map(|(&id, ns)| (id, ns.iter().map(|&n| self.ids[n]).collect()))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Domain;

    fn nodes(ids: &[NodeId]) -> Vec<Node> {
        ids.iter()
            .map(|&id| Node::new(id, format!("N{id}"), Domain::Cs, 100.0))
            .collect()
    }

    #[test]
    fn empty_input_builds_empty_adjacency() {
        let adj = build_adjacency(&[], &[]);
        assert!(adj.is_empty());
        assert_eq!(adj.edge_count(), 0);
        assert!(adj.to_map().is_empty());
    }

    #[test]
    fn edges_are_symmetric() {
        let adj = build_adjacency(&nodes(&[1, 2, 3]), &[Edge(1, 2), Edge(2, 3)]);
        let map = adj.to_map();
        assert_eq!(map[&1], vec![2]);
        assert_eq!(map[&2], vec![1, 3]);
        assert_eq!(map[&3], vec![2]);
        assert_eq!(adj.edge_count(), 2);
    }

    #[test]
    fn isolated_nodes_get_empty_lists() {
        let adj = build_adjacency(&nodes(&[1, 2, 9]), &[Edge(1, 2)]);
        assert_eq!(adj.degree(9), 0);
        assert_eq!(adj.neighbors(9).count(), 0);
        assert_eq!(adj.node_count(), 3);
    }

    #[test]
    fn unknown_endpoints_are_skipped() {
        let adj = build_adjacency(&nodes(&[1, 2]), &[Edge(1, 2), Edge(2, 42), Edge(40, 41)]);
        assert_eq!(adj.edge_count(), 1);
        assert_eq!(adj.skipped_edges(), 2);
        assert_eq!(adj.degree(2), 1);
    }

    #[test]
    fn parallel_edges_inflate_degree() {
        let adj = build_adjacency(&nodes(&[1, 2]), &[Edge(1, 2), Edge(2, 1)]);
        assert_eq!(adj.degree(1), 2);
        assert_eq!(adj.degree(2), 2);
        assert_eq!(adj.graph().edge_count(), 2);
    }

    #[test]
    fn self_loop_counts_twice() {
        let adj = build_adjacency(&nodes(&[5]), &[Edge(5, 5)]);
        assert_eq!(adj.degree(5), 2);
        assert_eq!(adj.edge_count(), 1);
    }

    #[test]
    fn repeated_node_id_keeps_first() {
        let mut ns = nodes(&[1, 2]);
        ns.push(Node::new(1, "again", Domain::Bio, 5.0));
        let adj = build_adjacency(&ns, &[Edge(1, 2)]);
        assert_eq!(adj.node_count(), 2);
        assert_eq!(adj.degree(1), 1);
    }

    #[test]
    fn petgraph_indices_match_dense_indices() {
        let adj = build_adjacency(&nodes(&[10, 20, 30]), &[Edge(10, 30)]);
        for (idx, &id) in adj.ids().iter().enumerate() {
            assert_eq!(adj.graph()[NodeIndex::new(idx)], id);
            assert_eq!(adj.index_of(id), Some(idx));
        }
    }
}
