//! The immutable `(nodes, edges)` pair every analysis starts from.
//!
//! Perturbations ([`Network::without`], [`Network::restrict_to_domain`])
//! always return a new derived network; the source network is never touched.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::ModelError;
use crate::graph::{Adjacency, build_adjacency};
use crate::model::{Domain, Edge, Node, NodeId};

/// Validated node set plus collaboration edges.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Network {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl Network {
    /// Validate and wrap a node set and edge list.
    ///
    /// Edges are accepted as given, including ones that reference unknown
    /// ids; those are ignored when the adjacency is built.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::DuplicateNodeId`] if two nodes share an id and
    /// [`ModelError::InvalidFunding`] if a funding figure is not a positive
    /// finite number.
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Result<Self, ModelError> {
        let mut seen: HashMap<NodeId, &str> = HashMap::with_capacity(nodes.len());
        for node in &nodes {
            if !(node.funding.is_finite() && node.funding > 0.0) {
                return Err(ModelError::InvalidFunding {
                    id: node.id,
                    name: node.name.clone(),
                    funding: node.funding,
                });
            }
            if let Some(first) = seen.insert(node.id, &node.name) {
                return Err(ModelError::DuplicateNodeId {
                    id: node.id,
                    first: first.to_string(),
                    second: node.name.clone(),
                });
            }
        }
        Ok(Self { nodes, edges })
    }

    /// Wrap data already known to be valid (built-in dataset, derived views).
    pub(crate) fn from_trusted(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self { nodes, edges }
    }

    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Length of the raw edge list (duplicates and dangling edges included).
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Find a node by case-insensitive name.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&Node> {
        self.nodes
            .iter()
            .find(|n| n.name.eq_ignore_ascii_case(name))
    }

    /// Build the adjacency lists for this network.
    #[must_use]
    pub fn adjacency(&self) -> Adjacency {
        build_adjacency(&self.nodes, &self.edges)
    }

    /// Derived network with `id` and every edge touching it removed.
    ///
    /// Removing an id that is not present returns an identical copy.
    #[must_use]
    pub fn without(&self, id: NodeId) -> Self {
        Self {
            nodes: self.nodes.iter().filter(|n| n.id != id).cloned().collect(),
            edges: self
                .edges
                .iter()
                .copied()
                .filter(|e| !e.touches(id))
                .collect(),
        }
    }

    /// Derived network holding only `domain` nodes and the edges between
    /// them.
    #[must_use]
    pub fn restrict_to_domain(&self, domain: Domain) -> Self {
        let nodes: Vec<Node> = self
            .nodes
            .iter()
            .filter(|n| n.domain == domain)
            .cloned()
            .collect();
        let keep = |id: NodeId| nodes.iter().any(|n| n.id == id);
        let edges = self
            .edges
            .iter()
            .copied()
            .filter(|e| keep(e.0) && keep(e.1))
            .collect();
        Self { nodes, edges }
    }
}
