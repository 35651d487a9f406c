//! Headline figures for a network: totals, the top-funded institution, and
//! per-domain counts.

use std::collections::BTreeMap;

use nexus_core::{Domain, Network, Node, NodeId};
use serde::Serialize;

/// Network-wide totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkSummary {
    pub institutions: usize,
    /// Length of the raw edge list.
    pub collaborations: usize,
    /// Sum of node funding, in millions.
    pub total_funding: f64,
    pub top_funded: Option<Node>,
    pub by_domain: BTreeMap<Domain, usize>,
}

impl NetworkSummary {
    #[must_use]
    pub fn from_network(network: &Network) -> Self {
        let nodes = network.nodes();

        let top_funded = nodes
            .iter()
            .min_by(|a, b| b.funding.total_cmp(&a.funding).then(a.id.cmp(&b.id)))
            .cloned();

        let mut by_domain = BTreeMap::new();
        for node in nodes {
            *by_domain.entry(node.domain).or_insert(0) += 1;
        }

        Self {
            institutions: nodes.len(),
            collaborations: network.edge_count(),
            total_funding: nodes.iter().map(|n| n.funding).sum(),
            top_funded,
            by_domain,
        }
    }
}

/// Number of raw edge entries touching `id`.
///
/// Unlike adjacency degree this counts a self-loop once, and it also counts
/// edges whose other endpoint is unknown.
#[must_use]
pub fn collaborations(network: &Network, id: NodeId) -> usize {
    network.edges().iter().filter(|e| e.touches(id)).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use nexus_core::Edge;

    fn net() -> Network {
        Network::new(
            vec![
                Node::new(0, "A", Domain::Cs, 100.0),
                Node::new(1, "B", Domain::Cs, 250.0),
                Node::new(2, "C", Domain::Soc, 250.0),
            ],
            vec![Edge(0, 1), Edge(1, 2), Edge(1, 1), Edge(2, 77)],
        )
        .unwrap()
    }

    #[test]
    fn totals() {
        let summary = NetworkSummary::from_network(&net());
        assert_eq!(summary.institutions, 3);
        assert_eq!(summary.collaborations, 4);
        assert!((summary.total_funding - 600.0).abs() < 1e-9);
        assert_eq!(summary.by_domain[&Domain::Cs], 2);
        assert_eq!(summary.by_domain.get(&Domain::Bio), None);
    }

    #[test]
    fn top_funded_ties_break_by_lowest_id() {
        let summary = NetworkSummary::from_network(&net());
        assert_eq!(summary.top_funded.map(|n| n.id), Some(1));
    }

    #[test]
    fn empty_network_has_no_top() {
        let summary = NetworkSummary::from_network(&Network::default());
        assert!(summary.top_funded.is_none());
        assert!(summary.total_funding.abs() < f64::EPSILON);
    }

    #[test]
    fn collaboration_counts() {
        let n = net();
        assert_eq!(collaborations(&n, 1), 3);
        assert_eq!(collaborations(&n, 2), 2);
        assert_eq!(collaborations(&n, 42), 0);
    }
}
