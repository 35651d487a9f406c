//! Interdisciplinary diversity of each institution's partners.
//!
//! For every node, neighbor domains are tallied and the Simpson diversity
//! index `1 - Σ p_i²` is taken over the resulting distribution. A node whose
//! partners are all in one domain scores 0; partners split evenly across
//! `k` domains score `1 - 1/k`.
//!
//! Each adjacency entry is one observation, so a repeated collaboration
//! weighs its partner's domain twice. Self-loops are not observations.
//! Nodes with fewer than two observations score 0.

use std::collections::{BTreeMap, HashMap};

use nexus_core::{Adjacency, Domain, Node, NodeId};

/// Simpson diversity of neighbor domains for every node in `adj`.
///
/// `nodes` supplies the domain of each id; adjacency ids missing from
/// `nodes` contribute no observation.
#[must_use]
pub fn interdisciplinary_diversity(nodes: &[Node], adj: &Adjacency) -> HashMap<NodeId, f64> {
    let domains: HashMap<NodeId, Domain> = nodes.iter().map(|n| (n.id, n.domain)).collect();

    adj.ids()
        .iter()
        .map(|&id| {
            let tally = adj
                .neighbors(id)
                .filter(|&n| n != id)
                .filter_map(|n| domains.get(&n).copied())
                .fold(BTreeMap::new(), |mut tally, domain| {
                    *tally.entry(domain).or_insert(0usize) += 1;
                    tally
                });
            (id, simpson_index(&tally))
        })
        .collect()
}

/// `1 - Σ (count / total)²`, or 0 when there are fewer than two observations.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn simpson_index<K>(tally: &BTreeMap<K, usize>) -> f64 {
    let total: usize = tally.values().sum();
    if total <= 1 {
        return 0.0;
    }
    let total = total as f64;
    1.0 - tally
        .values()
        .map(|&count| {
            let p = count as f64 / total;
            p * p
        })
        .sum::<f64>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use nexus_core::{Edge, build_adjacency};

    fn node(id: NodeId, domain: Domain) -> Node {
        Node::new(id, format!("N{id}"), domain, 1.0)
    }

    #[test]
    fn no_or_single_neighbor_is_zero() {
        let nodes = vec![
            node(0, Domain::Cs),
            node(1, Domain::Bio),
            node(2, Domain::Phy),
        ];
        let adj = build_adjacency(&nodes, &[Edge(0, 1)]);
        let div = interdisciplinary_diversity(&nodes, &adj);
        assert!(div[&0].abs() < 1e-12);
        assert!(div[&2].abs() < 1e-12);
    }

    #[test]
    fn same_domain_neighbors_are_zero() {
        let nodes = vec![
            node(0, Domain::Cs),
            node(1, Domain::Bio),
            node(2, Domain::Bio),
            node(3, Domain::Bio),
        ];
        let adj = build_adjacency(&nodes, &[Edge(0, 1), Edge(0, 2), Edge(0, 3)]);
        assert!(interdisciplinary_diversity(&nodes, &adj)[&0].abs() < 1e-12);
    }

    #[test]
    fn even_split_approaches_one_minus_inverse_k() {
        let mut nodes = vec![node(100, Domain::Cs)];
        let mut edges = Vec::new();
        for (i, domain) in Domain::ALL.into_iter().enumerate() {
            let id = NodeId::try_from(i).unwrap();
            nodes.push(node(id, domain));
            edges.push(Edge(100, id));
        }
        let adj = build_adjacency(&nodes, &edges);
        let div = interdisciplinary_diversity(&nodes, &adj);
        assert!((div[&100] - (1.0 - 1.0 / 5.0)).abs() < 1e-12);
    }

    #[test]
    fn two_to_one_split() {
        // Neighbors: BIO, BIO, SOC → 1 - (4/9 + 1/9) = 4/9.
        let nodes = vec![
            node(0, Domain::Cs),
            node(1, Domain::Bio),
            node(2, Domain::Bio),
            node(3, Domain::Soc),
        ];
        let adj = build_adjacency(&nodes, &[Edge(0, 1), Edge(0, 2), Edge(0, 3)]);
        assert!((interdisciplinary_diversity(&nodes, &adj)[&0] - 4.0 / 9.0).abs() < 1e-12);
    }

    #[test]
    fn self_loop_is_not_an_observation() {
        let nodes = vec![node(0, Domain::Cs), node(1, Domain::Bio)];
        let adj = build_adjacency(&nodes, &[Edge(0, 0), Edge(0, 1)]);
        assert!(interdisciplinary_diversity(&nodes, &adj)[&0].abs() < 1e-12);
    }

    #[test]
    fn simpson_of_empty_tally_is_zero() {
        let tally: BTreeMap<Domain, usize> = BTreeMap::new();
        assert!(simpson_index(&tally).abs() < 1e-12);
    }
}
