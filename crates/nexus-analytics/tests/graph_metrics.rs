//! Known-topology regression tests for the metric pass.
//!
//! Each test uses a hand-crafted graph whose metric values can be derived
//! on paper. Values are hardcoded so any algorithm change that shifts them
//! is caught.

use std::collections::HashMap;

use nexus_analytics::metrics::{
    DanglingPolicy, PageRankConfig, betweenness_centrality, degree_centrality, pagerank,
};
use nexus_analytics::structure::{connected_components, density, interdisciplinary_diversity};
use nexus_core::{Adjacency, Domain, Edge, Network, Node, NodeId};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn build(ids: &[NodeId], edges: &[(NodeId, NodeId)]) -> (Network, Adjacency) {
    let nodes = ids
        .iter()
        .map(|&id| Node::new(id, format!("I{id}"), Domain::Eng, 10.0))
        .collect();
    let edges = edges.iter().map(|&(a, b)| Edge(a, b)).collect();
    let network = Network::new(nodes, edges).unwrap();
    let adj = network.adjacency();
    (network, adj)
}

fn assert_close(scores: &HashMap<NodeId, f64>, id: NodeId, expected: f64) {
    let actual = scores[&id];
    assert!(
        (actual - expected).abs() < 1e-9,
        "node {id}: expected {expected}, got {actual}"
    );
}

// ---------------------------------------------------------------------------
// Path: 0 - 1 - 2 - 3 - 4
// ---------------------------------------------------------------------------

#[test]
fn path_of_five() {
    let (_, adj) = build(&[0, 1, 2, 3, 4], &[(0, 1), (1, 2), (2, 3), (3, 4)]);

    let dc = degree_centrality(&adj);
    assert_close(&dc, 0, 0.25);
    assert_close(&dc, 2, 0.5);

    // Middle node brokers (0,3) (0,4) (1,3) (1,4): 4 of 6 pairs.
    let bc = betweenness_centrality(&adj);
    assert_close(&bc, 2, 4.0 / 6.0);
    assert_close(&bc, 1, 3.0 / 6.0);
    assert_close(&bc, 0, 0.0);

    assert_eq!(connected_components(&adj).count, 1);
    assert!((density(5, 4) - 0.4).abs() < 1e-12);
}

// ---------------------------------------------------------------------------
// Complete graph K5
// ---------------------------------------------------------------------------

#[test]
fn complete_graph() {
    let ids: Vec<NodeId> = (0..5).collect();
    let edges: Vec<(NodeId, NodeId)> = ids
        .iter()
        .flat_map(|&a| ids.iter().filter(move |&&b| b > a).map(move |&b| (a, b)))
        .collect();
    let (_, adj) = build(&ids, &edges);

    for &id in &ids {
        assert_close(&degree_centrality(&adj), id, 1.0);
        assert_close(&betweenness_centrality(&adj), id, 0.0);
        assert_close(&pagerank(&adj, &PageRankConfig::default()).scores, id, 0.2);
    }
    assert!((density(5, edges.len()) - 1.0).abs() < 1e-12);
}

// ---------------------------------------------------------------------------
// Two triangles, no bridge
// ---------------------------------------------------------------------------

#[test]
fn two_triangles() {
    let (_, adj) = build(
        &[0, 1, 2, 3, 4, 5],
        &[(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3)],
    );
    let info = connected_components(&adj);
    assert_eq!(info.count, 2);
    assert_eq!(info.sizes, vec![3, 3]);
    assert!(!info.is_connected());

    let bc = betweenness_centrality(&adj);
    assert!(bc.values().all(|v| v.abs() < 1e-12));

    // Symmetric halves split the mass evenly.
    let pr = pagerank(&adj, &PageRankConfig::default());
    for id in 0..6 {
        assert_close(&pr.scores, id, 1.0 / 6.0);
    }
}

// ---------------------------------------------------------------------------
// Star with an isolated node: dangling policies diverge
// ---------------------------------------------------------------------------

#[test]
fn dangling_policies() {
    let (_, adj) = build(&[0, 1, 2, 3, 9], &[(0, 1), (0, 2), (0, 3)]);

    let evaporate = pagerank(&adj, &PageRankConfig::default());
    assert!(evaporate.mass < 1.0 - 1e-3);
    assert!(evaporate.scores[&9] > 0.0);

    let redistribute = pagerank(
        &adj,
        &PageRankConfig {
            dangling: DanglingPolicy::Redistribute,
            ..PageRankConfig::default()
        },
    );
    assert!((redistribute.mass - 1.0).abs() < 1e-9);
    assert!(redistribute.scores[&0] > redistribute.scores[&1]);
}

// ---------------------------------------------------------------------------
// Diversity on a mixed neighborhood
// ---------------------------------------------------------------------------

#[test]
fn diversity_mixed_neighborhood() {
    let nodes = vec![
        Node::new(0, "Hub", Domain::Cs, 1.0),
        Node::new(1, "B1", Domain::Bio, 1.0),
        Node::new(2, "P1", Domain::Phy, 1.0),
        Node::new(3, "E1", Domain::Eng, 1.0),
        Node::new(4, "S1", Domain::Soc, 1.0),
    ];
    let edges = vec![Edge(0, 1), Edge(0, 2), Edge(0, 3), Edge(0, 4)];
    let network = Network::new(nodes, edges).unwrap();
    let div = interdisciplinary_diversity(network.nodes(), &network.adjacency());
    assert_close(&div, 0, 0.75);
    assert_close(&div, 1, 0.0);
}
