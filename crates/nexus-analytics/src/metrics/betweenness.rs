//! Betweenness centrality via Brandes' algorithm.
//!
//! # Overview
//!
//! Betweenness centrality measures how often an institution lies on the
//! shortest collaboration paths between other pairs. High-betweenness nodes
//! are brokers: removing them lengthens or severs paths between groups.
//!
//! # Algorithm
//!
//! Brandes (2001), unweighted:
//!
//! 1. For each source node `s`, run BFS to compute distances, shortest-path
//!    counts (`sigma`) and predecessor lists.
//! 2. Accumulate dependency scores in reverse BFS order (farthest first):
//!    `delta[v] += sigma[v] / sigma[w] * (1 + delta[w])`.
//! 3. Sum the dependencies of every non-source node across all sources.
//!
//! Complexity: O(V * E).
//!
//! # Normalization
//!
//! The graph is undirected, so each unordered pair is visited once from
//! each end. Dividing the raw sums by `(n-1)(n-2)` yields values in
//! `[0, 1]`. Graphs with `n <= 2` have no intermediate nodes and score 0
//! everywhere.
//!
//! Parallel edges are distinct shortest paths and raise `sigma`
//! accordingly; self-loops never lie on a shortest path.

use std::collections::{HashMap, VecDeque};

use nexus_core::{Adjacency, NodeId};
use tracing::instrument;

/// Normalized betweenness centrality for every node in `adj`.
///
/// Nodes that no shortest path passes through (leaves, isolated nodes,
/// members of disconnected pairs) score 0.0.
#[must_use]
#[instrument(skip(adj), fields(nodes = adj.node_count()))]
pub fn betweenness_centrality(adj: &Adjacency) -> HashMap<NodeId, f64> {
    let n = adj.node_count();
    let raw = raw_betweenness(adj);

    let scale = normalization(n);
    adj.ids()
        .iter()
        .zip(raw)
        .map(|(&id, score)| (id, score * scale))
        .collect()
}

/// Un-normalized Brandes sums, indexed by dense node index.
fn raw_betweenness(adj: &Adjacency) -> Vec<f64> {
    let n = adj.node_count();

    // Node-indexed betweenness accumulator.
    let mut cb: Vec<f64> = vec![0.0; n];

    for s in 0..n {
        // Nodes in order of discovery (farthest popped first).
        let mut stack: Vec<usize> = Vec::with_capacity(n);

        // predecessors[w]: nodes immediately preceding w on shortest paths from s.
        let mut predecessors: Vec<Vec<usize>> = vec![Vec::new(); n];

        // sigma[t]: number of shortest paths from s to t.
        let mut sigma: Vec<f64> = vec![0.0; n];
        sigma[s] = 1.0;

        // dist[t]: distance from s to t (None = unreached).
        let mut dist: Vec<Option<usize>> = vec![None; n];
        dist[s] = Some(0);

        let mut queue: VecDeque<usize> = VecDeque::new();
        queue.push_back(s);

        while let Some(v) = queue.pop_front() {
            stack.push(v);
            let Some(dv) = dist[v] else { continue };

            for &w in adj.neighbor_indices(v) {
                // First visit to w?
                if dist[w].is_none() {
                    dist[w] = Some(dv + 1);
                    queue.push_back(w);
                }

                // Shortest path to w via v?
                if dist[w] == Some(dv + 1) {
                    sigma[w] += sigma[v];
                    predecessors[w].push(v);
                }
            }
        }

        // Accumulate dependencies in reverse BFS order.
        let mut delta: Vec<f64> = vec![0.0; n];

        while let Some(w) = stack.pop() {
            for &v in &predecessors[w] {
                if sigma[w] > 0.0 {
                    delta[v] += (sigma[v] / sigma[w]) * (1.0 + delta[w]);
                }
            }

            if w != s {
                cb[w] += delta[w];
            }
        }
    }

    cb
}

#[allow(clippy::cast_precision_loss)]
fn normalization(n: usize) -> f64 {
    if n <= 2 {
        return 0.0;
    }
    1.0 / ((n - 1) * (n - 2)) as f64
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
