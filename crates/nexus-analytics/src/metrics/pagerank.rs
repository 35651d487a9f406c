//! PageRank over the undirected collaboration graph.
//!
//! # Algorithm
//!
//! Every undirected edge is treated as a reciprocal pair of links, and the
//! power method runs for a fixed number of iterations:
//!
//! ```text
//! PR'(v) = (1 - d) / N + d * Σ PR(u) / deg(u)   for each neighbor u of v
//! ```
//!
//! where `d` is the damping factor (default 0.85) and `deg(u)` counts edge
//! ends, so a parallel edge carries a proportionally larger share.
//!
//! Each iteration computes the whole new rank vector before swapping it in,
//! so node order never matters. There is no convergence check: the fixed
//! iteration budget (default 30) makes results reproducible.
//!
//! # Dangling nodes
//!
//! A node without neighbors has nowhere to send its rank. Under
//! [`DanglingPolicy::Evaporate`] (the default) that mass is dropped, so the
//! total falls below 1 when isolated nodes exist. Under
//! [`DanglingPolicy::Redistribute`] it is spread uniformly over all nodes
//! and the total stays at 1.

use std::collections::HashMap;

use nexus_core::config::PageRankSection;
use nexus_core::{Adjacency, NodeId};
use serde::Serialize;
use tracing::{debug, instrument};

pub use nexus_core::config::DanglingPolicy;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Configuration for PageRank computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PageRankConfig {
    /// Probability of following a link vs teleporting. Default: 0.85.
    pub damping: f64,
    /// Number of power iterations. Default: 30.
    pub iterations: usize,
    /// Treatment of nodes with no neighbors. Default: evaporate.
    pub dangling: DanglingPolicy,
}

impl Default for PageRankConfig {
    fn default() -> Self {
        Self {
            damping: 0.85,
            iterations: 30,
            dangling: DanglingPolicy::Evaporate,
        }
    }
}

impl From<&PageRankSection> for PageRankConfig {
    fn from(section: &PageRankSection) -> Self {
        Self {
            damping: section.damping,
            iterations: section.iterations,
            dangling: section.dangling,
        }
    }
}

// ---------------------------------------------------------------------------
// Result
// ---------------------------------------------------------------------------

/// Result of a PageRank computation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageRankResult {
    /// Node id → rank.
    pub scores: HashMap<NodeId, f64>,
    /// Iterations performed (always the configured count, 0 for empty graphs).
    pub iterations: usize,
    /// Total rank mass after the last iteration.
    pub mass: f64,
}

// ---------------------------------------------------------------------------
// PageRank
// ---------------------------------------------------------------------------

/// Compute PageRank from scratch.
#[must_use]
#[instrument(skip(adj), fields(nodes = adj.node_count()))]
#[allow(clippy::cast_precision_loss)]
pub fn pagerank(adj: &Adjacency, config: &PageRankConfig) -> PageRankResult {
    let n = adj.node_count();

    if n == 0 {
        return PageRankResult {
            scores: HashMap::new(),
            iterations: 0,
            mass: 0.0,
        };
    }

    let n_f64 = n as f64;
    let damping = config.damping;
    let base = (1.0 - damping) / n_f64;

    // Initialize ranks uniformly.
    let mut ranks = vec![1.0 / n_f64; n];
    let mut new_ranks = vec![0.0_f64; n];

    for _ in 0..config.iterations {
        // Rank held by dangling nodes this round, if it is to be recycled.
        let mut dangling_mass = 0.0;

        // Reset new_ranks to base teleportation value.
        for r in &mut new_ranks {
            *r = base;
        }

        // Distribute rank from each node to its neighbors.
        for (idx, &rank) in ranks.iter().enumerate() {
            let neighbors = adj.neighbor_indices(idx);
            if neighbors.is_empty() {
                if config.dangling == DanglingPolicy::Redistribute {
                    dangling_mass += rank;
                }
                continue;
            }
            let share = damping * rank / neighbors.len() as f64;
            for &nidx in neighbors {
                new_ranks[nidx] += share;
            }
        }

        if dangling_mass > 0.0 {
            let share = damping * dangling_mass / n_f64;
            for r in &mut new_ranks {
                *r += share;
            }
        }

        std::mem::swap(&mut ranks, &mut new_ranks);
    }

    let mass: f64 = ranks.iter().sum();
    debug!(iterations = config.iterations, mass, "pagerank finished");

    PageRankResult {
        scores: adj.ids().iter().copied().zip(ranks).collect(),
        iterations: config.iterations,
        mass,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
