//! Remove-every-node sweep.
//!
//! Runs [`simulate`](super::simulate) once per institution and ranks the
//! institutions by how much structural damage their removal causes. The
//! scenarios share nothing but the read-only baseline, so they run on the
//! rayon pool.

use std::cmp::Reverse;

use nexus_core::{Domain, Network, NodeId};
use rayon::prelude::*;
use serde::Serialize;
use tracing::instrument;

use super::simulate;
use crate::metrics::PageRankConfig;

/// Damage caused by removing one node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImpactRow {
    pub id: NodeId,
    pub name: String,
    pub domain: Domain,
    pub edges_lost: usize,
    pub components_after: usize,
    pub components_gained: i64,
    pub largest_component: usize,
    pub fragmented: bool,
    pub newly_isolated: Vec<NodeId>,
}

/// Simulate the removal of every node in `network`.
///
/// Rows are ordered most damaging first: more components gained, then a
/// smaller surviving core, then more edges lost, then ascending id.
#[must_use]
#[instrument(skip(network, config), fields(nodes = network.node_count()))]
pub fn impact_sweep(network: &Network, config: &PageRankConfig) -> Vec<ImpactRow> {
    let mut rows: Vec<ImpactRow> = network
        .nodes()
        .par_iter()
        .map(|node| {
            let sim = simulate(network, Some(node.id), config);
            ImpactRow {
                id: node.id,
                name: node.name.clone(),
                domain: node.domain,
                edges_lost: sim.impact.edges_lost,
                components_after: sim.components.count,
                components_gained: sim.impact.components_gained,
                largest_component: sim.impact.largest_component,
                fragmented: sim.impact.fragmented,
                newly_isolated: sim.impact.newly_isolated,
            }
        })
        .collect();

    rows.sort_by_key(|r| {
        (
            Reverse(r.components_gained),
            r.largest_component,
            Reverse(r.edges_lost),
            r.id,
        )
    });
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::network;

    #[test]
    fn bridge_ranks_first() {
        // 0 - 1 - 2 - 3 - 4 with a chord 0 - 2: node 3 cuts off 4,
        // node 2 cuts off {3, 4}.
        let net = network(&[0, 1, 2, 3, 4], &[(0, 1), (1, 2), (0, 2), (2, 3), (3, 4)]);
        let rows = impact_sweep(&net, &PageRankConfig::default());
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0].id, 2);
        assert!(rows[0].fragmented);
        assert_eq!(rows[0].largest_component, 2);
        assert_eq!(rows[1].id, 3);
        assert_eq!(rows[1].newly_isolated, vec![4]);
    }

    #[test]
    fn sweep_matches_individual_simulations() {
        let net = network(&[0, 1, 2, 3], &[(0, 1), (1, 2), (2, 3), (3, 0), (0, 2)]);
        let config = PageRankConfig::default();
        for row in impact_sweep(&net, &config) {
            let sim = simulate(&net, Some(row.id), &config);
            assert_eq!(row.edges_lost, sim.impact.edges_lost);
            assert_eq!(row.components_after, sim.components.count);
        }
    }

    #[test]
    fn empty_network_sweeps_nothing() {
        assert!(impact_sweep(&network(&[], &[]), &PageRankConfig::default()).is_empty());
    }
}
