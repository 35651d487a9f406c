#![forbid(unsafe_code)]
//! nexus-analytics library.
//!
//! Graph analytics over a [`nexus_core::Network`]:
//!
//! - [`metrics`]: degree, betweenness, and PageRank centrality, combined
//!   into a sortable [`metrics::CentralityTable`].
//! - [`structure`]: connected components, density, and Simpson diversity of
//!   each institution's partner domains.
//! - [`resilience`]: remove a node, recompute everything, report the
//!   damage. [`resilience::impact_sweep`] does this for every node.
//! - [`summary`] and [`trends`]: headline totals and funding/topic growth.
//!
//! Every entry point is a pure function of its `&` inputs. Nothing is
//! cached between calls.

pub mod metrics;
pub mod resilience;
pub mod structure;
pub mod summary;
pub mod trends;

pub use metrics::{CentralityRow, CentralityTable, PageRankConfig, RankKey, centrality_table};
pub use resilience::{Impact, ImpactRow, Simulation, impact_sweep, simulate};
pub use structure::{ComponentInfo, connected_components, density};
pub use summary::{NetworkSummary, collaborations};
pub use trends::{FundingSeries, TopicSeries};
