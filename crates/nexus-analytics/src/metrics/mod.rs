//! Centrality metrics for the collaboration graph.
//!
//! # Overview
//!
//! Each metric answers a different question about an institution's
//! importance:
//!
//! - **Degree centrality** (`degree`): How many partners does it have,
//!   relative to the largest possible number?
//! - **Betweenness centrality** (`betweenness`): How often does it broker
//!   the shortest collaboration path between two others?
//! - **PageRank** (`pagerank`): Is it connected to other well-connected
//!   institutions?
//!
//! [`table`] combines them with interdisciplinary diversity into one
//! sortable row per node.
//!
//! # Usage
//!
//! All metrics take an [`Adjacency`](nexus_core::Adjacency) built for the
//! network being analyzed and return scores keyed by node id.
//!
//! ```rust,ignore
//! use nexus_analytics::metrics::{PageRankConfig, betweenness_centrality, pagerank};
//!
//! let adj = network.adjacency();
//! let bc = betweenness_centrality(&adj);
//! let pr = pagerank(&adj, &PageRankConfig::default());
//! ```

pub mod betweenness;
pub mod degree;
pub mod pagerank;
pub mod table;

pub use betweenness::betweenness_centrality;
pub use degree::degree_centrality;
pub use pagerank::{DanglingPolicy, PageRankConfig, PageRankResult, pagerank};
pub use table::{CentralityRow, CentralityTable, RankKey, centrality_table};
