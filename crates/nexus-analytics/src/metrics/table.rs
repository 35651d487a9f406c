//! Per-node table combining every centrality and diversity score.
//!
//! This is the shape a presentation layer consumes: one row per
//! institution, sortable by any of the four metric keys.

use std::fmt;
use std::str::FromStr;

use nexus_core::{Adjacency, Domain, Network, NodeId};
use serde::{Deserialize, Serialize};

use crate::metrics::{PageRankConfig, betweenness_centrality, degree_centrality, pagerank};
use crate::structure::interdisciplinary_diversity;

/// Metric a [`CentralityTable`] can be ranked by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankKey {
    #[default]
    Degree,
    Betweenness,
    Pagerank,
    Diversity,
}

impl RankKey {
    pub const ALL: [Self; 4] = [
        Self::Degree,
        Self::Betweenness,
        Self::Pagerank,
        Self::Diversity,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Degree => "degree",
            Self::Betweenness => "betweenness",
            Self::Pagerank => "pagerank",
            Self::Diversity => "diversity",
        }
    }
}

impl fmt::Display for RankKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name a [`RankKey`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRankKeyError(pub String);

impl fmt::Display for ParseRankKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid rank key: '{}' (expected degree, betweenness, pagerank or diversity)",
            self.0
        )
    }
}

impl std::error::Error for ParseRankKeyError {}

impl FromStr for RankKey {
    type Err = ParseRankKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "degree" => Ok(Self::Degree),
            "betweenness" => Ok(Self::Betweenness),
            "pagerank" => Ok(Self::Pagerank),
            "diversity" => Ok(Self::Diversity),
            _ => Err(ParseRankKeyError(s.to_string())),
        }
    }
}

/// Metrics for one institution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CentralityRow {
    pub id: NodeId,
    pub name: String,
    pub domain: Domain,
    /// Raw edge-end count.
    pub degree: usize,
    pub degree_centrality: f64,
    pub betweenness: f64,
    pub pagerank: f64,
    pub diversity: f64,
}

impl CentralityRow {
    #[must_use]
    pub const fn score(&self, key: RankKey) -> f64 {
        match key {
            RankKey::Degree => self.degree_centrality,
            RankKey::Betweenness => self.betweenness,
            RankKey::Pagerank => self.pagerank,
            RankKey::Diversity => self.diversity,
        }
    }
}

/// Rows for every node, in network input order until sorted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CentralityTable {
    pub rows: Vec<CentralityRow>,
}

/// Compute every metric for `network` and assemble the table.
///
/// `adj` must be the adjacency of `network`; it is passed in so callers
/// that already built it (the resilience simulator) do not build it twice.
#[must_use]
pub fn centrality_table(
    network: &Network,
    adj: &Adjacency,
    config: &PageRankConfig,
) -> CentralityTable {
    let degree = degree_centrality(adj);
    let betweenness = betweenness_centrality(adj);
    let pr = pagerank(adj, config);
    let diversity = interdisciplinary_diversity(network.nodes(), adj);

    let rows = network
        .nodes()
        .iter()
        .filter_map(|node| {
            Some(CentralityRow {
                id: node.id,
                name: node.name.clone(),
                domain: node.domain,
                degree: adj.degree(node.id),
                degree_centrality: *degree.get(&node.id)?,
                betweenness: betweenness.get(&node.id).copied().unwrap_or(0.0),
                pagerank: pr.scores.get(&node.id).copied().unwrap_or(0.0),
                diversity: diversity.get(&node.id).copied().unwrap_or(0.0),
            })
        })
        .collect();

    CentralityTable { rows }
}

impl CentralityTable {
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&CentralityRow> {
        self.rows.iter().find(|r| r.id == id)
    }

    /// Sort descending by `key`, ties broken by ascending id.
    pub fn sort_by(&mut self, key: RankKey) {
        self.rows.sort_by(|a, b| by_score_desc(a, b, key));
    }

    /// Sorted copy, truncated to `limit` rows.
    #[must_use]
    pub fn ranked(&self, key: RankKey, limit: Option<usize>) -> Self {
        let mut ranked = self.clone();
        ranked.sort_by(key);
        if let Some(limit) = limit {
            ranked.rows.truncate(limit);
        }
        ranked
    }

    /// Row with the highest `key` score.
    #[must_use]
    pub fn top(&self, key: RankKey) -> Option<&CentralityRow> {
        self.rows.iter().min_by(|a, b| by_score_desc(a, b, key))
    }
}

/// Descending `key` score under `f64::total_cmp`, then ascending id.
fn by_score_desc(a: &CentralityRow, b: &CentralityRow, key: RankKey) -> std::cmp::Ordering {
    b.score(key).total_cmp(&a.score(key)).then(a.id.cmp(&b.id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::network;

    fn star() -> (Network, Adjacency) {
        let net = network(&[0, 1, 2, 3], &[(0, 1), (0, 2), (0, 3)]);
        let adj = net.adjacency();
        (net, adj)
    }

    #[test]
    fn table_has_row_per_node() {
        let (net, adj) = star();
        let table = centrality_table(&net, &adj, &PageRankConfig::default());
        assert_eq!(table.len(), 4);
        assert_eq!(table.get(0).map(|r| r.degree), Some(3));
    }

    #[test]
    fn ranked_puts_hub_first_for_every_key() {
        let (net, adj) = star();
        let table = centrality_table(&net, &adj, &PageRankConfig::default());
        for key in [RankKey::Degree, RankKey::Betweenness, RankKey::Pagerank] {
            let ranked = table.ranked(key, Some(2));
            assert_eq!(ranked.len(), 2);
            assert_eq!(ranked.rows[0].id, 0, "{key}");
            assert_eq!(table.top(key).map(|r| r.id), Some(0));
        }
    }

    #[test]
    fn ties_break_by_id() {
        let (net, adj) = star();
        let mut table = centrality_table(&net, &adj, &PageRankConfig::default());
        table.sort_by(RankKey::Degree);
        let ids: Vec<_> = table.rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3]);
    }

    #[test]
    fn nan_scores_rank_in_a_total_order() {
        let row = |id, pagerank| CentralityRow {
            id,
            name: format!("N{id}"),
            domain: Domain::Cs,
            degree: 0,
            degree_centrality: 0.0,
            betweenness: 0.0,
            pagerank,
            diversity: 0.0,
        };
        let mut table = CentralityTable {
            rows: vec![row(2, 0.1), row(0, f64::NAN), row(1, 0.5), row(3, 0.1)],
        };
        table.sort_by(RankKey::Pagerank);
        let ids: Vec<_> = table.rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3]);
        assert_eq!(table.top(RankKey::Pagerank).map(|r| r.id), Some(0));
    }

    #[test]
    fn rank_key_parses() {
        for key in RankKey::ALL {
            assert_eq!(key.as_str().parse::<RankKey>(), Ok(key));
        }
        assert_eq!("PageRank".parse::<RankKey>(), Ok(RankKey::Pagerank));
        assert!("closeness".parse::<RankKey>().is_err());
    }

    #[test]
    fn table_serializes_as_row_array() {
        let (net, adj) = star();
        let table = centrality_table(&net, &adj, &PageRankConfig::default());
        let json = serde_json::to_value(table.ranked(RankKey::Degree, Some(1))).unwrap();
        assert_eq!(json[0]["id"], 0);
        assert_eq!(json[0]["domain"], "CS");
        assert_eq!(serde_json::to_value(RankKey::Pagerank).unwrap(), "pagerank");
    }

    #[test]
    fn empty_network_yields_empty_table() {
        let net = network(&[], &[]);
        let table = centrality_table(&net, &net.adjacency(), &PageRankConfig::default());
        assert!(table.is_empty());
        assert!(table.top(RankKey::Pagerank).is_none());
    }
}
