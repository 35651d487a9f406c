//! Dataset loading boundary.
//!
//! A [`Dataset`] is produced once, either from the built-in reference data
//! ([`Dataset::reference`]) or from a JSON file ([`Dataset::load`]), and then
//! passed explicitly to every analysis. There is no global graph state.
//!
//! ## File format
//!
//! ```json
//! {
//!   "nodes":   [{ "id": 0, "name": "MIT", "domain": "CS", "funding": 852 }],
//!   "edges":   [[0, 1], [0, 4]],
//!   "funding": [{ "year": "2018", "CS": 4.2, "BIO": 5.8 }],
//!   "topics":  [{ "year": "2018", "ML": 312, "QC": 67 }]
//! }
//! ```
//!
//! `edges`, `funding` and `topics` are optional.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::model::{Domain, Edge, Node, NodeId};
use crate::network::Network;
use crate::series::{FundingYear, TopicYear};

/// Network plus the yearly series that accompany it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Dataset {
    #[serde(flatten)]
    pub network: Network,
    pub funding: Vec<FundingYear>,
    pub topics: Vec<TopicYear>,
}

#[derive(Debug, Deserialize)]
struct DatasetFile {
    nodes: Vec<Node>,
    #[serde(default)]
    edges: Vec<Edge>,
    #[serde(default)]
    funding: Vec<FundingYear>,
    #[serde(default)]
    topics: Vec<TopicYear>,
}

impl Dataset {
    /// Parse a dataset from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid dataset JSON or if the node
    /// set fails validation (duplicate ids, invalid funding).
    pub fn from_json(text: &str) -> Result<Self> {
        let file: DatasetFile = serde_json::from_str(text).context("parse dataset JSON")?;
        let network = Network::new(file.nodes, file.edges).context("validate dataset nodes")?;
        Ok(Self {
            network,
            funding: file.funding,
            topics: file.topics,
        })
    }

    /// Load a dataset from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument]
    pub fn load(path: &Path) -> Result<Self> {
        let text =
            fs::read_to_string(path).with_context(|| format!("read dataset {}", path.display()))?;
        let dataset =
            Self::from_json(&text).with_context(|| format!("load dataset {}", path.display()))?;
        info!(
            nodes = dataset.network.node_count(),
            edges = dataset.network.edge_count(),
            "dataset loaded"
        );
        Ok(dataset)
    }

    /// Load `path` if given, otherwise return the reference dataset.
    ///
    /// # Errors
    ///
    /// Propagates [`Dataset::load`] errors.
    pub fn load_or_reference(path: Option<&Path>) -> Result<Self> {
        path.map_or_else(|| Ok(Self::reference()), Self::load)
    }

    /// The 25-institution, 48-collaboration reference network with its
    /// 2018–2023 funding and topic series.
    #[must_use]
    pub fn reference() -> Self {
        let nodes = REFERENCE_NODES
            .iter()
            .map(|&(id, name, domain, funding)| Node::new(id, name, domain, funding))
            .collect();
        let edges = REFERENCE_EDGES.iter().map(|&(a, b)| Edge(a, b)).collect();

        let funding = REFERENCE_FUNDING
            .iter()
            .map(|&(year, values)| FundingYear {
                year: year.to_string(),
                by_domain: Domain::ALL.into_iter().zip(values).collect(),
            })
            .collect();

        let topics = REFERENCE_TOPICS
            .iter()
            .map(|&(year, counts)| TopicYear {
                year: year.to_string(),
                by_topic: TOPIC_KEYS
                    .iter()
                    .map(|k| (*k).to_string())
                    .zip(counts)
                    .collect(),
            })
            .collect();

        Self {
            network: Network::from_trusted(nodes, edges),
            funding,
            topics,
        }
    }
}

// ---------------------------------------------------------------------------
// Reference data
// ---------------------------------------------------------------------------

const REFERENCE_NODES: [(NodeId, &str, Domain, f64); 25] = [
    (0, "MIT", Domain::Cs, 852.0),
    (1, "Stanford", Domain::Cs, 918.0),
    (2, "Caltech", Domain::Phy, 412.0),
    (3, "Harvard", Domain::Bio, 1102.0),
    (4, "CMU", Domain::Cs, 634.0),
    (5, "UC Berkeley", Domain::Cs, 789.0),
    (6, "U Michigan", Domain::Eng, 723.0),
    (7, "UIUC", Domain::Eng, 612.0),
    (8, "Cornell", Domain::Bio, 587.0),
    (9, "Georgia Tech", Domain::Eng, 543.0),
    (10, "UT Austin", Domain::Cs, 498.0),
    (11, "UW Seattle", Domain::Bio, 612.0),
    (12, "Princeton", Domain::Phy, 389.0),
    (13, "Columbia", Domain::Soc, 445.0),
    (14, "Duke", Domain::Bio, 378.0),
    (15, "Northwestern", Domain::Soc, 412.0),
    (16, "NYU", Domain::Soc, 334.0),
    (17, "UW Madison", Domain::Bio, 521.0),
    (18, "Maryland", Domain::Cs, 445.0),
    (19, "USC", Domain::Cs, 398.0),
    (20, "Purdue", Domain::Eng, 478.0),
    (21, "Ohio State", Domain::Eng, 512.0),
    (22, "Penn State", Domain::Eng, 489.0),
    (23, "UCSD", Domain::Bio, 567.0),
    (24, "UT Dallas", Domain::Cs, 187.0),
];

const REFERENCE_EDGES: [(NodeId, NodeId); 48] = [
    (0, 1),
    (0, 4),
    (0, 5),
    (0, 8),
    (0, 12),
    (0, 18),
    (1, 2),
    (1, 4),
    (1, 5),
    (1, 19),
    (1, 23),
    (2, 12),
    (2, 19),
    (3, 8),
    (3, 11),
    (3, 14),
    (3, 17),
    (3, 13),
    (4, 5),
    (4, 7),
    (4, 18),
    (5, 19),
    (5, 23),
    (5, 11),
    (6, 7),
    (6, 20),
    (6, 21),
    (6, 22),
    (7, 20),
    (7, 22),
    (8, 14),
    (8, 12),
    (9, 10),
    (9, 20),
    (9, 21),
    (10, 18),
    (10, 24),
    (11, 23),
    (11, 17),
    (12, 13),
    (12, 16),
    (13, 15),
    (13, 16),
    (14, 17),
    (15, 16),
    (15, 21),
    (17, 21),
    (20, 22),
];

/// Funding in billions, columns in `Domain::ALL` order.
const REFERENCE_FUNDING: [(&str, [f64; 5]); 6] = [
    ("2018", [4.2, 5.8, 2.9, 3.7, 1.8]),
    ("2019", [4.9, 6.1, 3.1, 3.9, 1.9]),
    ("2020", [5.8, 7.2, 3.0, 4.1, 2.1]),
    ("2021", [6.9, 8.4, 3.2, 4.4, 2.3]),
    ("2022", [7.8, 8.9, 3.5, 4.8, 2.5]),
    ("2023", [9.1, 9.3, 3.7, 5.1, 2.8]),
];

const TOPIC_KEYS: [&str; 7] = ["ML", "DL", "Bio", "QC", "NLP", "Rob", "PH"];

const REFERENCE_TOPICS: [(&str, [u64; 7]); 6] = [
    ("2018", [312, 189, 245, 67, 134, 156, 178]),
    ("2019", [421, 287, 267, 98, 189, 178, 201]),
    ("2020", [589, 412, 312, 134, 287, 198, 389]),
    ("2021", [712, 534, 334, 189, 378, 223, 312]),
    ("2022", [845, 678, 356, 245, 489, 267, 289]),
    ("2023", [1023, 812, 389, 312, 612, 312, 267]),
];

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
