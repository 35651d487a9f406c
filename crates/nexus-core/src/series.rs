//! Yearly time series shipped alongside the network: funding per domain and
//! grant counts per research topic.
//!
//! Both are plain input data. Derived statistics (growth, leading domain)
//! live in `nexus-analytics`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::Domain;

/// Funding for one year, in billions of USD per domain.
///
/// Serialized flat: `{ "year": "2018", "CS": 4.2, "BIO": 5.8, ... }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundingYear {
    pub year: String,
    #[serde(flatten)]
    pub by_domain: BTreeMap<Domain, f64>,
}

impl FundingYear {
    #[must_use]
    pub fn total(&self) -> f64 {
        self.by_domain.values().sum()
    }

    /// Funding for `domain`, 0 when absent.
    #[must_use]
    pub fn get(&self, domain: Domain) -> f64 {
        self.by_domain.get(&domain).copied().unwrap_or(0.0)
    }
}

/// Grant counts for one year, keyed by topic code (`"ML"`, `"QC"`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicYear {
    pub year: String,
    #[serde(flatten)]
    pub by_topic: BTreeMap<String, u64>,
}

impl TopicYear {
    #[must_use]
    pub fn total(&self) -> u64 {
        self.by_topic.values().sum()
    }

    #[must_use]
    pub fn get(&self, topic: &str) -> u64 {
        self.by_topic.get(topic).copied().unwrap_or(0)
    }
}

/// Display metadata for a research topic code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopicInfo {
    pub key: &'static str,
    pub label: &'static str,
}

/// Topics tracked by the reference dataset.
pub const TOPICS: [TopicInfo; 7] = [
    TopicInfo {
        key: "ML",
        label: "Machine Learning",
    },
    TopicInfo {
        key: "DL",
        label: "Deep Learning",
    },
    TopicInfo {
        key: "Bio",
        label: "Bioinformatics",
    },
    TopicInfo {
        key: "QC",
        label: "Quantum Computing",
    },
    TopicInfo {
        key: "NLP",
        label: "Natural Lang. Proc.",
    },
    TopicInfo {
        key: "Rob",
        label: "Robotics",
    },
    TopicInfo {
        key: "PH",
        label: "Public Health",
    },
];

/// Label for a topic code, falling back to the code itself.
#[must_use]
pub fn topic_label(key: &str) -> &str {
    TOPICS
        .iter()
        .find(|t| t.key == key)
        .map_or(key, |t| t.label)
}
