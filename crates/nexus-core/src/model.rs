use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Stable institution identifier. Edges refer to nodes by id, never by
/// reference, so removing a node only requires filtering the edge list.
pub type NodeId = u32;

/// Research domain of an institution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Domain {
    Cs,
    Bio,
    Phy,
    Eng,
    Soc,
}

impl Domain {
    /// Every domain, in display order.
    pub const ALL: [Self; 5] = [Self::Cs, Self::Bio, Self::Phy, Self::Eng, Self::Soc];

    /// Short code used in datasets and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cs => "CS",
            Self::Bio => "BIO",
            Self::Phy => "PHY",
            Self::Eng => "ENG",
            Self::Soc => "SOC",
        }
    }

    /// Human-readable domain name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Cs => "Computer Science",
            Self::Bio => "Life Sciences",
            Self::Phy => "Physics & Math",
            Self::Eng => "Engineering",
            Self::Soc => "Social Sciences",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name a [`Domain`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid domain: '{0}' (expected one of CS, BIO, PHY, ENG, SOC)")]
pub struct ParseDomainError(pub String);

impl FromStr for Domain {
    type Err = ParseDomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "CS" => Ok(Self::Cs),
            "BIO" => Ok(Self::Bio),
            "PHY" => Ok(Self::Phy),
            "ENG" => Ok(Self::Eng),
            "SOC" => Ok(Self::Soc),
            _ => Err(ParseDomainError(s.to_string())),
        }
    }
}

/// An institution in the collaboration network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub name: String,
    pub domain: Domain,
    /// Funding in millions of USD.
    pub funding: f64,
}

impl Node {
    pub fn new(id: NodeId, name: impl Into<String>, domain: Domain, funding: f64) -> Self {
        Self {
            id,
            name: name.into(),
            domain,
            funding,
        }
    }
}

/// Undirected collaboration between two institutions.
///
/// Serialized as a two-element array `[a, b]`. Duplicate edges are kept
/// as-is; callers that want a simple graph must deduplicate themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge(pub NodeId, pub NodeId);

impl Edge {
    /// Whether either endpoint is `id`.
    #[must_use]
    pub const fn touches(self, id: NodeId) -> bool {
        self.0 == id || self.1 == id
    }
}

impl From<(NodeId, NodeId)> for Edge {
    fn from((a, b): (NodeId, NodeId)) -> Self {
        Self(a, b)
    }
}
