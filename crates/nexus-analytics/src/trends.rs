//! Growth statistics over the yearly funding and topic series.
//!
//! Growth is always first year → last year of the series as given (input
//! order, not sorted by year label). A zero or missing base has no defined
//! growth and yields `None`, as does a series with no years.

use std::collections::BTreeMap;

use nexus_core::Domain;
use nexus_core::series::{FundingYear, TopicYear, topic_label};
use serde::Serialize;

/// Percentage change from `from` to `to`; `None` when `from` is zero.
#[must_use]
pub fn growth_pct(from: f64, to: f64) -> Option<f64> {
    if from == 0.0 || !from.is_finite() || !to.is_finite() {
        return None;
    }
    Some((to - from) / from * 100.0)
}

// ---------------------------------------------------------------------------
// Funding
// ---------------------------------------------------------------------------

/// Read-only view over per-year funding by domain.
#[derive(Debug, Clone, Copy)]
pub struct FundingSeries<'a> {
    years: &'a [FundingYear],
}

impl<'a> FundingSeries<'a> {
    #[must_use]
    pub const fn new(years: &'a [FundingYear]) -> Self {
        Self { years }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    /// Total funding across all domains for `year`.
    #[must_use]
    pub fn total(&self, year: &str) -> Option<f64> {
        self.years
            .iter()
            .find(|y| y.year == year)
            .map(FundingYear::total)
    }

    /// Growth of the all-domain total, first year to last.
    #[must_use]
    pub fn growth_pct(&self) -> Option<f64> {
        let (first, last) = (self.years.first()?, self.years.last()?);
        growth_pct(first.total(), last.total())
    }

    #[must_use]
    pub fn domain_growth_pct(&self, domain: Domain) -> Option<f64> {
        let (first, last) = (self.years.first()?, self.years.last()?);
        growth_pct(first.get(domain), last.get(domain))
    }

    /// Best-funded domain in the last year. Ties go to the earlier domain
    /// in [`Domain::ALL`] order.
    #[must_use]
    pub fn top_domain(&self) -> Option<(Domain, f64)> {
        let last = self.years.last()?;
        Domain::ALL
            .into_iter()
            .filter(|d| last.by_domain.contains_key(d))
            .map(|d| (d, last.get(d)))
            .reduce(|best, cur| if cur.1 > best.1 { cur } else { best })
    }

    /// Everything above, in one serializable record.
    #[must_use]
    pub fn report(&self) -> Option<FundingTrend> {
        let (first, last) = (self.years.first()?, self.years.last()?);
        Some(FundingTrend {
            first_year: first.year.clone(),
            last_year: last.year.clone(),
            first_total: first.total(),
            last_total: last.total(),
            growth_pct: self.growth_pct(),
            by_domain: Domain::ALL
                .into_iter()
                .map(|d| (d, self.domain_growth_pct(d)))
                .collect(),
            top_domain: self.top_domain().map(|(d, _)| d),
        })
    }
}

/// Funding growth summary, billions of USD.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FundingTrend {
    pub first_year: String,
    pub last_year: String,
    pub first_total: f64,
    pub last_total: f64,
    pub growth_pct: Option<f64>,
    pub by_domain: BTreeMap<Domain, Option<f64>>,
    pub top_domain: Option<Domain>,
}

// ---------------------------------------------------------------------------
// Topics
// ---------------------------------------------------------------------------

/// Read-only view over per-year grant counts by topic.
#[derive(Debug, Clone, Copy)]
pub struct TopicSeries<'a> {
    years: &'a [TopicYear],
}

/// Growth of one topic's grant count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopicTrend {
    pub key: String,
    pub label: String,
    pub first: u64,
    pub last: u64,
    pub growth_pct: Option<f64>,
}

impl<'a> TopicSeries<'a> {
    #[must_use]
    pub const fn new(years: &'a [TopicYear]) -> Self {
        Self { years }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn topic_growth_pct(&self, topic: &str) -> Option<f64> {
        let (first, last) = (self.years.first()?, self.years.last()?);
        growth_pct(first.get(topic) as f64, last.get(topic) as f64)
    }

    /// Per-topic growth for every topic seen in any year, fastest growing
    /// first. Topics without a defined growth sort last, then by key.
    #[must_use]
    pub fn trends(&self) -> Vec<TopicTrend> {
        let (Some(first), Some(last)) = (self.years.first(), self.years.last()) else {
            return Vec::new();
        };

        let mut keys: Vec<&str> = self
            .years
            .iter()
            .flat_map(|y| y.by_topic.keys().map(String::as_str))
            .collect();
        keys.sort_unstable();
        keys.dedup();

        let mut rows: Vec<TopicTrend> = keys
            .into_iter()
            .map(|key| TopicTrend {
                key: key.to_string(),
                label: topic_label(key).to_string(),
                first: first.get(key),
                last: last.get(key),
                growth_pct: self.topic_growth_pct(key),
            })
            .collect();

        rows.sort_by(|a, b| match (a.growth_pct, b.growth_pct) {
            (Some(x), Some(y)) => y.total_cmp(&x).then_with(|| a.key.cmp(&b.key)),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => a.key.cmp(&b.key),
        });
        rows
    }
}
