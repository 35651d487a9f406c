use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "nexus.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NexusConfig {
    #[serde(default)]
    pub pagerank: PageRankSection,
    #[serde(default)]
    pub dataset: DatasetSection,
}

/// How PageRank treats nodes without neighbors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DanglingPolicy {
    /// Rank held by an isolated node is dropped each iteration.
    #[default]
    Evaporate,
    /// Rank held by an isolated node is spread uniformly over all nodes.
    Redistribute,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageRankSection {
    #[serde(default = "default_damping")]
    pub damping: f64,
    #[serde(default = "default_iterations")]
    pub iterations: usize,
    #[serde(default)]
    pub dangling: DanglingPolicy,
}

impl Default for PageRankSection {
    fn default() -> Self {
        Self {
            damping: default_damping(),
            iterations: default_iterations(),
            dangling: DanglingPolicy::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetSection {
    /// JSON dataset to analyze instead of the built-in reference network.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

const fn default_damping() -> f64 {
    0.85
}

const fn default_iterations() -> usize {
    30
}

impl PageRankSection {
    /// # Errors
    ///
    /// Returns [`ConfigError`] if damping is outside (0, 1) or iterations is 0.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.damping > 0.0 && self.damping < 1.0) {
            return Err(ConfigError::InvalidDamping(self.damping));
        }
        if self.iterations == 0 {
            return Err(ConfigError::InvalidIterations(self.iterations));
        }
        Ok(())
    }
}

impl NexusConfig {
    /// Parse and validate TOML config text.
    ///
    /// # Errors
    ///
    /// Returns an error on malformed TOML or out-of-range values.
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).context("parse nexus config")?;
        config.pagerank.validate()?;
        Ok(config)
    }

    /// Load config from `path`. A missing file yields defaults.
    ///
    /// Relative `dataset.path` values are resolved against the config
    /// file's directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text =
            fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
        let mut config =
            Self::from_toml(&text).with_context(|| format!("load config {}", path.display()))?;

        if let (Some(dataset), Some(base)) = (config.dataset.path.as_mut(), path.parent()) {
            if dataset.is_relative() {
                *dataset = base.join(&*dataset);
            }
        }
        Ok(config)
    }
}
