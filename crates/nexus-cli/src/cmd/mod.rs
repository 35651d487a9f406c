pub mod components;
pub mod domain;
pub mod impact;
pub mod rank;
pub mod simulate;
pub mod summary;
pub mod trends;

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use nexus_analytics::PageRankConfig;
use nexus_core::config::{CONFIG_FILE_NAME, NexusConfig};
use nexus_core::{Dataset, Network, Node, NodeId};
use tracing::{debug, info};

/// Everything a command needs: the loaded dataset and the metric settings.
#[derive(Debug, Clone)]
pub struct Context {
    pub dataset: Dataset,
    pub pagerank: PageRankConfig,
    /// Where the dataset came from, for display. `None` for the built-in one.
    pub source: Option<PathBuf>,
}

/// Load config and dataset.
///
/// An explicit `--config` must exist; otherwise `nexus.toml` in the working
/// directory is read when present. `--dataset` overrides `[dataset] path`,
/// and with neither the reference dataset is used.
pub fn load_context(
    config_flag: Option<&Path>,
    dataset_flag: Option<&Path>,
    cwd: &Path,
) -> anyhow::Result<Context> {
    let config = match config_flag {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("config file not found: {}", path.display());
            }
            NexusConfig::load(path)?
        }
        None => NexusConfig::load(&cwd.join(CONFIG_FILE_NAME))?,
    };
    debug!(?config, "configuration resolved");

    let source = dataset_flag
        .map(Path::to_path_buf)
        .or_else(|| config.dataset.path.clone());
    let dataset = Dataset::load_or_reference(source.as_deref())
        .context("failed to load dataset")?;

    let label = source
        .as_deref()
        .map_or_else(|| "reference".into(), |p| p.display().to_string());
    info!(
        source = %label,
        nodes = dataset.network.node_count(),
        "dataset ready"
    );

    Ok(Context {
        dataset,
        pagerank: PageRankConfig::from(&config.pagerank),
        source,
    })
}

/// Look a node up by numeric id or case-insensitive name.
pub fn find_node<'a>(network: &'a Network, query: &str) -> Option<&'a Node> {
    query
        .trim()
        .parse::<NodeId>()
        .ok()
        .and_then(|id| network.node(id))
        .or_else(|| network.find_by_name(query.trim()))
}

/// Display name for a node id, falling back to `#id`.
pub fn node_name(network: &Network, id: NodeId) -> String {
    network
        .node(id)
        .map_or_else(|| format!("#{id}"), |n| n.name.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn find_node_by_id_or_name() {
        let ds = Dataset::reference();
        let by_id = find_node(&ds.network, "3").map(|n| n.name.as_str());
        assert_eq!(by_id, Some("Harvard"));
        assert_eq!(find_node(&ds.network, "harvard").map(|n| n.id), Some(3));
        assert_eq!(find_node(&ds.network, " UT Dallas ").map(|n| n.id), Some(24));
        assert!(find_node(&ds.network, "99").is_none());
        assert!(find_node(&ds.network, "Oxford").is_none());
    }

    #[test]
    fn node_name_falls_back_to_id() {
        let ds = Dataset::reference();
        assert_eq!(node_name(&ds.network, 0), "MIT");
        assert_eq!(node_name(&ds.network, 404), "#404");
    }

    #[test]
    fn context_defaults_to_reference() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = load_context(None, None, dir.path()).unwrap();
        assert_eq!(ctx.dataset.network.node_count(), 25);
        assert!(ctx.source.is_none());
        assert_eq!(ctx.pagerank, PageRankConfig::default());
    }

    #[test]
    fn context_reads_config_in_cwd() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "[pagerank]\ndamping = 0.5\niterations = 10\n",
        )
        .unwrap();
        let ctx = load_context(None, None, dir.path()).unwrap();
        assert!((ctx.pagerank.damping - 0.5).abs() < f64::EPSILON);
        assert_eq!(ctx.pagerank.iterations, 10);
    }

    #[test]
    fn explicit_missing_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(load_context(Some(&missing), None, dir.path()).is_err());
    }
}
