#![forbid(unsafe_code)]

mod cmd;
mod output;

use clap::{Parser, Subcommand};
use output::OutputMode;
use std::env;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "nexus: structural analytics for research-collaboration networks",
    long_about = None
)]
struct Cli {
    /// Path to a nexus.toml config file (default: ./nexus.toml if present).
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Dataset JSON to analyze instead of the built-in reference network.
    #[arg(long, global = true, value_name = "PATH")]
    dataset: Option<PathBuf>,

    /// Output format: pretty, text, or json.
    #[arg(long, global = true, value_enum)]
    format: Option<OutputMode>,

    /// Shorthand for `--format json`.
    #[arg(long, global = true, hide = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    fn output_mode(&self) -> OutputMode {
        output::resolve_output_mode(self.format, self.json)
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        about = "Show headline network figures",
        long_about = "Institution and collaboration counts, total funding, density, component count, and the PageRank and betweenness leaders.",
        after_help = "EXAMPLES:\n    # Summarize the reference network\n    nexus summary\n\n    # Summarize your own dataset as JSON\n    nexus --dataset data/network.json summary --format json"
    )]
    Summary(cmd::summary::SummaryArgs),

    #[command(
        about = "Rank institutions by a centrality metric",
        long_about = "Compute degree, betweenness, PageRank, and interdisciplinary diversity for every institution and sort by one of them.",
        after_help = "EXAMPLES:\n    # Top 10 brokers\n    nexus rank --by betweenness --limit 10\n\n    # Full PageRank table as tab-separated text\n    nexus rank --format text"
    )]
    Rank(cmd::rank::RankArgs),

    #[command(
        about = "Remove one institution and recompute all metrics",
        long_about = "Simulate the loss of an institution: edges lost, component changes, density, and the new PageRank leaders.",
        after_help = "EXAMPLES:\n    # Remove Harvard by id\n    nexus simulate --remove 3\n\n    # Remove by name\n    nexus simulate --remove \"UT Austin\""
    )]
    Simulate(cmd::simulate::SimulateArgs),

    #[command(
        about = "Rank institutions by removal damage",
        long_about = "Simulate removing every institution in turn and list them most damaging first.",
        after_help = "EXAMPLES:\n    # Five most critical institutions\n    nexus impact --limit 5"
    )]
    Impact(cmd::impact::ImpactArgs),

    #[command(
        about = "List connected components",
        after_help = "EXAMPLES:\n    nexus components --format json"
    )]
    Components(cmd::components::ComponentsArgs),

    #[command(
        about = "Analyze one research domain's sub-network",
        long_about = "Restrict the network to a single domain (intra-domain collaborations only) and compute its metrics.",
        after_help = "EXAMPLES:\n    nexus domain CS\n    nexus domain bio --by degree"
    )]
    Domain(cmd::domain::DomainArgs),

    #[command(
        about = "Show funding and research-topic growth",
        after_help = "EXAMPLES:\n    nexus trends\n    nexus trends --format json"
    )]
    Trends(cmd::trends::TrendsArgs),
}

/// Initialize tracing subscriber with env-based filtering.
///
/// `NEXUS_LOG` takes an `EnvFilter` directive; `NEXUS_LOG_FORMAT=json`
/// switches to structured output. Logs go to stderr so stdout stays
/// parseable.
fn init_tracing() {
    let filter = EnvFilter::try_from_env("NEXUS_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if env::var("DEBUG").is_ok() {
            "nexus=debug,info"
        } else {
            "nexus=info,warn"
        })
    });

    let format = env::var("NEXUS_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            let layer = fmt::layer().json().with_ansi(false);
            registry.with(layer.with_writer(std::io::stderr)).init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let output = cli.output_mode();
    let cwd = env::current_dir()?;
    let ctx = cmd::load_context(cli.config.as_deref(), cli.dataset.as_deref(), &cwd)?;

    info!(command = ?cli.command, "running");

    match cli.command {
        Commands::Summary(ref args) => cmd::summary::run_summary(args, output, &ctx),
        Commands::Rank(ref args) => cmd::rank::run_rank(args, output, &ctx),
        Commands::Simulate(ref args) => cmd::simulate::run_simulate(args, output, &ctx),
        Commands::Impact(ref args) => cmd::impact::run_impact(args, output, &ctx),
        Commands::Components(ref args) => cmd::components::run_components(args, output, &ctx),
        Commands::Domain(ref args) => cmd::domain::run_domain(args, output, &ctx),
        Commands::Trends(ref args) => cmd::trends::run_trends(args, output, &ctx),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nexus_analytics::metrics::RankKey;
    use nexus_core::Domain;
    use std::path::Path;

    #[test]
    fn format_flag_parses_after_subcommand() {
        let cli = Cli::parse_from(["nexus", "summary", "--format", "json"]);
        assert_eq!(cli.format, Some(OutputMode::Json));
        assert!(cli.output_mode().is_json());
    }

    #[test]
    fn json_shorthand_sets_output_mode() {
        let cli = Cli::parse_from(["nexus", "--json", "rank"]);
        assert!(cli.output_mode().is_json());
    }

    #[test]
    fn rank_defaults_to_pagerank() {
        let cli = Cli::parse_from(["nexus", "rank"]);
        match cli.command {
            Commands::Rank(args) => {
                assert_eq!(args.by, RankKey::Pagerank);
                assert!(args.limit.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn rank_accepts_metric_and_limit() {
        let cli = Cli::parse_from(["nexus", "rank", "--by", "betweenness", "--limit", "3"]);
        match cli.command {
            Commands::Rank(args) => {
                assert_eq!(args.by, RankKey::Betweenness);
                assert_eq!(args.limit, Some(3));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn rank_rejects_unknown_metric() {
        assert!(Cli::try_parse_from(["nexus", "rank", "--by", "closeness"]).is_err());
    }

    #[test]
    fn simulate_takes_name_or_id() {
        let cli = Cli::parse_from(["nexus", "simulate", "--remove", "Harvard"]);
        assert!(matches!(
            cli.command,
            Commands::Simulate(ref args) if args.remove.as_deref() == Some("Harvard")
        ));
    }

    #[test]
    fn domain_is_case_insensitive() {
        let cli = Cli::parse_from(["nexus", "domain", "bio"]);
        assert!(matches!(
            cli.command,
            Commands::Domain(ref args) if args.domain == Domain::Bio
        ));
    }

    #[test]
    fn global_paths_parse_anywhere() {
        let cli = Cli::parse_from([
            "nexus",
            "trends",
            "--dataset",
            "net.json",
            "--config",
            "cfg/nexus.toml",
        ]);
        assert_eq!(cli.dataset.as_deref(), Some(Path::new("net.json")));
        assert_eq!(cli.config.as_deref(), Some(Path::new("cfg/nexus.toml")));
    }
}
