//! `nexus simulate`: remove one institution and recompute everything.

use std::io::Write;
use std::process;

use clap::Args;
use nexus_analytics::metrics::RankKey;
use nexus_analytics::{Simulation, simulate};
use nexus_core::NodeId;
use tracing::warn;

use super::{Context, find_node, node_name};
use crate::cmd::rank::{write_table_pretty, write_table_text};
use crate::output::{CliError, OutputMode, pretty_kv, pretty_section, render_error, render_mode};

/// Arguments for `nexus simulate`.
#[derive(Args, Debug, Default)]
pub struct SimulateArgs {
    /// Institution to remove, by id or name. Omit to report the full network.
    #[arg(long, short = 'r', value_name = "ID|NAME")]
    pub remove: Option<String>,

    /// Rows of the post-removal PageRank table to show.
    #[arg(long, default_value_t = 5)]
    pub top: usize,
}

/// Execute `nexus simulate`.
pub fn run_simulate(args: &SimulateArgs, output: OutputMode, ctx: &Context) -> anyhow::Result<()> {
    let network = &ctx.dataset.network;

    let removed: Option<NodeId> = match args.remove.as_deref() {
        None => None,
        Some(query) => match find_node(network, query) {
            Some(node) => Some(node.id),
            None => {
                if let Ok(id) = query.trim().parse::<NodeId>() {
                    // Unknown ids are a no-op for the engine; say so and go on.
                    warn!(id, "node not in network, simulating without removal");
                    Some(id)
                } else {
                    render_error(
                        output,
                        &CliError::with_details(
                            format!("no institution named '{query}'"),
                            "run `nexus rank` to list institutions",
                            "unknown_node",
                        ),
                    )?;
                    process::exit(1);
                }
            }
        },
    };

    let mut sim = simulate(network, removed, &ctx.pagerank);
    sim.centrality = sim.centrality.ranked(RankKey::Pagerank, Some(args.top));

    render_mode(output, &sim, render_simulation_text, |sim, w| {
        render_simulation_pretty(sim, w, ctx)
    })
}

fn render_simulation_text(sim: &Simulation, w: &mut dyn Write) -> std::io::Result<()> {
    let removed = sim
        .removed
        .as_ref()
        .map_or_else(|| "-".to_string(), |n| n.name.clone());
    writeln!(w, "removed\t{removed}")?;
    writeln!(w, "active_nodes\t{}", sim.active_nodes)?;
    writeln!(w, "active_edges\t{}", sim.active_edges)?;
    writeln!(w, "edges_lost\t{}", sim.impact.edges_lost)?;
    writeln!(w, "components\t{}", sim.components.count)?;
    writeln!(w, "largest_component\t{}", sim.impact.largest_component)?;
    writeln!(w, "fragmented\t{}", sim.impact.fragmented)?;
    writeln!(w, "density\t{:.4}", sim.density)?;
    write_table_text(&sim.centrality, w)
}

fn render_simulation_pretty(
    sim: &Simulation,
    w: &mut dyn Write,
    ctx: &Context,
) -> std::io::Result<()> {
    let heading = sim.removed.as_ref().map_or_else(
        || "Full network (no removal)".to_string(),
        |n| format!("Without {} ({})", n.name, n.domain.label()),
    );
    pretty_section(w, &heading)?;
    pretty_kv(
        w,
        "Institutions",
        format!("{} (was {})", sim.active_nodes, sim.impact.baseline_nodes),
    )?;
    pretty_kv(
        w,
        "Collaborations",
        format!(
            "{} (was {}, lost {})",
            sim.active_edges, sim.impact.baseline_edges, sim.impact.edges_lost
        ),
    )?;
    pretty_kv(
        w,
        "Components",
        format!(
            "{} (was {})",
            sim.components.count, sim.impact.baseline_components
        ),
    )?;
    pretty_kv(
        w,
        "Largest component",
        sim.impact.largest_component.to_string(),
    )?;
    pretty_kv(w, "Density", format!("{:.4}", sim.density))?;
    pretty_kv(
        w,
        "Status",
        if sim.impact.fragmented {
            "FRAGMENTED"
        } else {
            "connected"
        },
    )?;
    if !sim.impact.newly_isolated.is_empty() {
        let names: Vec<String> = sim
            .impact
            .newly_isolated
            .iter()
            .map(|&id| node_name(&ctx.dataset.network, id))
            .collect();
        pretty_kv(w, "Newly isolated", names.join(", "))?;
    }

    writeln!(w)?;
    pretty_section(w, "PageRank after removal")?;
    write_table_pretty(&sim.centrality, w)
}
