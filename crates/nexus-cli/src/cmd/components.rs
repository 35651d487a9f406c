//! `nexus components`: connected components of the collaboration graph.

use std::io::Write;

use clap::Args;
use nexus_analytics::structure::connected_components;
use serde::Serialize;

use super::{Context, node_name};
use crate::output::{OutputMode, pretty_kv, pretty_section, render_mode};

/// Arguments for `nexus components`.
#[derive(Args, Debug, Default)]
pub struct ComponentsArgs {}

#[derive(Debug, Serialize)]
struct ComponentsReport {
    count: usize,
    largest: usize,
    connected: bool,
    components: Vec<ComponentEntry>,
}

#[derive(Debug, Serialize)]
struct ComponentEntry {
    size: usize,
    members: Vec<String>,
}

/// Execute `nexus components`.
pub fn run_components(
    _args: &ComponentsArgs,
    output: OutputMode,
    ctx: &Context,
) -> anyhow::Result<()> {
    let network = &ctx.dataset.network;
    let info = connected_components(&network.adjacency());

    let report = ComponentsReport {
        count: info.count,
        largest: info.largest,
        connected: info.is_connected(),
        components: info
            .members
            .iter()
            .map(|ids| ComponentEntry {
                size: ids.len(),
                members: ids.iter().map(|&id| node_name(network, id)).collect(),
            })
            .collect(),
    };

    render_mode(
        output,
        &report,
        render_components_text,
        render_components_pretty,
    )
}

fn render_components_text(report: &ComponentsReport, w: &mut dyn Write) -> std::io::Result<()> {
    for (i, c) in report.components.iter().enumerate() {
        writeln!(w, "{}\t{}\t{}", i + 1, c.size, c.members.join(","))?;
    }
    Ok(())
}

fn render_components_pretty(report: &ComponentsReport, w: &mut dyn Write) -> std::io::Result<()> {
    pretty_section(w, "Connected components")?;
    pretty_kv(w, "Count", report.count.to_string())?;
    pretty_kv(w, "Largest", report.largest.to_string())?;
    pretty_kv(w, "Connected", if report.connected { "yes" } else { "no" })?;
    for (i, c) in report.components.iter().enumerate() {
        writeln!(w)?;
        writeln!(w, "#{} ({} institutions)", i + 1, c.size)?;
        writeln!(w, "  {}", c.members.join(", "))?;
    }
    Ok(())
}
