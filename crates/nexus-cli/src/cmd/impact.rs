//! `nexus impact`: rank institutions by the damage their removal causes.

use std::io::Write;

use clap::Args;
use nexus_analytics::{ImpactRow, impact_sweep};
use serde::Serialize;

use super::{Context, node_name};
use crate::output::{OutputMode, pretty_rule, pretty_section, render_mode};

/// Arguments for `nexus impact`.
#[derive(Args, Debug, Default)]
pub struct ImpactArgs {
    /// Show only the N most damaging removals.
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,
}

/// Serialized as a bare JSON array.
#[derive(Debug, Serialize)]
#[serde(transparent)]
struct ImpactReport {
    rows: Vec<ImpactRow>,
}

/// Execute `nexus impact`.
pub fn run_impact(args: &ImpactArgs, output: OutputMode, ctx: &Context) -> anyhow::Result<()> {
    let mut rows = impact_sweep(&ctx.dataset.network, &ctx.pagerank);
    if let Some(limit) = args.limit {
        rows.truncate(limit);
    }

    render_mode(output, &ImpactReport { rows }, render_impact_text, |report, w| {
        render_impact_pretty(report, w, ctx)
    })
}

fn render_impact_text(report: &ImpactReport, w: &mut dyn Write) -> std::io::Result<()> {
    writeln!(
        w,
        "id\tname\tdomain\tedges_lost\tcomponents_after\tlargest_component\tfragmented"
    )?;
    for row in &report.rows {
        writeln!(
            w,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}",
            row.id,
            row.name,
            row.domain,
            row.edges_lost,
            row.components_after,
            row.largest_component,
            row.fragmented
        )?;
    }
    Ok(())
}

fn render_impact_pretty(
    report: &ImpactReport,
    w: &mut dyn Write,
    ctx: &Context,
) -> std::io::Result<()> {
    pretty_section(w, "Removal impact (most damaging first)")?;
    if report.rows.is_empty() {
        return writeln!(w, "(no institutions)");
    }
    writeln!(
        w,
        "{:<16} {:<4} {:>10} {:>10} {:>8}  {}",
        "Institution", "Dom", "Edges lost", "Components", "Largest", "Stranded"
    )?;
    pretty_rule(w)?;
    for row in &report.rows {
        let stranded: Vec<String> = row
            .newly_isolated
            .iter()
            .map(|&id| node_name(&ctx.dataset.network, id))
            .collect();
        writeln!(
            w,
            "{:<16} {:<4} {:>10} {:>10} {:>8}  {}",
            row.name,
            row.domain.as_str(),
            row.edges_lost,
            row.components_after,
            row.largest_component,
            if stranded.is_empty() {
                "-".to_string()
            } else {
                stranded.join(", ")
            }
        )?;
    }
    Ok(())
}
