//! `nexus summary`: headline figures for the loaded network.

use std::io::Write;

use clap::Args;
use nexus_analytics::metrics::{CentralityRow, RankKey, centrality_table};
use nexus_analytics::structure::{connected_components, density};
use nexus_analytics::summary::NetworkSummary;
use serde::Serialize;

use super::Context;
use crate::output::{OutputMode, money_millions, pretty_kv, pretty_section, render_mode};

/// Arguments for `nexus summary`.
#[derive(Args, Debug, Default)]
pub struct SummaryArgs {}

/// Report payload for `nexus summary`.
#[derive(Debug, Serialize)]
pub struct SummaryReport {
    pub source: String,
    #[serde(flatten)]
    pub summary: NetworkSummary,
    pub density: f64,
    pub components: usize,
    pub skipped_edges: usize,
    pub top_pagerank: Option<CentralityRow>,
    pub top_betweenness: Option<CentralityRow>,
}

/// Execute `nexus summary`.
pub fn run_summary(_args: &SummaryArgs, output: OutputMode, ctx: &Context) -> anyhow::Result<()> {
    let network = &ctx.dataset.network;
    let adj = network.adjacency();
    let table = centrality_table(network, &adj, &ctx.pagerank);

    let report = SummaryReport {
        source: ctx
            .source
            .as_ref()
            .map_or_else(|| "reference".to_string(), |p| p.display().to_string()),
        summary: NetworkSummary::from_network(network),
        density: density(adj.node_count(), adj.edge_count()),
        components: connected_components(&adj).count,
        skipped_edges: adj.skipped_edges(),
        top_pagerank: table.top(RankKey::Pagerank).cloned(),
        top_betweenness: table.top(RankKey::Betweenness).cloned(),
    };

    render_mode(output, &report, render_summary_text, render_summary_pretty)
}

fn render_summary_text(report: &SummaryReport, w: &mut dyn Write) -> std::io::Result<()> {
    let s = &report.summary;
    writeln!(w, "institutions\t{}", s.institutions)?;
    writeln!(w, "collaborations\t{}", s.collaborations)?;
    writeln!(w, "total_funding\t{:.1}", s.total_funding)?;
    writeln!(w, "density\t{:.4}", report.density)?;
    writeln!(w, "components\t{}", report.components)?;
    if let Some(top) = &s.top_funded {
        writeln!(w, "top_funded\t{}\t{:.1}", top.name, top.funding)?;
    }
    if let Some(row) = &report.top_pagerank {
        writeln!(w, "top_pagerank\t{}\t{:.4}", row.name, row.pagerank)?;
    }
    if let Some(row) = &report.top_betweenness {
        writeln!(w, "top_betweenness\t{}\t{:.4}", row.name, row.betweenness)?;
    }
    Ok(())
}

fn render_summary_pretty(report: &SummaryReport, w: &mut dyn Write) -> std::io::Result<()> {
    let s = &report.summary;
    pretty_section(w, "Collaboration network")?;
    pretty_kv(w, "Source", &report.source)?;
    pretty_kv(w, "Institutions", s.institutions.to_string())?;
    pretty_kv(w, "Collaborations", s.collaborations.to_string())?;
    pretty_kv(w, "Total funding", money_millions(s.total_funding))?;
    if let Some(top) = &s.top_funded {
        pretty_kv(
            w,
            "Top funded",
            format!("{} ({})", top.name, money_millions(top.funding)),
        )?;
    }
    pretty_kv(w, "Density", format!("{:.4}", report.density))?;
    pretty_kv(w, "Components", report.components.to_string())?;
    if report.skipped_edges > 0 {
        pretty_kv(w, "Skipped edges", report.skipped_edges.to_string())?;
    }

    writeln!(w)?;
    pretty_section(w, "Leaders")?;
    if let Some(row) = &report.top_pagerank {
        pretty_kv(w, "PageRank", format!("{} ({:.4})", row.name, row.pagerank))?;
    }
    if let Some(row) = &report.top_betweenness {
        let leader = format!("{} ({:.4})", row.name, row.betweenness);
        pretty_kv(w, "Betweenness", leader)?;
    }

    writeln!(w)?;
    pretty_section(w, "Institutions by domain")?;
    for (domain, count) in &s.by_domain {
        pretty_kv(w, domain.label(), count.to_string())?;
    }
    Ok(())
}
