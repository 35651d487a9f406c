//! `nexus domain`: metrics over a single research domain's sub-network.

use std::io::Write;

use clap::Args;
use nexus_analytics::metrics::{CentralityTable, RankKey, centrality_table};
use nexus_analytics::structure::{connected_components, density};
use nexus_analytics::summary::NetworkSummary;
use nexus_core::Domain;
use serde::Serialize;

use super::Context;
use crate::cmd::rank::{write_table_pretty, write_table_text};
use crate::output::{OutputMode, money_millions, pretty_kv, pretty_section, render_mode};

/// Arguments for `nexus domain`.
#[derive(Args, Debug)]
pub struct DomainArgs {
    /// Domain code: CS, BIO, PHY, ENG, or SOC.
    pub domain: Domain,

    /// Metric to sort the table by.
    #[arg(long, default_value_t = RankKey::Pagerank)]
    pub by: RankKey,
}

#[derive(Debug, Serialize)]
struct DomainReport {
    domain: Domain,
    label: &'static str,
    institutions: usize,
    collaborations: usize,
    total_funding: f64,
    density: f64,
    components: usize,
    centrality: CentralityTable,
}

/// Execute `nexus domain`.
///
/// Only collaborations with both ends inside the domain are kept, so
/// centralities are computed on the domain's own sub-network.
pub fn run_domain(args: &DomainArgs, output: OutputMode, ctx: &Context) -> anyhow::Result<()> {
    let view = ctx.dataset.network.restrict_to_domain(args.domain);
    let adj = view.adjacency();
    let summary = NetworkSummary::from_network(&view);
    let mut centrality = centrality_table(&view, &adj, &ctx.pagerank);
    centrality.sort_by(args.by);

    let report = DomainReport {
        domain: args.domain,
        label: args.domain.label(),
        institutions: summary.institutions,
        collaborations: adj.edge_count(),
        total_funding: summary.total_funding,
        density: density(adj.node_count(), adj.edge_count()),
        components: connected_components(&adj).count,
        centrality,
    };

    render_mode(output, &report, render_domain_text, render_domain_pretty)
}

fn render_domain_text(report: &DomainReport, w: &mut dyn Write) -> std::io::Result<()> {
    writeln!(
        w,
        "{}\t{}\t{}\t{:.4}\t{}",
        report.domain, report.institutions, report.collaborations, report.density, report.components
    )?;
    write_table_text(&report.centrality, w)
}

fn render_domain_pretty(report: &DomainReport, w: &mut dyn Write) -> std::io::Result<()> {
    pretty_section(w, &format!("{} ({})", report.label, report.domain))?;
    pretty_kv(w, "Institutions", report.institutions.to_string())?;
    pretty_kv(w, "Collaborations", report.collaborations.to_string())?;
    pretty_kv(w, "Total funding", money_millions(report.total_funding))?;
    pretty_kv(w, "Density", format!("{:.4}", report.density))?;
    pretty_kv(w, "Components", report.components.to_string())?;
    writeln!(w)?;
    write_table_pretty(&report.centrality, w)
}
