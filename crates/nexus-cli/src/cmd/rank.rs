//! `nexus rank`: institutions ordered by a centrality metric.

use std::io::Write;

use clap::Args;
use nexus_analytics::metrics::{CentralityTable, RankKey, centrality_table};
use serde::Serialize;

use super::Context;
use crate::output::{OutputMode, pretty_rule, pretty_section, render_mode};

/// Arguments for `nexus rank`.
#[derive(Args, Debug)]
pub struct RankArgs {
    /// Metric to sort by: degree, betweenness, pagerank, or diversity.
    #[arg(long, default_value_t = RankKey::Pagerank)]
    pub by: RankKey,

    /// Show only the first N rows.
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
struct RankReport {
    by: RankKey,
    rows: CentralityTable,
}

/// Execute `nexus rank`.
pub fn run_rank(args: &RankArgs, output: OutputMode, ctx: &Context) -> anyhow::Result<()> {
    let network = &ctx.dataset.network;
    let adj = network.adjacency();
    let table = centrality_table(network, &adj, &ctx.pagerank);

    let report = RankReport {
        by: args.by,
        rows: table.ranked(args.by, args.limit),
    };

    render_mode(output, &report, render_rank_text, render_rank_pretty)
}

/// Column header shared by the rank table renderers.
pub const RANK_HEADERS: [&str; 8] = [
    "rank",
    "id",
    "name",
    "domain",
    "degree",
    "betweenness",
    "pagerank",
    "diversity",
];

fn render_rank_text(report: &RankReport, w: &mut dyn Write) -> std::io::Result<()> {
    writeln!(w, "{}", RANK_HEADERS.join("\t"))?;
    write_table_text(&report.rows, w)
}

/// Tab-separated centrality rows, one per line, in table order.
pub fn write_table_text(table: &CentralityTable, w: &mut dyn Write) -> std::io::Result<()> {
    for (i, row) in table.rows.iter().enumerate() {
        writeln!(
            w,
            "{}\t{}\t{}\t{}\t{}\t{:.4}\t{:.4}\t{:.4}",
            i + 1,
            row.id,
            row.name,
            row.domain,
            row.degree,
            row.betweenness,
            row.pagerank,
            row.diversity
        )?;
    }
    Ok(())
}

fn render_rank_pretty(report: &RankReport, w: &mut dyn Write) -> std::io::Result<()> {
    pretty_section(w, &format!("Institutions by {}", report.by))?;
    write_table_pretty(&report.rows, w)
}

/// Aligned centrality table for human output.
pub fn write_table_pretty(table: &CentralityTable, w: &mut dyn Write) -> std::io::Result<()> {
    if table.is_empty() {
        return writeln!(w, "(no institutions)");
    }
    writeln!(
        w,
        "{:>4}  {:<16} {:<4} {:>6} {:>11} {:>9} {:>9}",
        "#", "Institution", "Dom", "Degree", "Betweenness", "PageRank", "Diversity"
    )?;
    pretty_rule(w)?;
    for (i, row) in table.rows.iter().enumerate() {
        writeln!(
            w,
            "{:>4}  {:<16} {:<4} {:>6} {:>11.4} {:>9.4} {:>9.3}",
            i + 1,
            row.name,
            row.domain.as_str(),
            row.degree,
            row.betweenness,
            row.pagerank,
            row.diversity
        )?;
    }
    Ok(())
}
