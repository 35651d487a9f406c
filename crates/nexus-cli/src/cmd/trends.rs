//! `nexus trends`: funding and research-topic growth over the dataset's
//! yearly series.

use std::io::Write;

use clap::Args;
use nexus_analytics::trends::{FundingSeries, FundingTrend, TopicSeries, TopicTrend};
use serde::Serialize;

use super::Context;
use crate::output::{OutputMode, percent, pretty_kv, pretty_rule, pretty_section, render_mode};

/// Arguments for `nexus trends`.
#[derive(Args, Debug, Default)]
pub struct TrendsArgs {}

#[derive(Debug, Serialize)]
struct TrendsReport {
    funding: Option<FundingTrend>,
    topics: Vec<TopicTrend>,
}

/// Execute `nexus trends`.
pub fn run_trends(_args: &TrendsArgs, output: OutputMode, ctx: &Context) -> anyhow::Result<()> {
    let report = TrendsReport {
        funding: FundingSeries::new(&ctx.dataset.funding).report(),
        topics: TopicSeries::new(&ctx.dataset.topics).trends(),
    };
    render_mode(output, &report, render_trends_text, render_trends_pretty)
}

fn fmt_pct(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v:.1}"))
}

fn render_trends_text(report: &TrendsReport, w: &mut dyn Write) -> std::io::Result<()> {
    if let Some(f) = &report.funding {
        writeln!(
            w,
            "funding\t{}\t{}\t{:.1}\t{:.1}\t{}",
            f.first_year,
            f.last_year,
            f.first_total,
            f.last_total,
            fmt_pct(f.growth_pct)
        )?;
        for (domain, growth) in &f.by_domain {
            writeln!(w, "domain\t{domain}\t{}", fmt_pct(*growth))?;
        }
    }
    for t in &report.topics {
        let growth = fmt_pct(t.growth_pct);
        writeln!(w, "topic\t{}\t{}\t{}\t{growth}", t.key, t.first, t.last)?;
    }
    Ok(())
}

fn render_trends_pretty(report: &TrendsReport, w: &mut dyn Write) -> std::io::Result<()> {
    pretty_section(w, "Funding")?;
    match &report.funding {
        None => writeln!(w, "(no funding series)")?,
        Some(f) => {
            pretty_kv(
                w,
                &format!("Total {}", f.first_year),
                format!("${:.1}B", f.first_total),
            )?;
            pretty_kv(
                w,
                &format!("Total {}", f.last_year),
                format!("${:.1}B", f.last_total),
            )?;
            pretty_kv(w, "Growth", percent(f.growth_pct))?;
            if let Some(top) = f.top_domain {
                pretty_kv(w, "Leading domain", top.label())?;
            }
            for (domain, growth) in &f.by_domain {
                pretty_kv(w, domain.label(), percent(*growth))?;
            }
        }
    }

    writeln!(w)?;
    pretty_section(w, "Research topics (grants)")?;
    if report.topics.is_empty() {
        return writeln!(w, "(no topic series)");
    }
    writeln!(w, "{:<22} {:>7} {:>7} {:>9}", "Topic", "First", "Last", "Growth")?;
    pretty_rule(w)?;
    for t in &report.topics {
        writeln!(
            w,
            "{:<22} {:>7} {:>7} {:>9}",
            t.label,
            t.first,
            t.last,
            percent(t.growth_pct)
        )?;
    }
    Ok(())
}
