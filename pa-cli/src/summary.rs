//! Text and JSON rendering of a [`RunReport`].

use std::io::{self, Write};

use pa_core::{DegreeTier, RunReport};

/// Writes a human-readable summary of `report`.
///
/// Lists the network size, the final hub, the attachment sequence, the
/// degree histogram, the per-tier node counts and the log-log fit.
pub fn write_text(report: &RunReport, out: &mut impl Write) -> io::Result<()> {
    writeln!(
        out,
        "Scale-free network: {} nodes, {} edges (seed {})",
        report.node_count, report.edge_count, report.config.seed
    )?;

    match report.final_max_degree() {
        Some(m) => writeln!(out, "Max degree: {} (node {})", m.degree, m.node)?,
        None => writeln!(out, "Max degree: n/a")?,
    }

    if !report.attachments.is_empty() {
        let steps: Vec<String> = report
            .attachments
            .iter()
            .map(|a| format!("{}->{}", a.node, a.target))
            .collect();
        writeln!(out, "Attachments: {}", steps.join(" "))?;
    }

    writeln!(out, "Degree histogram:")?;
    for (degree, count) in report.histogram.iter() {
        writeln!(out, "  {degree:>3}: {count}")?;
    }

    writeln!(out, "Tiers:")?;
    for tier in DegreeTier::ALL {
        let n = report.nodes.iter().filter(|n| n.tier == tier).count();
        if n > 0 {
            writeln!(out, "  {:<18} {n}", tier.label())?;
        }
    }

    match report.fit {
        Some(fit) => writeln!(
            out,
            "Log-log fit: ln(count) = {:.3} * ln(degree) + {:.3}",
            fit.slope, fit.intercept
        )?,
        None => writeln!(out, "Log-log fit: not enough distinct degrees")?,
    }
    Ok(())
}

/// Writes `report` as pretty-printed JSON followed by a newline.
pub fn write_json(report: &RunReport, out: &mut impl Write) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)
}
