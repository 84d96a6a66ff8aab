//! Headless driver for the preferential-attachment simulator.
//!
//! Parses command-line options into a [`Config`], runs one growth with
//! [`pa_core::run`] and prints the result as text or JSON. All
//! formatting lives in the `summary` module.

mod summary;

use std::io;

use anyhow::Context;
use clap::Parser;
use pa_core::Config;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "pa-cli")]
#[command(about = "Grow a scale-free network by preferential attachment", long_about = None)]
struct Cli {
    /// Seed for the random source (same seed, same network)
    #[arg(long, default_value_t = Config::default().seed)]
    seed: u64,

    /// Number of nodes to attach after the three-node seed triangle
    #[arg(long, default_value_t = Config::default().steps)]
    steps: usize,

    /// Mean distance of grown nodes from the origin in the layout
    #[arg(long, default_value_t = Config::default().ring_radius)]
    ring_radius: f32,

    /// Maximum deviation from the ring radius
    #[arg(long, default_value_t = Config::default().ring_jitter)]
    ring_jitter: f32,

    /// Print the full report as JSON
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn config(&self) -> Config {
        Config {
            seed: self.seed,
            steps: self.steps,
            ring_radius: self.ring_radius,
            ring_jitter: self.ring_jitter,
        }
    }
}

/// Runs the simulation described by the command line.
///
/// ### Returns
/// - `Ok(())` once the report has been written to stdout.
/// - `Err` if growth fails or stdout cannot be written.
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let cfg = cli.config();
    tracing::debug!(?cfg, "starting run");

    let report = pa_core::run(&cfg).context("growth run failed")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if cli.json {
        summary::write_json(&report, &mut out).context("failed to write JSON report")?;
    } else {
        summary::write_text(&report, &mut out)?;
    }
    Ok(())
}
