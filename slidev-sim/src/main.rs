//! # slidev-sim
//!
//! Replays a script of slider calls and pointer gestures against an
//! in-memory strip on a virtual clock and prints the resulting states as
//! JSON lines.

mod runner;
mod script;

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use slidev_config::{ConfigLoad, ConfigLoader};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::runner::Simulation;

/// CLI entry point
#[derive(Parser, Debug)]
#[command(name = "slidev-sim")]
#[command(about = "Replay scripted slider calls and gestures on a virtual clock")]
struct Cli {
    /// Slider configuration file (TOML or JSON); falls back to
    /// SLIDEV_CONFIG_PATH, SLIDEV_CONFIG_JSON and slidev.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Script to replay, `-` for stdin
    #[arg(short, long, default_value = "-")]
    script: String,

    /// Number of panels in the strip
    #[arg(short, long, default_value_t = 10)]
    panels: usize,

    /// Viewport width in pixels
    #[arg(long, default_value_t = 300.0)]
    container_width: f32,

    /// Simulated frame length in milliseconds
    #[arg(long, default_value_t = 16)]
    frame_ms: u64,

    /// Pretty-print each snapshot instead of one JSON object per line
    #[arg(long, default_value_t = false)]
    pretty: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    let ConfigLoad {
        config,
        source,
        warnings,
    } = loader.load().context("failed to load configuration")?;

    for warning in &warnings.items {
        match &warning.hint {
            Some(hint) => {
                warn!(message = %warning.message, hint = %hint, "configuration warning")
            }
            None => warn!(message = %warning.message, "configuration warning"),
        }
    }
    info!(%source, panels = cli.panels, "starting simulation");

    let source_text = read_script(&cli.script)?;
    let script = script::parse(&source_text).context("invalid script")?;

    let mut simulation = Simulation::new(
        config,
        cli.panels,
        cli.container_width,
        Duration::from_millis(cli.frame_ms),
    )?;
    let snapshots = simulation.run(&script)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for snapshot in &snapshots {
        let line = if cli.pretty {
            serde_json::to_string_pretty(snapshot)?
        } else {
            serde_json::to_string(snapshot)?
        };
        writeln!(out, "{line}")?;
    }
    Ok(())
}

fn read_script(path: &str) -> anyhow::Result<String> {
    if path == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read script from stdin")?;
        return Ok(buf);
    }
    fs::read_to_string(path).with_context(|| format!("failed to read script {path}"))
}
