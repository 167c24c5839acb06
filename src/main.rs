use anyhow::{Context, Result};
use clap::Parser;
use gridlife_core::init_logging;
use gridlife_lib::model::config::AppConfig;
use gridlife_lib::model::world::World;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Custom config file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Ticks to run; 0 runs until extinction. Overrides `max_ticks`.
    #[arg(short, long)]
    ticks: Option<u64>,

    /// RNG seed. Overrides `world.seed`.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Write the final world as JSON to this path
    #[arg(long)]
    snapshot: Option<PathBuf>,
}

fn load_config(path: &str) -> Result<AppConfig> {
    if !Path::new(path).exists() {
        tracing::warn!(path, "Config file not found, using defaults");
        return Ok(AppConfig::default());
    }
    let content =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read {path}"))?;
    AppConfig::from_toml(&content).with_context(|| format!("Invalid config in {path}"))
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    let mut config = load_config(&args.config)?;
    if let Some(seed) = args.seed {
        config.world.seed = Some(seed);
    }
    let max_ticks = args.ticks.unwrap_or(config.max_ticks);

    tracing::info!(
        fingerprint = %config.fingerprint(),
        seed = ?config.world.seed,
        max_ticks,
        "Starting headless run"
    );

    let mut world = World::new(config)?;
    world.run(max_ticks);
    world.metrics.log_summary();

    if let Some(path) = args.snapshot {
        world
            .snapshot()
            .write_json(&path)
            .with_context(|| format!("Failed to write snapshot to {}", path.display()))?;
        tracing::info!(path = %path.display(), "Snapshot written");
    }
    Ok(())
}
