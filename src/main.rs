use ballsim::{build_world, ScenarioConfig};
use ballsim::{run_2d, run_headless, bench_substeps};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file inside `scenarios/`; the built-in scene is used if it is missing
    #[arg(short, default_value = "default.yaml")]
    file_name: String,

    /// Run without a window
    #[arg(long)]
    headless: bool,

    /// Ticks to run in headless mode
    #[arg(long, default_value_t = 500)]
    ticks: u64,

    /// Headless summary interval in ticks (0 disables it)
    #[arg(long, default_value_t = 50)]
    log_every: u64,

    /// Compare sub-step counts on a fixed scene and exit
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    if !config_path.exists() {
        tracing::warn!(path = %config_path.display(), "scenario not found, using built-in scene");
        return Ok(ScenarioConfig::default());
    }
    ScenarioConfig::load(&config_path)
        .with_context(|| format!("loading scenario {}", config_path.display()))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.bench {
        init_tracing();
        bench_substeps()?;
        return Ok(());
    }

    // Bevy installs its own subscriber through LogPlugin
    if args.headless {
        init_tracing();
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let mut world = build_world(&scenario_cfg).context("invalid scenario")?;

    if args.headless {
        run_headless(&mut world, args.ticks, args.log_every);
    } else {
        run_2d(world);
    }

    Ok(())
}
