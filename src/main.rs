use anyhow::Result;
use clap::Parser;
use std::path::Path;
use sugarscape_core::config::AppConfig;
use sugarscape_lib::app::{load_config, Sample};
use sugarscape_lib::{RunOptions, ShutdownManager, Simulation};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Mode to run the simulation in
    #[arg(short, long, value_enum, default_value = "headless")]
    mode: Mode,

    /// Custom config file path; built-in defaults are used if it does not exist
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Stop after this many ticks
    #[arg(short, long)]
    ticks: Option<u64>,

    /// Override the configured seed
    #[arg(short, long)]
    seed: Option<u64>,

    /// Emit one JSON object per histogram refresh instead of text
    #[arg(long)]
    json: bool,
}

#[derive(clap::ValueEnum, Clone, Debug, PartialEq, Eq)]
enum Mode {
    /// Run as fast as possible
    Headless,
    /// Hold the configured ticks-per-second rate
    Realtime,
}

fn resolve_config(args: &Args) -> Result<AppConfig> {
    let mut config = if Path::new(&args.config).exists() {
        load_config(&args.config)?
    } else {
        tracing::warn!(path = %args.config, "Config file not found, using defaults");
        AppConfig::default()
    };
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    Ok(config)
}

fn print_sample(sample: &Sample, json: bool) {
    if json {
        match serde_json::to_string(sample) {
            Ok(line) => println!("{line}"),
            Err(e) => tracing::error!("Failed to encode sample: {e}"),
        }
        return;
    }

    let stats = &sample.stats;
    println!(
        "tick {:>6}  agents {:>5}  mean wealth {:>8.2}  gini {:.3}  grid sugar {}",
        stats.tick, stats.population, stats.mean_wealth, stats.gini, stats.grid_sugar
    );
    let bars: Vec<String> = sample
        .histogram
        .iter()
        .map(|bin| format!("{}:{}", bin.label, bin.count))
        .collect();
    println!("    {}", bars.join("  "));
}

#[tokio::main]
async fn main() -> Result<()> {
    sugarscape_core::init_logging("sugarscape=info,sugarscape_lib=info,sugarscape_core=info");
    let args = Args::parse();

    let config = resolve_config(&args)?;
    let mut sim = Simulation::new(config)?;

    let shutdown = ShutdownManager::new();
    shutdown.listen_for_ctrl_c();

    let options = RunOptions {
        max_ticks: args.ticks,
        paced: args.mode == Mode::Realtime,
    };
    let json = args.json;
    let reason = sim
        .run(options, &shutdown, |sim| print_sample(&sim.sample(), json))
        .await?;

    if !json {
        println!("Stopped at tick {} ({reason:?}).", sim.world.tick);
    }
    Ok(())
}
