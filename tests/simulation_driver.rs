use std::io::Write;
use sugarscape_core::config::AppConfig;
use sugarscape_core::DistributionSpec;
use sugarscape_lib::app::load_config;
use sugarscape_lib::{RunOptions, ShutdownManager, Simulation, StopReason};

fn small_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.world.width = 16;
    config.world.height = 16;
    config.world.agent_count = 25;
    config.histogram.interval = 5;
    config.seed = Some(99);
    // Enough reserves that nobody starves within the tests below.
    config.agents.metabolism = DistributionSpec::constant(1);
    config.agents.initial_sugar = DistributionSpec::constant(30);
    config
}

#[tokio::test]
async fn test_run_stops_at_tick_limit() {
    let mut sim = Simulation::new(small_config()).unwrap();
    let shutdown = ShutdownManager::new();
    let mut samples = Vec::new();

    let options = RunOptions {
        max_ticks: Some(20),
        paced: false,
    };
    let reason = sim
        .run(options, &shutdown, |s| samples.push(s.world.tick))
        .await
        .unwrap();

    assert_eq!(reason, StopReason::TickLimit);
    assert_eq!(sim.world.tick, 20);
    assert_eq!(samples, vec![0, 5, 10, 15, 20]);
    assert_eq!(sim.metrics.tick_count(), 20);
}

#[tokio::test]
async fn test_run_stops_on_extinction() {
    let mut config = small_config();
    config.world.max_sugar_per_cell = 0;
    config.agents.initial_sugar = DistributionSpec::constant(0);
    config.agents.metabolism = DistributionSpec::constant(1);
    let mut sim = Simulation::new(config).unwrap();

    let reason = sim
        .run(RunOptions::default(), &ShutdownManager::new(), |_| {})
        .await
        .unwrap();
    assert_eq!(reason, StopReason::Extinction);
    assert_eq!(sim.world.tick, 1);
}

#[tokio::test]
async fn test_run_honours_shutdown() {
    let mut sim = Simulation::new(small_config()).unwrap();
    let shutdown = ShutdownManager::new();
    let trigger = shutdown.clone();

    let reason = sim
        .run(RunOptions::default(), &shutdown, move |s| {
            if s.world.tick >= 10 {
                trigger.request_shutdown();
            }
        })
        .await
        .unwrap();
    assert_eq!(reason, StopReason::Shutdown);
    assert_eq!(sim.world.tick, 10);
}

#[tokio::test]
async fn test_paced_run_completes() {
    let mut config = small_config();
    config.ticks_per_second = 200;
    let mut sim = Simulation::new(config).unwrap();
    let options = RunOptions {
        max_ticks: Some(5),
        paced: true,
    };
    let reason = sim
        .run(options, &ShutdownManager::new(), |_| {})
        .await
        .unwrap();
    assert_eq!(reason, StopReason::TickLimit);
    assert_eq!(sim.world.tick, 5);
}

#[test]
fn test_load_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
ticks_per_second = 30
seed = 7

[world]
width = 20
height = 10
agent_count = 15
max_sugar_per_cell = 3
growback_rate = 1
respawn = true
conflict_policy = "uniform"

[agents.vision]
kind = "discrete"
items = [{{ value = 2, weight = 1.0 }}, {{ value = 4, weight = 3.0 }}]

[agents.metabolism]
kind = "normal"
mean = 2.0
sd = 0.5
min = 1
max = 3

[agents.initial_sugar]
kind = "uniform"
min = 5
max = 25

[histogram]
auto_bins = false
bin_count = 8
"#
    )
    .unwrap();

    let config = load_config(file.path()).unwrap();
    assert_eq!(config.world.width, 20);
    assert_eq!(config.seed, Some(7));
    assert_eq!(config.histogram.interval, 10);
    assert!(config.world.respawn);

    let sim = Simulation::new(config).unwrap();
    assert_eq!(sim.world.agents.len(), 15);
    assert!(sim.world.agents.iter().all(|a| a.vision == 2 || a.vision == 4));
}

#[test]
fn test_load_config_rejects_missing_fields() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "ticks_per_second = 10\n[world]\nwidth = 5\n").unwrap();
    assert!(load_config(file.path()).is_err());
    assert!(load_config("/nonexistent/sugarscape.toml").is_err());
}
