use anyhow::{Context, Result};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use std::path::Path;
use std::time::{Duration, Instant};

use sugarscape_core::config::AppConfig;
use sugarscape_core::world::{self, TickReport, World};
use sugarscape_core::{build_histogram, HistogramBin, Metrics, PopulationStats};

/// Loads `config.toml`-style configuration from disk and validates it.
pub fn load_config(path: impl AsRef<Path>) -> Result<AppConfig> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading config file {}", path.display()))?;
    AppConfig::from_toml(&content).with_context(|| format!("parsing {}", path.display()))
}

/// What consumers receive on each histogram refresh.
#[derive(Debug, Clone, Serialize)]
pub struct Sample {
    pub stats: PopulationStats,
    pub histogram: Vec<HistogramBin>,
}

/// Owns a running simulation: the current world, its configuration and
/// the random stream every tick draws from.
pub struct Simulation {
    pub config: AppConfig,
    pub world: World,
    pub histogram: Vec<HistogramBin>,
    pub last_report: TickReport,
    pub metrics: Metrics,
    rng: ChaCha8Rng,
}

fn seeded_rng(config: &AppConfig) -> ChaCha8Rng {
    match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}

impl Simulation {
    pub fn new(config: AppConfig) -> Result<Self> {
        config.validate()?;
        let mut rng = seeded_rng(&config);
        let world = world::initialize(&config, &mut rng);
        let histogram = build_histogram(
            &world.agents,
            config.histogram.auto_bins,
            config.histogram.bin_count,
        );
        tracing::info!(
            fingerprint = %config.fingerprint(),
            seed = ?config.seed,
            "Simulation created"
        );
        Ok(Self {
            config,
            world,
            histogram,
            last_report: TickReport::default(),
            metrics: Metrics::new(),
            rng,
        })
    }

    /// Starts over from tick 0 with the current configuration.
    ///
    /// A seeded configuration replays the same run from the beginning.
    pub fn reset(&mut self) {
        self.rng = seeded_rng(&self.config);
        self.world = world::initialize(&self.config, &mut self.rng);
        self.last_report = TickReport::default();
        self.refresh_histogram();
        self.metrics.log_event("reset", &format!("agents={}", self.world.agents.len()));
    }

    /// Replaces the configuration and rebuilds the world from scratch.
    pub fn apply_changes(&mut self, config: AppConfig) -> Result<()> {
        config.validate()?;
        self.config = config;
        self.reset();
        Ok(())
    }

    /// Swaps in parameters that do not change the world's shape (growback,
    /// respawn, attribute distributions for newborns, histogram settings,
    /// tick rate) without restarting the run.
    pub fn tune(&mut self, config: AppConfig) -> Result<()> {
        config.validate()?;
        anyhow::ensure!(
            !self.config.requires_reset(&config),
            "Changing world size, population or landscape cap requires apply_changes"
        );
        let histogram_changed = self.config.histogram != config.histogram;
        self.config = config;
        if histogram_changed {
            self.refresh_histogram();
        }
        Ok(())
    }

    /// Runs one tick. The histogram is rebuilt every
    /// `histogram.interval` ticks; returns whether that happened.
    pub fn tick(&mut self) -> Result<bool> {
        let started = Instant::now();
        let (next, report) = world::advance(&self.world, &self.config, &mut self.rng)?;
        self.world = next;
        self.last_report = report;
        self.metrics.record_tick(started.elapsed(), &report);

        let refresh = self.world.tick.is_multiple_of(self.config.histogram.interval);
        if refresh {
            self.refresh_histogram();
        }
        Ok(refresh)
    }

    pub fn refresh_histogram(&mut self) {
        self.histogram = build_histogram(
            &self.world.agents,
            self.config.histogram.auto_bins,
            self.config.histogram.bin_count,
        );
    }

    #[must_use]
    pub fn stats(&self) -> PopulationStats {
        PopulationStats::from_world(&self.world)
    }

    #[must_use]
    pub fn sample(&self) -> Sample {
        Sample {
            stats: self.stats(),
            histogram: self.histogram.clone(),
        }
    }

    /// Wall-clock spacing between ticks at the configured rate.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.config.ticks_per_second.max(1)))
    }

    /// No agents left and nothing will bring them back.
    #[must_use]
    pub fn is_extinct(&self) -> bool {
        self.world.agents.is_empty()
            && !(self.config.world.respawn && self.config.world.agent_count > 0)
    }
}
