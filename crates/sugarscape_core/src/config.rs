//! Configuration management for simulation parameters.
//!
//! This module provides strongly-typed configuration structures that map to
//! the `config.toml` file. Every field the engine reads must be present in
//! the file; only the optional extras (`seed`, policies, histogram cadence)
//! fall back to defaults when omitted.
//!
//! ## Example `config.toml`
//!
//! ```toml
//! ticks_per_second = 10
//! seed = 42
//!
//! [world]
//! width = 50
//! height = 50
//! agent_count = 400
//! max_sugar_per_cell = 4
//! growback_rate = 1
//! respawn = false
//!
//! [agents.vision]
//! kind = "uniform"
//! min = 1
//! max = 6
//!
//! [agents.metabolism]
//! kind = "uniform"
//! min = 1
//! max = 4
//!
//! [agents.initial_sugar]
//! kind = "uniform"
//! min = 5
//! max = 25
//!
//! [histogram]
//! auto_bins = true
//! bin_count = 10
//! ```

use serde::{Deserialize, Serialize};
use sugarscape_data::DistributionSpec;

/// How contested destination cells are awarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ConflictPolicy {
    /// Agents claim in population order; each later claimant takes the cell
    /// from the current holder on a fair coin flip. Early claimants keep the
    /// cell more often than late ones.
    #[default]
    CoinFlip,
    /// All claimants of a cell are gathered first and one is drawn uniformly.
    Uniform,
}

/// Where ids of respawned agents start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RespawnIdPolicy {
    /// Newborns continue the world's global id sequence.
    #[default]
    Continue,
    /// Every newborn batch restarts at id 0, which can duplicate ids held by
    /// survivors.
    Restart,
}

/// World shape and resource dynamics.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WorldConfig {
    pub width: u16,
    pub height: u16,
    /// Initial population, and the respawn target when `respawn` is set.
    pub agent_count: usize,
    pub max_sugar_per_cell: u32,
    pub growback_rate: u32,
    pub respawn: bool,
    #[serde(default)]
    pub respawn_ids: RespawnIdPolicy,
    #[serde(default)]
    pub conflict_policy: ConflictPolicy,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 50,
            height: 50,
            agent_count: 400,
            max_sugar_per_cell: 4,
            growback_rate: 1,
            respawn: false,
            respawn_ids: RespawnIdPolicy::Continue,
            conflict_policy: ConflictPolicy::CoinFlip,
        }
    }
}

/// Distributions new agents draw their attributes from.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AgentConfig {
    pub vision: DistributionSpec,
    pub metabolism: DistributionSpec,
    pub initial_sugar: DistributionSpec,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            vision: DistributionSpec::Uniform { min: 1, max: 6 },
            metabolism: DistributionSpec::Uniform { min: 1, max: 4 },
            initial_sugar: DistributionSpec::Uniform { min: 5, max: 25 },
        }
    }
}

fn default_histogram_interval() -> u64 {
    10
}

/// Wealth histogram settings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HistogramConfig {
    pub auto_bins: bool,
    /// Used when `auto_bins` is off; clamped to `1..=50` when binning.
    pub bin_count: u32,
    /// Ticks between histogram rebuilds.
    #[serde(default = "default_histogram_interval")]
    pub interval: u64,
}

impl Default for HistogramConfig {
    fn default() -> Self {
        Self {
            auto_bins: true,
            bin_count: 10,
            interval: default_histogram_interval(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub world: WorldConfig,
    pub agents: AgentConfig,
    pub histogram: HistogramConfig,
    pub ticks_per_second: u32,
    /// Fixed seed for reproducible runs; entropy when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            world: WorldConfig::default(),
            agents: AgentConfig::default(),
            histogram: HistogramConfig::default(),
            ticks_per_second: 10,
            seed: None,
        }
    }
}

fn validate_distribution(name: &str, spec: &DistributionSpec) -> anyhow::Result<()> {
    match spec {
        DistributionSpec::Uniform { .. } => {}
        DistributionSpec::Normal { mean, sd, .. } => {
            anyhow::ensure!(mean.is_finite(), "{name}: normal mean must be finite");
            anyhow::ensure!(
                sd.is_finite() && *sd >= 0.0,
                "{name}: normal sd must be finite and non-negative"
            );
        }
        DistributionSpec::Discrete { items } => {
            anyhow::ensure!(
                items.iter().all(|item| item.weight.is_finite()),
                "{name}: discrete weights must be finite"
            );
        }
    }
    Ok(())
}

impl AppConfig {
    /// Validates all configuration parameters.
    ///
    /// Returns `Ok(())` if all parameters are valid, or `Err` with a description
    /// of the first validation failure.
    ///
    /// # Validation Rules
    /// - World dimensions must be positive and reasonable (<= 1000)
    /// - Population must be within sensible bounds
    /// - Vision draws must be at least 1, metabolism draws non-negative
    /// - Tick rate and histogram cadence must be positive
    pub fn validate(&self) -> anyhow::Result<()> {
        // World validation
        anyhow::ensure!(self.world.width > 0, "World width must be positive");
        anyhow::ensure!(self.world.width <= 1000, "World width too large (max 1000)");
        anyhow::ensure!(self.world.height > 0, "World height must be positive");
        anyhow::ensure!(
            self.world.height <= 1000,
            "World height too large (max 1000)"
        );
        anyhow::ensure!(
            self.world.agent_count <= 100_000,
            "Agent count too large (max 100000)"
        );

        // Agent validation
        validate_distribution("vision", &self.agents.vision)?;
        validate_distribution("metabolism", &self.agents.metabolism)?;
        validate_distribution("initial_sugar", &self.agents.initial_sugar)?;
        anyhow::ensure!(
            self.agents.vision.lower_bound() >= 1,
            "Vision distribution must not produce values below 1"
        );
        anyhow::ensure!(
            self.agents.metabolism.lower_bound() >= 0,
            "Metabolism distribution must not produce negative values"
        );

        // Histogram validation
        anyhow::ensure!(
            self.histogram.interval > 0,
            "Histogram interval must be positive"
        );

        // Tick rate validation
        anyhow::ensure!(
            self.ticks_per_second > 0,
            "Ticks per second must be positive"
        );
        anyhow::ensure!(
            self.ticks_per_second <= 240,
            "Ticks per second too high (max 240)"
        );

        Ok(())
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Whether switching from `self` to `other` changes the world's shape
    /// (grid dimensions, population target or landscape ceiling) and so
    /// needs a fresh world rather than a live update.
    #[must_use]
    pub fn requires_reset(&self, other: &AppConfig) -> bool {
        self.world.width != other.world.width
            || self.world.height != other.world.height
            || self.world.agent_count != other.world.agent_count
            || self.world.max_sugar_per_cell != other.world.max_sugar_per_cell
    }

    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(format!("{:?}", self.world).as_bytes());
        hasher.update(format!("{:?}", self.agents).as_bytes());
        hasher.update(format!("{:?}", self.histogram).as_bytes());
        hex::encode(hasher.finalize())
    }
}
