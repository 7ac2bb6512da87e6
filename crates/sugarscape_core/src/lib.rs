//! # Sugarscape Core
//!
//! The per-tick simulation engine for a Sugarscape-style model: agents with
//! limited vision compete for sugar on a toroidal grid, harvest it, burn it,
//! and starve when they run out.
//!
//! This crate contains:
//! - Attribute sampling from configured distributions
//! - Landscape and population generation
//! - The tick pipeline (intent planning, conflict resolution, movement,
//!   harvest/metabolism/death/growback, respawn)
//! - Wealth histograms and population statistics
//! - Metrics collection and structured logging
//!
//! ## Architecture
//!
//! A [`World`] is an immutable snapshot. [`step`] reads one snapshot and
//! returns the next; nothing is mutated in place, so every phase sees a
//! consistent view of the previous tick. All randomness comes from a caller
//! supplied generator, which makes runs reproducible under a seed.
//!
//! ## Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//! use sugarscape_core::{config::AppConfig, world};
//!
//! let config = AppConfig::default();
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//!
//! let genesis = world::initialize(&config, &mut rng);
//! let next = world::step(&genesis, &config, &mut rng).unwrap();
//! assert_eq!(next.tick, 1);
//! ```

/// Configuration management for simulation parameters
pub mod config;
/// Engine error types
pub mod error;
/// Wealth histogram binning
pub mod histogram;
/// Deterministic two-peak sugar landscape
pub mod landscape;
/// Performance metrics collection and logging
pub mod metrics;
/// Initial and respawned agent generation
pub mod population;
/// Integer sampling from configured distributions
pub mod sampler;
/// Aggregate population statistics
pub mod stats;
/// Tick phases (intent, conflict, movement, resources, respawn)
pub mod systems;
/// Toroidal coordinate arithmetic
pub mod torus;
/// World snapshots and the tick pipeline
pub mod world;

pub use error::{EngineError, Result};
pub use histogram::build_histogram;
pub use metrics::{init_logging, Metrics};
pub use sampler::SampleLogic;
pub use stats::PopulationStats;
pub use sugarscape_data::{Agent, Cell, DistributionSpec, HistogramBin, WeightedValue};
pub use torus::Torus;
pub use world::{initialize, step, TickReport, World};
