//! Performance metrics collection for the simulation.
//!
//! Provides structured logging and metrics tracking for monitoring
//! simulation performance and health.

use crate::world::TickReport;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Ticks between periodic `info` summaries.
const SUMMARY_INTERVAL: u64 = 1000;

/// Metrics collector for simulation statistics.
pub struct Metrics {
    tick_count: AtomicU64,
    population: AtomicU64,
    pub counters: Mutex<HashMap<String, AtomicU64>>,
    start_time: Instant,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    /// Creates a new metrics collector.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tick_count: AtomicU64::new(0),
            population: AtomicU64::new(0),
            counters: Mutex::new(HashMap::new()),
            start_time: Instant::now(),
        }
    }

    /// Records a completed tick with its duration.
    pub fn record_tick(&self, duration: Duration, report: &TickReport) {
        self.tick_count.fetch_add(1, Ordering::Relaxed);
        self.population
            .store(report.population as u64, Ordering::Relaxed);
        self.add_to_counter("deaths", report.deaths as u64);
        self.add_to_counter("births", report.births as u64);
        self.add_to_counter("harvested", report.harvested);

        let tick = self.tick_count.load(Ordering::Relaxed);
        if tick.is_multiple_of(SUMMARY_INTERVAL) {
            tracing::info!(
                tick = report.tick,
                population = report.population,
                deaths = self.counter("deaths"),
                births = self.counter("births"),
                duration_us = duration.as_micros() as u64,
                "Simulation tick"
            );
        }
    }

    /// Adds `amount` to a named counter.
    pub fn add_to_counter(&self, name: &str, amount: u64) {
        let mut counters = self.counters.lock().unwrap_or_else(|e| e.into_inner());
        counters
            .entry(name.to_string())
            .or_insert_with(|| AtomicU64::new(0))
            .fetch_add(amount, Ordering::Relaxed);
    }

    /// Current value of a named counter, 0 if it was never touched.
    #[must_use]
    pub fn counter(&self, name: &str) -> u64 {
        let counters = self.counters.lock().unwrap_or_else(|e| e.into_inner());
        counters
            .get(name)
            .map_or(0, |c| c.load(Ordering::Relaxed))
    }

    /// Gets the number of recorded ticks.
    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count.load(Ordering::Relaxed)
    }

    /// Gets the population after the last recorded tick.
    #[must_use]
    pub fn population(&self) -> u64 {
        self.population.load(Ordering::Relaxed)
    }

    /// Gets elapsed time since metrics creation.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Logs a simulation event.
    pub fn log_event(&self, event_type: &str, details: &str) {
        tracing::info!(
            event_type = event_type,
            details = details,
            "Simulation event"
        );
    }
}

/// Initialize tracing subscriber for logging.
///
/// `RUST_LOG` takes precedence over `default_filter`. Calling this twice is
/// harmless.
pub fn init_logging(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .ok();
}
