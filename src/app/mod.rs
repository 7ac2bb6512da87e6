pub mod shutdown;
pub mod state;

pub use shutdown::ShutdownManager;
pub use state::{load_config, Sample, Simulation};

use anyhow::Result;
use tokio::time::{interval, MissedTickBehavior};

/// How a run should be driven.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Stop after this many ticks.
    pub max_ticks: Option<u64>,
    /// Hold the configured ticks-per-second rate instead of running flat out.
    pub paced: bool,
}

/// Why a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    TickLimit,
    Extinction,
    Shutdown,
}

/// Ticks between cooperative yields when running unpaced.
const UNPACED_YIELD_EVERY: u64 = 256;

impl Simulation {
    /// Drives the simulation until a tick limit, extinction or shutdown.
    ///
    /// `on_sample` is called once with the initial state and again after
    /// every histogram refresh.
    pub async fn run<F>(
        &mut self,
        options: RunOptions,
        shutdown: &ShutdownManager,
        mut on_sample: F,
    ) -> Result<StopReason>
    where
        F: FnMut(&Simulation),
    {
        let mut ticker = interval(self.tick_interval());
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut period = self.tick_interval();
        let mut ticks_run = 0u64;

        on_sample(self);

        let reason = loop {
            if shutdown.is_shutdown_requested() {
                break StopReason::Shutdown;
            }
            if options.max_ticks.is_some_and(|max| ticks_run >= max) {
                break StopReason::TickLimit;
            }
            if self.is_extinct() {
                break StopReason::Extinction;
            }

            if options.paced {
                // Tick rate may have been tuned since the last tick.
                if period != self.tick_interval() {
                    period = self.tick_interval();
                    ticker = interval(period);
                    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
                }
                ticker.tick().await;
            } else if ticks_run.is_multiple_of(UNPACED_YIELD_EVERY) {
                tokio::task::yield_now().await;
            }

            if self.tick()? {
                on_sample(self);
            }
            ticks_run += 1;
        };

        tracing::info!(
            tick = self.world.tick,
            population = self.world.agents.len(),
            reason = ?reason,
            elapsed_ms = self.metrics.elapsed().as_millis() as u64,
            "Run finished"
        );
        Ok(reason)
    }
}
