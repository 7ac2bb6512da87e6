//! World snapshots and the tick pipeline.
//!
//! `step` never mutates its input: every tick builds a fresh [`World`] from
//! the previous one, so the intent planner and the harvest phase can both
//! read the previous grid without stepping on each other.

use crate::config::AppConfig;
use crate::error::{EngineError, Result};
use crate::landscape::build_landscape;
use crate::population::generate_population;
use crate::systems::{self, conflict::contested_cells};
use crate::torus::Torus;
use rand::Rng;
use serde::{Deserialize, Serialize};
use sugarscape_data::{Agent, Cell};

/// An immutable simulation snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct World {
    pub width: u16,
    pub height: u16,
    /// Row-major, `width * height` cells.
    pub grid: Vec<Cell>,
    /// Population in priority order for conflict resolution.
    pub agents: Vec<Agent>,
    pub tick: u64,
    /// Next id in the global agent id sequence.
    pub next_id: u64,
}

/// What happened during one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TickReport {
    pub tick: u64,
    pub moved: usize,
    pub contested: usize,
    pub harvested: u64,
    pub deaths: usize,
    pub births: usize,
    pub population: usize,
}

impl World {
    #[must_use]
    pub fn torus(&self) -> Torus {
        Torus::new(self.width, self.height)
    }

    /// Cell at `(x, y)`, wrapping out-of-range coordinates.
    #[must_use]
    pub fn cell(&self, x: i64, y: i64) -> &Cell {
        let torus = self.torus();
        let (x, y) = torus.offset(0, 0, x, y);
        &self.grid[torus.index(x, y)]
    }

    /// Fails when the grid does not hold exactly `width * height` cells or
    /// an agent sits off the grid.
    pub fn check_shape(&self) -> Result<()> {
        let expected = self.torus().len();
        if self.grid.len() != expected {
            return Err(EngineError::ShapeMismatch {
                width: self.width,
                height: self.height,
                expected,
                actual: self.grid.len(),
            });
        }
        if let Some(agent) = self
            .agents
            .iter()
            .find(|a| a.x >= self.width || a.y >= self.height)
        {
            return Err(EngineError::AgentOutOfBounds {
                id: agent.id,
                x: agent.x,
                y: agent.y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// Fails when `config` describes a different grid than this world.
    pub fn check_config(&self, config: &AppConfig) -> Result<()> {
        if self.width != config.world.width || self.height != config.world.height {
            return Err(EngineError::DimensionMismatch {
                world_width: self.width,
                world_height: self.height,
                config_width: config.world.width,
                config_height: config.world.height,
            });
        }
        Ok(())
    }
}

/// Builds tick-0 world: the landscape plus `agent_count` agents with ids
/// `0..agent_count`.
pub fn initialize<R: Rng + ?Sized>(config: &AppConfig, rng: &mut R) -> World {
    let torus = Torus::new(config.world.width, config.world.height);
    let grid = build_landscape(torus, config.world.max_sugar_per_cell);
    let agents = generate_population(
        config.world.agent_count,
        0,
        torus,
        &config.agents,
        rng,
    );

    tracing::info!(
        width = torus.width,
        height = torus.height,
        agents = agents.len(),
        grid_sugar = crate::landscape::total_sugar(&grid),
        "World initialized"
    );

    World {
        width: torus.width,
        height: torus.height,
        grid,
        next_id: agents.len() as u64,
        agents,
        tick: 0,
    }
}

/// Advances one tick and returns the next world.
pub fn step<R: Rng + ?Sized>(world: &World, config: &AppConfig, rng: &mut R) -> Result<World> {
    advance(world, config, rng).map(|(next, _)| next)
}

/// Advances one tick, returning the next world along with a report of the
/// tick.
///
/// Phases run in order: intent planning on the previous snapshot, conflict
/// resolution, movement, the resource cycle, then respawn if enabled.
pub fn advance<R: Rng + ?Sized>(
    world: &World,
    config: &AppConfig,
    rng: &mut R,
) -> Result<(World, TickReport)> {
    world.check_shape()?;
    world.check_config(config)?;

    let torus = world.torus();
    let intents = systems::plan_intents(&world.agents, &world.grid, torus);
    let contested = contested_cells(&intents, torus.len());
    let winners = systems::resolve_conflicts(
        &intents,
        torus.len(),
        config.world.conflict_policy,
        rng,
    );
    let moves = systems::apply_moves(&world.agents, &intents, &winners, torus);
    if moves.shared_cells > 0 {
        tracing::warn!(
            tick = world.tick + 1,
            shared_cells = moves.shared_cells,
            "Agents share cells after movement"
        );
    }

    let cycle = systems::run_resource_cycle(
        moves.agents,
        &world.grid,
        config.world.growback_rate,
        torus.width,
    );

    let (agents, next_id, births) = if config.world.respawn {
        let outcome = systems::respawn(
            cycle.survivors,
            config.world.agent_count,
            world.next_id,
            config.world.respawn_ids,
            torus,
            &config.agents,
            rng,
        );
        (outcome.agents, outcome.next_id, outcome.births)
    } else {
        (cycle.survivors, world.next_id, 0)
    };

    let report = TickReport {
        tick: world.tick + 1,
        moved: moves.moved,
        contested,
        harvested: cycle.harvested,
        deaths: cycle.deaths,
        births,
        population: agents.len(),
    };
    tracing::debug!(
        tick = report.tick,
        moved = report.moved,
        contested = report.contested,
        harvested = report.harvested,
        deaths = report.deaths,
        births = report.births,
        population = report.population,
        "Tick complete"
    );

    let next = World {
        width: world.width,
        height: world.height,
        grid: cycle.grid,
        agents,
        tick: world.tick + 1,
        next_id,
    };
    Ok((next, report))
}
