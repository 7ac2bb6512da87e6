use crate::config::{AgentConfig, RespawnIdPolicy};
use crate::population::generate_population;
use crate::torus::Torus;
use rand::Rng;
use sugarscape_data::Agent;

pub struct RespawnOutcome {
    pub agents: Vec<Agent>,
    /// Id the next newborn would receive under [`RespawnIdPolicy::Continue`].
    pub next_id: u64,
    pub births: usize,
}

/// Tops the population back up to `target` with freshly generated agents,
/// appended after the survivors.
///
/// With [`RespawnIdPolicy::Restart`] each batch is numbered from 0 and may
/// reuse ids still held by survivors.
pub fn respawn<R: Rng + ?Sized>(
    mut survivors: Vec<Agent>,
    target: usize,
    next_id: u64,
    policy: RespawnIdPolicy,
    torus: Torus,
    attributes: &AgentConfig,
    rng: &mut R,
) -> RespawnOutcome {
    let births = target.saturating_sub(survivors.len());
    if births == 0 {
        return RespawnOutcome {
            agents: survivors,
            next_id,
            births,
        };
    }

    let first_id = match policy {
        RespawnIdPolicy::Continue => next_id,
        RespawnIdPolicy::Restart => 0,
    };
    let newborns = generate_population(births, first_id, torus, attributes, rng);
    survivors.extend(newborns);

    RespawnOutcome {
        agents: survivors,
        next_id: next_id.max(first_id + births as u64),
        births,
    }
}
