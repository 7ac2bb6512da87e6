//! Agent generation for initial worlds and respawn batches.

use crate::config::AgentConfig;
use crate::sampler::SampleLogic;
use crate::torus::Torus;
use rand::Rng;
use sugarscape_data::Agent;

/// Creates one agent at a uniformly random cell.
///
/// Sampled vision is floored at 1 and metabolism at 0.
pub fn create_agent_with_rng<R: Rng + ?Sized>(
    id: u64,
    torus: Torus,
    attributes: &AgentConfig,
    rng: &mut R,
) -> Agent {
    let x = rng.gen_range(0..torus.width);
    let y = rng.gen_range(0..torus.height);
    let vision = attributes.vision.sample_int(rng).clamp(1, i64::from(u32::MAX)) as u32;
    let metabolism = attributes
        .metabolism
        .sample_int(rng)
        .clamp(0, i64::from(u32::MAX)) as u32;
    let sugar = attributes.initial_sugar.sample_int(rng);
    Agent {
        id,
        x,
        y,
        sugar,
        vision,
        metabolism,
    }
}

/// Generates `count` agents with sequential ids starting at `first_id`.
///
/// Positions are drawn independently; two agents may land on the same cell.
pub fn generate_population<R: Rng + ?Sized>(
    count: usize,
    first_id: u64,
    torus: Torus,
    attributes: &AgentConfig,
    rng: &mut R,
) -> Vec<Agent> {
    (0..count as u64)
        .map(|offset| create_agent_with_rng(first_id + offset, torus, attributes, rng))
        .collect()
}
