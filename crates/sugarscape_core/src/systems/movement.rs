use super::intent::MoveIntent;
use crate::torus::Torus;
use sugarscape_data::Agent;

pub struct MoveOutcome {
    pub agents: Vec<Agent>,
    /// Cells holding at least one agent after the moves.
    pub occupancy: Vec<bool>,
    /// Agents that changed cell.
    pub moved: usize,
    /// Cells holding more than one agent. Zero unless agents already shared
    /// a cell before the tick.
    pub shared_cells: usize,
}

/// Moves each agent that won its destination; everyone else stays put.
///
/// Only positions change; sugar, vision and metabolism carry over untouched.
#[must_use]
pub fn apply_moves(
    agents: &[Agent],
    intents: &[MoveIntent],
    winners: &[Option<usize>],
    torus: Torus,
) -> MoveOutcome {
    let mut next = Vec::with_capacity(agents.len());
    let mut counts = vec![0u32; torus.len()];
    let mut moved = 0;

    for (i, (agent, intent)) in agents.iter().zip(intents).enumerate() {
        let target = if winners[intent.destination] == Some(i) {
            intent.destination
        } else {
            intent.origin
        };
        if target != intent.origin {
            moved += 1;
        }
        let (x, y) = torus.coords(target);
        counts[target] += 1;
        next.push(Agent {
            x,
            y,
            ..agent.clone()
        });
    }

    MoveOutcome {
        agents: next,
        occupancy: counts.iter().map(|c| *c > 0).collect(),
        moved,
        shared_cells: counts.iter().filter(|c| **c > 1).count(),
    }
}
