use crate::torus::Torus;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use sugarscape_data::{Agent, Cell};

/// Scan order for cardinal search: +x, -x, +y, -y.
const DIRECTIONS: [(i64, i64); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Where an agent wants to go this tick, as row-major cell indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveIntent {
    pub origin: usize,
    pub destination: usize,
}

impl MoveIntent {
    #[must_use]
    pub fn is_stay(&self) -> bool {
        self.origin == self.destination
    }
}

/// Marks every cell holding at least one agent.
#[must_use]
pub fn occupancy(agents: &[Agent], torus: Torus) -> Vec<bool> {
    let mut occupied = vec![false; torus.len()];
    for agent in agents {
        occupied[torus.index(agent.x, agent.y)] = true;
    }
    occupied
}

/// Picks the best visible destination for one agent.
///
/// The agent's own cell is the starting candidate. Occupied cells are never
/// candidates. A scanned cell replaces the current best when it holds
/// strictly more sugar, or the same sugar at a strictly shorter distance;
/// remaining ties go to the earlier direction in [`DIRECTIONS`].
#[must_use]
pub fn plan_intent(agent: &Agent, grid: &[Cell], occupied: &[bool], torus: Torus) -> MoveIntent {
    let origin = torus.index(agent.x, agent.y);
    let mut best = origin;
    let mut best_sugar = grid[origin].sugar;
    let mut best_dist = 0u32;

    for (dx, dy) in DIRECTIONS {
        // Past one full lap a ray only revisits cells at a greater distance,
        // which can never displace the current best.
        let lap = if dx != 0 { torus.width } else { torus.height };
        let reach = agent.vision.min(u32::from(lap));
        for dist in 1..=reach {
            let step = i64::from(dist);
            let (x, y) = torus.offset(agent.x, agent.y, dx * step, dy * step);
            let idx = torus.index(x, y);
            if occupied[idx] {
                continue;
            }
            let sugar = grid[idx].sugar;
            if sugar > best_sugar || (sugar == best_sugar && dist < best_dist) {
                best = idx;
                best_sugar = sugar;
                best_dist = dist;
            }
        }
    }

    MoveIntent {
        origin,
        destination: best,
    }
}

/// Plans every agent's move against the same snapshot, in population order.
#[must_use]
pub fn plan_intents(agents: &[Agent], grid: &[Cell], torus: Torus) -> Vec<MoveIntent> {
    let occupied = occupancy(agents, torus);

    #[cfg(feature = "parallel")]
    {
        agents
            .par_iter()
            .map(|agent| plan_intent(agent, grid, &occupied, torus))
            .collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        agents
            .iter()
            .map(|agent| plan_intent(agent, grid, &occupied, torus))
            .collect()
    }
}
