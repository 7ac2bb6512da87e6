use sugarscape_data::{Agent, Cell};

pub struct CycleOutcome {
    pub survivors: Vec<Agent>,
    pub grid: Vec<Cell>,
    /// Sugar collected by all agents this tick.
    pub harvested: u64,
    pub deaths: usize,
}

/// Each agent collects all sugar on its cell, in population order.
///
/// Returns the total harvested. Agents sharing a cell split it by order: the
/// first takes everything and the rest find an empty cell.
pub fn harvest(agents: &mut [Agent], grid: &mut [Cell], width: u16) -> u64 {
    let mut total = 0u64;
    for agent in agents.iter_mut() {
        let cell = &mut grid[agent.cell_index(width)];
        agent.sugar = agent.sugar.saturating_add(i64::from(cell.sugar));
        total += u64::from(cell.sugar);
        cell.sugar = 0;
    }
    total
}

/// Burns each agent's metabolism. Sugar may go negative here.
pub fn metabolize(agents: &mut [Agent]) {
    for agent in agents.iter_mut() {
        agent.sugar = agent.sugar.saturating_sub(i64::from(agent.metabolism));
    }
}

/// Drops agents whose sugar went negative. Exactly zero survives.
///
/// Returns the number of deaths.
pub fn cull(agents: &mut Vec<Agent>) -> usize {
    let before = agents.len();
    agents.retain(|agent| agent.sugar >= 0);
    before - agents.len()
}

/// Regrows every cell by `rate`, capped at its own ceiling.
pub fn grow_back(grid: &mut [Cell], rate: u32) {
    for cell in grid.iter_mut() {
        cell.sugar = cell.sugar.saturating_add(rate).min(cell.max_sugar);
    }
}

/// Harvest, metabolism, death and growback for one tick.
///
/// `grid` is the previous tick's grid; the returned grid is a fresh copy.
#[must_use]
pub fn run_resource_cycle(
    mut agents: Vec<Agent>,
    grid: &[Cell],
    growback_rate: u32,
    width: u16,
) -> CycleOutcome {
    let mut next_grid = grid.to_vec();
    let harvested = harvest(&mut agents, &mut next_grid, width);
    metabolize(&mut agents);
    let deaths = cull(&mut agents);
    grow_back(&mut next_grid, growback_rate);

    CycleOutcome {
        survivors: agents,
        grid: next_grid,
        harvested,
        deaths,
    }
}
