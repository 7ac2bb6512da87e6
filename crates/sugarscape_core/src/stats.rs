use crate::landscape::total_sugar;
use crate::world::World;
use serde::{Deserialize, Serialize};
use sugarscape_data::Agent;

/// Aggregate view of one world snapshot.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PopulationStats {
    pub tick: u64,
    pub population: usize,
    pub total_wealth: i64,
    pub mean_wealth: f64,
    pub max_wealth: i64,
    pub mean_vision: f64,
    pub mean_metabolism: f64,
    /// Gini coefficient of wealth, 0 for perfect equality.
    pub gini: f64,
    /// Sugar left standing on the landscape.
    pub grid_sugar: u64,
}

impl PopulationStats {
    #[must_use]
    pub fn from_world(world: &World) -> Self {
        let agents = &world.agents;
        let grid_sugar = total_sugar(&world.grid);
        if agents.is_empty() {
            return Self {
                tick: world.tick,
                grid_sugar,
                ..Self::default()
            };
        }

        let n = agents.len() as f64;
        let total_wealth = agents
            .iter()
            .fold(0i64, |acc, a| acc.saturating_add(a.sugar));
        let wealth_sum: f64 = agents.iter().map(|a| a.sugar as f64).sum();
        let total_vision: u64 = agents.iter().map(|a| u64::from(a.vision)).sum();
        let total_metabolism: u64 = agents.iter().map(|a| u64::from(a.metabolism)).sum();

        Self {
            tick: world.tick,
            population: agents.len(),
            total_wealth,
            mean_wealth: wealth_sum / n,
            max_wealth: agents.iter().map(|a| a.sugar).max().unwrap_or(0),
            mean_vision: total_vision as f64 / n,
            mean_metabolism: total_metabolism as f64 / n,
            gini: gini(agents),
            grid_sugar,
        }
    }
}

/// Gini coefficient over agents' sugar, negative balances counted as zero.
#[must_use]
pub fn gini(agents: &[Agent]) -> f64 {
    let mut wealth: Vec<f64> = agents.iter().map(|a| a.sugar.max(0) as f64).collect();
    let total: f64 = wealth.iter().sum();
    if wealth.is_empty() || total <= 0.0 {
        return 0.0;
    }
    wealth.sort_by(f64::total_cmp);
    let n = wealth.len() as f64;
    let weighted: f64 = wealth
        .iter()
        .enumerate()
        .map(|(i, w)| (i as f64 + 1.0) * w)
        .sum();
    (2.0 * weighted) / (n * total) - (n + 1.0) / n
}
