/// Asserts that no two agents in the world share a cell.
#[macro_export]
macro_rules! assert_no_shared_cells {
    ($world:expr) => {
        let torus = $world.torus();
        let mut seen = std::collections::HashSet::new();
        for agent in &$world.agents {
            assert!(
                seen.insert(torus.index(agent.x, agent.y)),
                "Agent {} shares cell ({}, {}) at tick {}",
                agent.id,
                agent.x,
                agent.y,
                $world.tick
            );
        }
    };
}

/// Asserts the grid has the right length and every cell is within its ceiling.
#[macro_export]
macro_rules! assert_grid_valid {
    ($world:expr) => {
        assert_eq!(
            $world.grid.len(),
            $world.width as usize * $world.height as usize,
            "Grid length mismatch at tick {}",
            $world.tick
        );
        for (idx, cell) in $world.grid.iter().enumerate() {
            assert!(
                cell.sugar <= cell.max_sugar,
                "Cell {} holds {} above its ceiling {}",
                idx,
                cell.sugar,
                cell.max_sugar
            );
        }
    };
}

/// Asserts that the population count matches the expected value.
#[macro_export]
macro_rules! assert_population {
    ($world:expr, $count:expr) => {
        assert_eq!($world.agents.len(), $count, "Population count mismatch");
    };
}
