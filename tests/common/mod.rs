pub mod macros;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use sugarscape_core::config::AppConfig;
use sugarscape_core::landscape::build_landscape;
use sugarscape_core::{Agent, Cell, Torus, World};

type GridMod = Box<dyn FnOnce(&mut Vec<Cell>, Torus)>;

/// Assembles a world by hand: an explicit grid and hand-placed agents.
#[allow(dead_code)]
pub struct WorldBuilder {
    config: AppConfig,
    agents: Vec<Agent>,
    grid_mods: Vec<GridMod>,
    landscape: bool,
}

#[allow(dead_code)]
impl WorldBuilder {
    pub fn new(width: u16, height: u16) -> Self {
        let mut config = AppConfig::default();
        config.world.width = width;
        config.world.height = height;
        config.world.agent_count = 0;
        config.world.growback_rate = 0;
        Self {
            config,
            agents: Vec::new(),
            grid_mods: Vec::new(),
            landscape: false,
        }
    }

    pub fn with_config<F>(mut self, modifier: F) -> Self
    where
        F: FnOnce(&mut AppConfig),
    {
        modifier(&mut self.config);
        self
    }

    /// Starts from the two-peak landscape instead of a barren grid.
    pub fn with_landscape(mut self, max_sugar_per_cell: u32) -> Self {
        self.config.world.max_sugar_per_cell = max_sugar_per_cell;
        self.landscape = true;
        self
    }

    pub fn with_uniform_sugar(mut self, sugar: u32) -> Self {
        self.grid_mods.push(Box::new(move |grid, _| {
            for cell in grid.iter_mut() {
                *cell = Cell::full(sugar);
            }
        }));
        self
    }

    pub fn with_cell(mut self, x: u16, y: u16, cell: Cell) -> Self {
        self.grid_mods.push(Box::new(move |grid, torus| {
            grid[torus.index(x, y)] = cell;
        }));
        self
    }

    pub fn with_agent(mut self, agent: Agent) -> Self {
        self.agents.push(agent);
        self
    }

    pub fn build(self) -> (World, AppConfig) {
        let torus = Torus::new(self.config.world.width, self.config.world.height);
        let mut grid = if self.landscape {
            build_landscape(torus, self.config.world.max_sugar_per_cell)
        } else {
            vec![Cell::default(); torus.len()]
        };
        for modifier in self.grid_mods {
            modifier(&mut grid, torus);
        }

        let mut config = self.config;
        if config.world.agent_count == 0 {
            config.world.agent_count = self.agents.len();
        }
        let world = World {
            width: torus.width,
            height: torus.height,
            grid,
            next_id: self.agents.iter().map(|a| a.id + 1).max().unwrap_or(0),
            agents: self.agents,
            tick: 0,
        };
        (world, config)
    }
}

#[allow(dead_code)]
pub struct AgentBuilder {
    agent: Agent,
}

#[allow(dead_code)]
impl AgentBuilder {
    pub fn new(id: u64) -> Self {
        Self {
            agent: Agent {
                id,
                x: 0,
                y: 0,
                sugar: 10,
                vision: 1,
                metabolism: 0,
            },
        }
    }

    pub fn at(mut self, x: u16, y: u16) -> Self {
        self.agent.x = x;
        self.agent.y = y;
        self
    }

    pub fn sugar(mut self, sugar: i64) -> Self {
        self.agent.sugar = sugar;
        self
    }

    pub fn vision(mut self, vision: u32) -> Self {
        self.agent.vision = vision;
        self
    }

    pub fn metabolism(mut self, metabolism: u32) -> Self {
        self.agent.metabolism = metabolism;
        self
    }

    pub fn build(self) -> Agent {
        self.agent
    }
}

/// A seeded generator for reproducible tests.
#[allow(dead_code)]
pub fn rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// A generated world thinned out so no two agents share a cell.
#[allow(dead_code)]
pub fn spread_world(config: &AppConfig, seed: u64) -> World {
    let mut rng = rng(seed);
    let mut world = sugarscape_core::initialize(config, &mut rng);
    let torus = world.torus();
    let mut taken = vec![false; torus.len()];
    world.agents.retain(|a| {
        let idx = torus.index(a.x, a.y);
        !std::mem::replace(&mut taken[idx], true)
    });
    world
}
