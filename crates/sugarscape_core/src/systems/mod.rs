//! Tick phases, in pipeline order.
//!
//! Each phase consumes the output of the one before it and never looks at a
//! partially updated snapshot.

pub mod conflict;
pub mod intent;
pub mod movement;
pub mod resource;
pub mod respawn;

pub use conflict::resolve_conflicts;
pub use intent::{occupancy, plan_intents, MoveIntent};
pub use movement::{apply_moves, MoveOutcome};
pub use resource::{run_resource_cycle, CycleOutcome};
pub use respawn::{respawn, RespawnOutcome};
