//! Application layer around the Sugarscape engine: a stateful driver that
//! owns the current world and random stream, reacts to configuration
//! changes, and paces ticks in real time.

pub mod app;

pub use app::{RunOptions, ShutdownManager, Simulation, StopReason};
