//! Core data structures for the Sugarscape simulation.

pub mod agent;
pub mod distribution;
pub mod grid;
pub mod histogram;
