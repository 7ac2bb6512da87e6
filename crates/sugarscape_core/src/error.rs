//! Error types for the simulation engine.
//!
//! Degenerate inputs (empty populations, zero-weight distributions) resolve
//! to fallbacks and never reach this type. The engine only fails on a
//! malformed snapshot or when a world and its configuration disagree about
//! shape.

use thiserror::Error;

/// Main error type for engine operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The grid does not hold exactly `width * height` cells.
    #[error("Shape mismatch: grid holds {actual} cells, expected {expected} ({width}x{height})")]
    ShapeMismatch {
        width: u16,
        height: u16,
        expected: usize,
        actual: usize,
    },

    /// The configuration describes a different grid than the world it is applied to.
    #[error(
        "Dimension mismatch: world is {world_width}x{world_height}, config is {config_width}x{config_height}"
    )]
    DimensionMismatch {
        world_width: u16,
        world_height: u16,
        config_width: u16,
        config_height: u16,
    },

    /// An agent sits outside the grid.
    #[error("Agent {id} at ({x}, {y}) lies outside the {width}x{height} grid")]
    AgentOutOfBounds {
        id: u64,
        x: u16,
        y: u16,
        width: u16,
        height: u16,
    },
}

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;
