use serde::{Deserialize, Serialize};

/// One landscape cell.
///
/// `max_sugar` is fixed when the landscape is built; `sugar` always stays in
/// `0..=max_sugar`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Cell {
    /// Sugar currently available for harvest.
    pub sugar: u32,
    /// Regrowth ceiling for this cell.
    pub max_sugar: u32,
}

impl Cell {
    #[must_use]
    pub fn new(sugar: u32, max_sugar: u32) -> Self {
        Self {
            sugar: sugar.min(max_sugar),
            max_sugar,
        }
    }

    /// A cell at its ceiling.
    #[must_use]
    pub fn full(max_sugar: u32) -> Self {
        Self {
            sugar: max_sugar,
            max_sugar,
        }
    }
}
