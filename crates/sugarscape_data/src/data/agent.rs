use serde::{Deserialize, Serialize};

/// A sugar-harvesting agent.
///
/// Position is in grid coordinates, `x < width` and `y < height`. `sugar` is
/// the agent's wealth; it can dip below zero between metabolism and the
/// death filter but never survives a tick negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    pub id: u64,
    pub x: u16,
    pub y: u16,
    pub sugar: i64,
    /// Cardinal search radius, at least 1.
    pub vision: u32,
    /// Sugar burned per tick.
    pub metabolism: u32,
}

impl Agent {
    /// Row-major index of the agent's cell in a grid of the given width.
    #[inline(always)]
    #[must_use]
    pub fn cell_index(&self, width: u16) -> usize {
        (self.y as usize * width as usize) + self.x as usize
    }
}
