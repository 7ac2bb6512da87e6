//! Toroidal coordinate arithmetic over a row-major grid.

use serde::{Deserialize, Serialize};

/// Dimensions of a wrap-around grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Torus {
    pub width: u16,
    pub height: u16,
}

impl Torus {
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Number of cells.
    #[inline(always)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.width as usize * self.height as usize
    }

    #[inline(always)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline(always)]
    #[must_use]
    pub fn index(&self, x: u16, y: u16) -> usize {
        (y as usize * self.width as usize) + x as usize
    }

    #[inline(always)]
    #[must_use]
    pub fn coords(&self, idx: usize) -> (u16, u16) {
        let w = self.width as usize;
        ((idx % w) as u16, (idx / w) as u16)
    }

    /// Cell reached from `(x, y)` by `(dx, dy)`, wrapping on both axes.
    #[inline]
    #[must_use]
    pub fn offset(&self, x: u16, y: u16, dx: i64, dy: i64) -> (u16, u16) {
        let nx = (i64::from(x) + dx).rem_euclid(i64::from(self.width));
        let ny = (i64::from(y) + dy).rem_euclid(i64::from(self.height));
        (nx as u16, ny as u16)
    }
}
