//! Deterministic two-peak sugar landscape.
//!
//! Two Gaussian "sugar mountains" sit at `(0.25w, 0.30h)` and
//! `(0.75w, 0.70h)`. Each cell's ceiling is its initial sugar level, not the
//! global per-cell cap.

use crate::torus::Torus;
use sugarscape_data::Cell;

const PEAKS: [(f64, f64); 2] = [(0.25, 0.30), (0.75, 0.70)];
const SIGMA_FRACTION: f64 = 0.12;

fn bump(x: f64, y: f64, cx: f64, cy: f64, amplitude: f64, sigma: f64) -> f64 {
    let dx = x - cx;
    let dy = y - cy;
    amplitude * (-(dx * dx + dy * dy) / (2.0 * sigma * sigma)).exp()
}

/// Builds the row-major landscape for a `width` x `height` grid.
#[must_use]
pub fn build_landscape(torus: Torus, max_sugar_per_cell: u32) -> Vec<Cell> {
    let w = f64::from(torus.width);
    let h = f64::from(torus.height);
    let amplitude = f64::from(max_sugar_per_cell);
    let sigma = w.min(h) * SIGMA_FRACTION;

    (0..torus.len())
        .map(|idx| {
            let (x, y) = torus.coords(idx);
            let (x, y) = (f64::from(x), f64::from(y));
            let height: f64 = PEAKS
                .iter()
                .map(|(fx, fy)| bump(x, y, fx * w, fy * h, amplitude, sigma))
                .sum();
            let sugar = height.round().clamp(0.0, amplitude) as u32;
            Cell::full(sugar)
        })
        .collect()
}

/// Total sugar currently on the grid.
#[must_use]
pub fn total_sugar(grid: &[Cell]) -> u64 {
    grid.iter().map(|cell| u64::from(cell.sugar)).sum()
}
