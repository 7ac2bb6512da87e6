//! Wealth histogram binning.
//!
//! Bins are contiguous and inclusive, cover every integer from the poorest
//! to the richest agent, and keep empty bins so consumers can chart the
//! result directly.

use sugarscape_data::{Agent, HistogramBin};

const AUTO_MIN_BINS: i64 = 5;
const AUTO_MAX_BINS: i64 = 30;
const MANUAL_MAX_BINS: i64 = 50;

/// Bin count derived from population size: `ceil(log2(max(2, n)) + 1)`,
/// clamped to `5..=30`.
#[must_use]
pub fn auto_bin_count(n: usize) -> i64 {
    let n = n.max(2) as f64;
    ((n.log2() + 1.0).ceil() as i64).clamp(AUTO_MIN_BINS, AUTO_MAX_BINS)
}

fn ceil_div(a: i128, b: i128) -> i128 {
    (a + b - 1) / b
}

/// Bins arbitrary integer values.
///
/// An empty slice yields one `"0-0"` bin with count 0; a slice whose values
/// are all equal yields one `"v-v"` bin holding all of them.
#[must_use]
pub fn bin_values(values: &[i64], auto: bool, bin_count: u32) -> Vec<HistogramBin> {
    let (Some(&min), Some(&max)) = (values.iter().min(), values.iter().max()) else {
        return vec![HistogramBin::new(0, 0, 0)];
    };
    if min == max {
        return vec![HistogramBin::new(min, max, values.len())];
    }

    let k = if auto {
        auto_bin_count(values.len())
    } else {
        i64::from(bin_count).clamp(1, MANUAL_MAX_BINS)
    };
    // Bin arithmetic runs in i128: the span of two extreme balances does
    // not fit in i64.
    let (min, max) = (i128::from(min), i128::from(max));
    let range = max - min + 1;
    let width = ceil_div(range, i128::from(k));
    let bins = ceil_div(range, width);

    let mut counts = vec![0usize; bins as usize];
    for v in values {
        let idx = ((i128::from(*v) - min) / width).clamp(0, bins - 1);
        counts[idx as usize] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| {
            // Both ends lie in [min, max], so they fit back into i64.
            let lo = min + i as i128 * width;
            let hi = (lo + width - 1).min(max);
            HistogramBin::new(lo as i64, hi as i64, count)
        })
        .collect()
}

/// Bins agents by sugar.
///
/// `auto` derives the bin count from the population size; otherwise
/// `bin_count` is used, clamped to `1..=50`.
#[must_use]
pub fn build_histogram(agents: &[Agent], auto: bool, bin_count: u32) -> Vec<HistogramBin> {
    let values: Vec<i64> = agents.iter().map(|a| a.sugar).collect();
    bin_values(&values, auto, bin_count)
}
