//! Integer sampling from configured distributions.
//!
//! Sampling never fails: inverted bounds, zero standard deviations and
//! weightless tables all resolve to deterministic fallbacks.

use rand::Rng;
use sugarscape_data::{DistributionSpec, WeightedValue};

pub trait SampleLogic {
    /// Draws one integer from the distribution.
    fn sample_int<R: Rng + ?Sized>(&self, rng: &mut R) -> i64;
}

impl SampleLogic for DistributionSpec {
    fn sample_int<R: Rng + ?Sized>(&self, rng: &mut R) -> i64 {
        match self {
            DistributionSpec::Uniform { min, max } => sample_uniform(*min, *max, rng),
            DistributionSpec::Normal { mean, sd, min, max } => {
                sample_normal(*mean, *sd, *min, *max, rng)
            }
            DistributionSpec::Discrete { items } => sample_discrete(items, rng),
        }
    }
}

fn sample_uniform<R: Rng + ?Sized>(min: i64, max: i64, rng: &mut R) -> i64 {
    let (lo, hi) = (min.min(max), min.max(max));
    let u: f64 = rng.gen();
    // Widened so the full i64 range does not overflow.
    let span = (i128::from(max) - i128::from(min) + 1) as f64;
    let v = (min as f64 + u * span).floor() as i64;
    v.clamp(lo, hi)
}

fn sample_normal<R: Rng + ?Sized>(mean: f64, sd: f64, min: i64, max: i64, rng: &mut R) -> i64 {
    let (lo, hi) = (min.min(max), min.max(max));
    let z = standard_normal(rng);
    let v = (mean + z * sd).round() as i64;
    v.clamp(lo, hi)
}

fn sample_discrete<R: Rng + ?Sized>(items: &[WeightedValue], rng: &mut R) -> i64 {
    let live: Vec<&WeightedValue> = items.iter().filter(|item| item.weight > 0.0).collect();
    let Some(last) = live.last() else {
        return 0;
    };
    let total: f64 = live.iter().map(|item| item.weight).sum();
    let draw = rng.gen::<f64>() * total;

    let mut acc = 0.0;
    for item in &live {
        acc += item.weight;
        if draw <= acc {
            return item.value;
        }
    }
    // Float residue left the draw just above the running total.
    last.value
}

/// Standard normal deviate via the Marsaglia polar method.
pub fn standard_normal<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    loop {
        let u: f64 = rng.gen_range(-1.0..1.0);
        let v: f64 = rng.gen_range(-1.0..1.0);
        let s = u * u + v * v;
        if s > 0.0 && s < 1.0 {
            return u * (-2.0 * s.ln() / s).sqrt();
        }
    }
}
