use serde::{Deserialize, Serialize};

/// A value/weight pair of a [`DistributionSpec::Discrete`] distribution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightedValue {
    pub value: i64,
    /// Relative weight; non-positive weights are ignored when sampling.
    pub weight: f64,
}

/// Probability shape an integer attribute is drawn from.
///
/// Serialised with a `kind` tag so configuration files read naturally:
///
/// ```toml
/// kind = "normal"
/// mean = 3.0
/// sd = 1.0
/// min = 1
/// max = 6
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DistributionSpec {
    /// Every integer in `min..=max` equally likely. Inverted bounds are tolerated.
    Uniform { min: i64, max: i64 },
    /// Rounded Gaussian clamped to `min..=max`.
    Normal { mean: f64, sd: f64, min: i64, max: i64 },
    /// Explicit weighted table.
    Discrete { items: Vec<WeightedValue> },
}

impl DistributionSpec {
    /// Always yields `value`.
    #[must_use]
    pub fn constant(value: i64) -> Self {
        Self::Uniform {
            min: value,
            max: value,
        }
    }

    /// Smallest value a sample can take, when it is known without sampling.
    ///
    /// A discrete table with no positive weight samples to 0.
    #[must_use]
    pub fn lower_bound(&self) -> i64 {
        match self {
            Self::Uniform { min, max } | Self::Normal { min, max, .. } => (*min).min(*max),
            Self::Discrete { items } => items
                .iter()
                .filter(|item| item.weight > 0.0)
                .map(|item| item.value)
                .min()
                .unwrap_or(0),
        }
    }
}
