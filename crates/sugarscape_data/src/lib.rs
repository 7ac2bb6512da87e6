//! Plain data types shared by the Sugarscape engine and its consumers.
//!
//! Nothing in this crate carries simulation logic; behaviour lives in
//! `sugarscape_core` as extension traits over these types.

pub mod data;

pub use data::agent::Agent;
pub use data::distribution::{DistributionSpec, WeightedValue};
pub use data::grid::Cell;
pub use data::histogram::HistogramBin;
