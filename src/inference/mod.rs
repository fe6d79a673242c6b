//! Uncertainty propagation for inverse prediction.

mod prediction;
mod uncertainty;

pub use prediction::InversePrediction;
pub use uncertainty::{hibbert_standard_uncertainty, sxhat, t_critical};
