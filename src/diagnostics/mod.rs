//! Regression diagnostics reported alongside the fit.

mod linest;

pub use linest::LinestStats;
