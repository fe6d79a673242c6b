//! Core types: options and fit results.

mod options;
mod result;

pub use options::{CalibrationOptions, CalibrationOptionsBuilder, OptionsError};
pub use result::CalibrationResult;
