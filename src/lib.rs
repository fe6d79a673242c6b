//! Linear calibration curves for analytical chemistry.
//!
//! This library fits an ordinary least-squares calibration line (instrument
//! response against standard concentration), reports goodness-of-fit and
//! LINEST-style diagnostics, and performs inverse prediction of an unknown
//! concentration from observed responses with propagated, expanded
//! uncertainty following Hibbert's formulation.
//!
//! # Example
//!
//! ```rust,ignore
//! use calcurve::prelude::*;
//!
//! // Calibration standards: concentration vs. measured response.
//! let model = CalibrationModel::from_slices(
//!     &[1.0, 2.0, 3.0, 4.0, 5.0],
//!     &[2.1, 3.9, 6.2, 7.8, 10.1],
//! )?;
//! let fitted = model.fit()?;
//!
//! println!("{}", fitted.summary());
//!
//! // Three replicate measurements of an unknown sample.
//! let prediction = fitted.inverse_prediction(&[5.0, 5.1, 4.9])?;
//! println!("concentration = {prediction}");
//! ```

pub mod core;
pub mod diagnostics;
pub mod inference;
pub mod model;
pub mod plot;
pub mod report;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::core::{CalibrationOptions, CalibrationOptionsBuilder, CalibrationResult};
    pub use crate::diagnostics::LinestStats;
    pub use crate::inference::InversePrediction;
    pub use crate::model::{CalibrationError, CalibrationModel, FittedCalibration};
}

pub use crate::core::{CalibrationOptions, CalibrationOptionsBuilder, CalibrationResult};
pub use crate::model::{CalibrationError, CalibrationModel, FittedCalibration};
