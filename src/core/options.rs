//! Calibration options and configuration.

use thiserror::Error;

/// Errors from invalid option values.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum OptionsError {
    #[error("confidence level must be in (0, 1), got {0}")]
    InvalidConfidenceLevel(f64),
}

/// Configuration options for a calibration fit.
///
/// The confidence level controls the coverage factor used when expanding
/// standard uncertainties: the critical t-value is taken at
/// `alpha = 1 - confidence_level`, two-sided. The conventional choice in
/// calibration work is 95%.
#[derive(Debug, Clone, Copy)]
pub struct CalibrationOptions {
    /// Confidence level for expanded uncertainties (default: 0.95).
    pub confidence_level: f64,
}

impl Default for CalibrationOptions {
    fn default() -> Self {
        Self {
            confidence_level: 0.95,
        }
    }
}

impl CalibrationOptions {
    /// Create a builder for configuring options.
    pub fn builder() -> CalibrationOptionsBuilder {
        CalibrationOptionsBuilder::default()
    }

    /// Two-sided significance level implied by the confidence level.
    pub fn alpha(&self) -> f64 {
        1.0 - self.confidence_level
    }
}

/// Builder for [`CalibrationOptions`].
#[derive(Debug, Clone, Default)]
pub struct CalibrationOptionsBuilder {
    confidence_level: Option<f64>,
}

impl CalibrationOptionsBuilder {
    /// Set the confidence level for expanded uncertainties.
    pub fn confidence_level(mut self, level: f64) -> Self {
        self.confidence_level = Some(level);
        self
    }

    /// Validate and build the options.
    pub fn build(self) -> Result<CalibrationOptions, OptionsError> {
        let confidence_level = self.confidence_level.unwrap_or(0.95);
        if !(confidence_level > 0.0 && confidence_level < 1.0) {
            return Err(OptionsError::InvalidConfidenceLevel(confidence_level));
        }
        Ok(CalibrationOptions { confidence_level })
    }
}
