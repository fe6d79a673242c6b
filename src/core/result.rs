//! Calibration fit result structure.

use faer::Col;

/// Complete result from a calibration fit.
///
/// All derived statistics are computed once during the fit and stored here;
/// accessors on the fitted model read this state, so repeated queries are
/// identical by construction.
#[derive(Debug, Clone)]
pub struct CalibrationResult {
    /// Estimated slope of the calibration line.
    pub slope: f64,

    /// Estimated intercept of the calibration line.
    pub intercept: f64,

    /// Coefficient of determination (R²).
    pub r_squared: f64,

    /// Standard error of the slope estimate: Syx / sqrt(Sxx).
    pub slope_std_err: f64,

    /// Standard error of the intercept estimate.
    pub intercept_std_err: f64,

    /// Fitted values: slope * x + intercept.
    pub fitted_values: Col<f64>,

    /// Residuals (y - fitted_values).
    pub residuals: Col<f64>,

    /// Sum of squared residuals.
    pub sse: f64,

    /// Standard error of the regression (residual standard deviation):
    /// sqrt(SSE / (n - 2)).
    pub syx: f64,

    /// Number of calibration points.
    pub n_points: usize,

    /// Residual degrees of freedom (n_points - 2).
    pub df_resid: usize,

    /// Confidence level used when expanding uncertainties.
    pub confidence_level: f64,
}
