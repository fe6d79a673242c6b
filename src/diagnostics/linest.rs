//! LINEST-style regression diagnostics.
//!
//! The battery of statistics a spreadsheet LINEST call reports for a simple
//! linear regression: the coefficient estimates with their standard errors,
//! the sum-of-squares decomposition, the standard error of the regression and
//! the F-statistic for the regression.

use faer::Col;

use crate::core::CalibrationResult;

/// One row of LINEST-style statistics for a fitted calibration line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinestStats {
    /// Slope of the regression line.
    pub slope: f64,

    /// Intercept of the regression line.
    pub intercept: f64,

    /// Standard error of the slope: sqrt(RSS / (df * Sxx)).
    pub slope_uncertainty: f64,

    /// Standard error of the intercept: SE(slope) * sqrt(Σx² / n).
    pub intercept_uncertainty: f64,

    /// Standard error of the regression: sqrt(RSS / df).
    pub std_error_of_regression: f64,

    /// F-statistic for the regression. With a single regression degree of
    /// freedom this is the mean-square ratio MSR/MSE, which reduces to
    /// regression SS divided by the squared standard error of regression.
    pub f_statistic: f64,

    /// Residual degrees of freedom (n - 2).
    pub degrees_of_freedom: usize,

    /// Regression sum of squares: Σ(fitted - ȳ)².
    pub regression_ss: f64,

    /// Residual sum of squares: Σ(y - fitted)².
    pub residual_ss: f64,
}

impl LinestStats {
    pub(crate) fn compute(
        x: &Col<f64>,
        y_bar: f64,
        sxx: f64,
        result: &CalibrationResult,
    ) -> Self {
        let df = result.df_resid as f64;
        let n = result.n_points as f64;

        let regression_ss: f64 = result
            .fitted_values
            .iter()
            .map(|&f| (f - y_bar).powi(2))
            .sum();
        let residual_ss = result.sse;

        let slope_uncertainty = (residual_ss / (df * sxx)).sqrt();
        let sum_x_sq: f64 = x.iter().map(|&xi| xi * xi).sum();
        let intercept_uncertainty = slope_uncertainty * (sum_x_sq / n).sqrt();

        let std_error_of_regression = result.syx;
        let f_statistic = regression_ss / (std_error_of_regression * std_error_of_regression);

        Self {
            slope: result.slope,
            intercept: result.intercept,
            slope_uncertainty,
            intercept_uncertainty,
            std_error_of_regression,
            f_statistic,
            degrees_of_freedom: result.df_resid,
            regression_ss,
            residual_ss,
        }
    }

    /// The statistics as (name, value) rows, for tabular consumers.
    pub fn rows(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("Slope", self.slope),
            ("Intercept", self.intercept),
            ("Uncertainty in slope", self.slope_uncertainty),
            ("Uncertainty in intercept", self.intercept_uncertainty),
            ("Standard error of regression", self.std_error_of_regression),
            ("F-statistic", self.f_statistic),
            ("Degrees of freedom", self.degrees_of_freedom as f64),
            ("Regression sum of squares", self.regression_ss),
            ("Residual sum of squares", self.residual_ss),
        ]
    }
}
