//! Calibration model fitting and inverse prediction.

use faer::Col;
use thiserror::Error;

use crate::core::{CalibrationOptions, CalibrationResult, OptionsError};
use crate::diagnostics::LinestStats;
use crate::inference::{hibbert_standard_uncertainty, sxhat, t_critical, InversePrediction};
use crate::report;

/// Errors that can occur while building, fitting or querying a calibration.
#[derive(Debug, Error)]
pub enum CalibrationError {
    #[error("dimension mismatch: x has {x_len} elements but y has {y_len}")]
    DimensionMismatch { x_len: usize, y_len: usize },

    #[error("insufficient observations: need at least {needed}, got {got}")]
    InsufficientObservations { needed: usize, got: usize },

    #[error("all calibration x-values are identical; the slope is undefined")]
    ConstantPredictor,

    #[error("fitted slope is zero; inverse prediction is undefined")]
    DegenerateSlope,

    #[error("significance level must be in (0, 1), got {0}")]
    InvalidAlpha(f64),

    #[error("replicate count must be at least 1")]
    InvalidReplicates,

    #[error("inverse prediction needs at least one observed response")]
    EmptyUnknown,

    #[error("invalid options: {0}")]
    InvalidOptions(#[from] OptionsError),

    #[error("numerical error: {0}")]
    NumericalError(String),
}

/// An unfitted calibration: the standard concentrations `x` paired with their
/// measured responses `y`.
///
/// Construction validates the data (equal lengths, at least three points so
/// the residual degrees of freedom are positive). Fitting consumes nothing:
/// `fit` borrows the model and returns a [`FittedCalibration`] carrying all
/// derived statistics, so no statistic is reachable before a fit has run.
#[derive(Debug, Clone)]
pub struct CalibrationModel {
    x: Col<f64>,
    y: Col<f64>,
    options: CalibrationOptions,
}

impl CalibrationModel {
    /// Minimum number of calibration points (df = n - 2 must be positive).
    pub const MIN_POINTS: usize = 3;

    /// Create a calibration model from concentration and response vectors.
    pub fn new(x: Col<f64>, y: Col<f64>) -> Result<Self, CalibrationError> {
        Self::with_options(x, y, CalibrationOptions::default())
    }

    /// Create a calibration model with explicit options.
    pub fn with_options(
        x: Col<f64>,
        y: Col<f64>,
        options: CalibrationOptions,
    ) -> Result<Self, CalibrationError> {
        if x.nrows() != y.nrows() {
            return Err(CalibrationError::DimensionMismatch {
                x_len: x.nrows(),
                y_len: y.nrows(),
            });
        }
        if x.nrows() < Self::MIN_POINTS {
            return Err(CalibrationError::InsufficientObservations {
                needed: Self::MIN_POINTS,
                got: x.nrows(),
            });
        }
        Ok(Self { x, y, options })
    }

    /// Convenience constructor from slices.
    pub fn from_slices(x: &[f64], y: &[f64]) -> Result<Self, CalibrationError> {
        let x = Col::from_fn(x.len(), |i| x[i]);
        let y = Col::from_fn(y.len(), |i| y[i]);
        Self::new(x, y)
    }

    /// The calibration concentrations.
    pub fn x(&self) -> &Col<f64> {
        &self.x
    }

    /// The calibration responses.
    pub fn y(&self) -> &Col<f64> {
        &self.y
    }

    /// Number of calibration points.
    pub fn n_points(&self) -> usize {
        self.x.nrows()
    }

    /// Residual degrees of freedom (n - 2).
    pub fn df_resid(&self) -> usize {
        self.n_points() - 2
    }

    /// Fit the calibration line by ordinary least squares.
    ///
    /// Uses the closed-form two-variable formulas (sums of squares and
    /// cross-products). Fails with [`CalibrationError::ConstantPredictor`]
    /// when every x-value is identical.
    pub fn fit(&self) -> Result<FittedCalibration, CalibrationError> {
        let n = self.n_points();
        let nf = n as f64;

        let x_bar = self.x.iter().sum::<f64>() / nf;
        let y_bar = self.y.iter().sum::<f64>() / nf;

        let sxx: f64 = self.x.iter().map(|&xi| (xi - x_bar).powi(2)).sum();
        let syy: f64 = self.y.iter().map(|&yi| (yi - y_bar).powi(2)).sum();
        let sxy: f64 = self
            .x
            .iter()
            .zip(self.y.iter())
            .map(|(&xi, &yi)| (xi - x_bar) * (yi - y_bar))
            .sum();

        if sxx == 0.0 {
            return Err(CalibrationError::ConstantPredictor);
        }

        let slope = sxy / sxx;
        let intercept = y_bar - slope * x_bar;

        let fitted_values = Col::from_fn(n, |i| slope * self.x[i] + intercept);
        let residuals = Col::from_fn(n, |i| self.y[i] - fitted_values[i]);
        let sse: f64 = residuals.iter().map(|&r| r * r).sum();

        let df_resid = self.df_resid();
        let syx = (sse / df_resid as f64).sqrt();

        // Constant response: a flat line fits it exactly.
        let r_squared = if syy == 0.0 {
            1.0
        } else {
            (sxy * sxy) / (sxx * syy)
        };

        let slope_std_err = syx / sxx.sqrt();
        let sum_x_sq: f64 = self.x.iter().map(|&xi| xi * xi).sum();
        let intercept_std_err = slope_std_err * (sum_x_sq / nf).sqrt();

        let result = CalibrationResult {
            slope,
            intercept,
            r_squared,
            slope_std_err,
            intercept_std_err,
            fitted_values,
            residuals,
            sse,
            syx,
            n_points: n,
            df_resid,
            confidence_level: self.options.confidence_level,
        };

        Ok(FittedCalibration {
            x: self.x.clone(),
            y: self.y.clone(),
            y_bar,
            sxx,
            result,
        })
    }
}

/// A fitted calibration line.
///
/// Holds the calibration data alongside the [`CalibrationResult`]; every
/// derived statistic and the inverse-prediction entry points live here.
#[derive(Debug, Clone)]
pub struct FittedCalibration {
    x: Col<f64>,
    y: Col<f64>,
    y_bar: f64,
    sxx: f64,
    result: CalibrationResult,
}

impl FittedCalibration {
    /// Access the full fit result.
    pub fn result(&self) -> &CalibrationResult {
        &self.result
    }

    /// The calibration concentrations.
    pub fn x(&self) -> &Col<f64> {
        &self.x
    }

    /// The calibration responses.
    pub fn y(&self) -> &Col<f64> {
        &self.y
    }

    /// Slope of the calibration line.
    pub fn slope(&self) -> f64 {
        self.result.slope
    }

    /// Intercept of the calibration line.
    pub fn intercept(&self) -> f64 {
        self.result.intercept
    }

    /// Coefficient of determination (R²).
    pub fn r_squared(&self) -> f64 {
        self.result.r_squared
    }

    /// Standard error of the slope estimate.
    pub fn slope_std_err(&self) -> f64 {
        self.result.slope_std_err
    }

    /// Fitted values on the calibration points.
    pub fn fitted_values(&self) -> &Col<f64> {
        &self.result.fitted_values
    }

    /// Residuals on the calibration points.
    pub fn residuals(&self) -> &Col<f64> {
        &self.result.residuals
    }

    /// Sum of squared residuals.
    pub fn sse(&self) -> f64 {
        self.result.sse
    }

    /// Standard error of the regression (residual standard deviation).
    pub fn syx(&self) -> f64 {
        self.result.syx
    }

    /// Mean of the calibration responses.
    pub fn mean_response(&self) -> f64 {
        self.y_bar
    }

    /// Sum of squared deviations of the calibration concentrations.
    pub fn sxx(&self) -> f64 {
        self.sxx
    }

    /// Two-sided critical t-value at significance level `alpha` and the
    /// fit's residual degrees of freedom.
    pub fn t_critical(&self, alpha: f64) -> Result<f64, CalibrationError> {
        t_critical(alpha, self.result.df_resid)
    }

    /// Standard uncertainty of a predicted concentration when the unknown was
    /// measured `test_replicates` times: (Syx/slope) * sqrt(1/m + 1/n).
    pub fn sxhat(&self, test_replicates: usize) -> Result<f64, CalibrationError> {
        sxhat(
            self.result.syx,
            self.result.slope,
            test_replicates,
            self.result.n_points,
        )
    }

    /// Expanded uncertainty of a predicted concentration at the fit's
    /// confidence level: sxhat times the critical t-value.
    pub fn expanded_uncertainty(&self, test_replicates: usize) -> Result<f64, CalibrationError> {
        let t = self.t_critical(1.0 - self.result.confidence_level)?;
        Ok(self.sxhat(test_replicates)? * t)
    }

    /// Hibbert standard uncertainty for an unknown measured `test_repeats`
    /// times with replicate standard deviation `sr` and mean response `y0`.
    ///
    /// The calibration-set quantities in the formula (mean response, Sxx) come
    /// from the fitted data. Multiply by [`Self::t_critical`] to expand.
    pub fn hibbert_standard_uncertainty(
        &self,
        sr: f64,
        test_repeats: usize,
        y0: f64,
    ) -> Result<f64, CalibrationError> {
        hibbert_standard_uncertainty(
            self.result.syx,
            self.result.slope,
            self.result.n_points,
            sr,
            test_repeats,
            y0,
            self.y_bar,
            self.sxx,
        )
    }

    /// Predict the concentration of an unknown sample from its observed
    /// responses, with expanded uncertainty at the fit's confidence level.
    ///
    /// With two or more observations the replicate mean, count and standard
    /// deviation feed Hibbert's formula. With a single observation the
    /// single-replicate uncertainty [`Self::expanded_uncertainty`] is used
    /// with a replicate count of one; note that this term depends only on the
    /// fit, not on the observed response value.
    pub fn inverse_prediction(
        &self,
        unknown: &[f64],
    ) -> Result<InversePrediction, CalibrationError> {
        if unknown.is_empty() {
            return Err(CalibrationError::EmptyUnknown);
        }
        if self.result.slope == 0.0 {
            return Err(CalibrationError::DegenerateSlope);
        }

        let t = self.t_critical(1.0 - self.result.confidence_level)?;

        if unknown.len() > 1 {
            let m = unknown.len();
            let y0 = unknown.iter().sum::<f64>() / m as f64;
            // Population standard deviation of the replicate measurements.
            let sr = (unknown.iter().map(|&v| (v - y0).powi(2)).sum::<f64>() / m as f64).sqrt();

            let predicted = (y0 - self.result.intercept) / self.result.slope;
            let standard = self.hibbert_standard_uncertainty(sr, m, y0)?;

            Ok(InversePrediction {
                predicted,
                expanded_uncertainty: standard * t,
                coverage_factor: t,
            })
        } else {
            let predicted = (unknown[0] - self.result.intercept) / self.result.slope;

            Ok(InversePrediction {
                predicted,
                expanded_uncertainty: self.sxhat(1)? * t,
                coverage_factor: t,
            })
        }
    }

    /// LINEST-style regression diagnostics.
    pub fn linest_stats(&self) -> LinestStats {
        LinestStats::compute(&self.x, self.y_bar, self.sxx, &self.result)
    }

    /// Human-readable summary of the fit (R², slope, intercept).
    pub fn summary(&self) -> String {
        report::fit_summary(&self.result)
    }
}
