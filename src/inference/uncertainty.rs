//! Standard-uncertainty formulas for inverse prediction.
//!
//! These are free functions over scalars so they can be checked against the
//! literature values independently of the fit pipeline. The fitted model wires
//! its own state (Syx, slope, calibration means) into them.

use statrs::distribution::{ContinuousCDF, StudentsT};

use crate::model::CalibrationError;

/// Two-sided critical value of the Student t-distribution.
///
/// Returns t such that P(|T| > t) = alpha for T with `df` degrees of freedom,
/// i.e. the quantile at 1 - alpha/2.
pub fn t_critical(alpha: f64, df: usize) -> Result<f64, CalibrationError> {
    if !(alpha > 0.0 && alpha < 1.0) {
        return Err(CalibrationError::InvalidAlpha(alpha));
    }
    let t_dist = StudentsT::new(0.0, 1.0, df as f64)
        .map_err(|e| CalibrationError::NumericalError(e.to_string()))?;
    Ok(t_dist.inverse_cdf(1.0 - alpha / 2.0))
}

/// Standard uncertainty of a predicted concentration, single-replicate form:
///
/// s_x̂ = (Syx / slope) * sqrt(1/m + 1/n)
///
/// where `m` is the number of replicate measurements of the unknown and `n`
/// the number of calibration points.
pub fn sxhat(
    syx: f64,
    slope: f64,
    test_replicates: usize,
    cal_line_points: usize,
) -> Result<f64, CalibrationError> {
    if test_replicates == 0 {
        return Err(CalibrationError::InvalidReplicates);
    }
    if slope == 0.0 {
        return Err(CalibrationError::DegenerateSlope);
    }
    let m = test_replicates as f64;
    let n = cal_line_points as f64;
    Ok((syx / slope) * (1.0 / m + 1.0 / n).sqrt())
}

/// Standard uncertainty of a predicted concentration for replicate unknown
/// measurements, following Hibbert's formulation:
///
/// s_x̂ = (1/slope) * sqrt( sr²/m + Syx²/n + Syx² (y0 - ȳ)² / (slope² Sxx) )
///
/// `sr` is the standard deviation of the replicate unknown measurements, `m`
/// their count, `y0` their mean, `y_bar` the mean calibration response and
/// `sxx` the sum of squared deviations of the calibration x-values. The
/// result is a standard uncertainty; multiplying by the critical t-value
/// yields the expanded uncertainty.
#[allow(clippy::too_many_arguments)]
pub fn hibbert_standard_uncertainty(
    syx: f64,
    slope: f64,
    cal_line_points: usize,
    sr: f64,
    test_repeats: usize,
    y0: f64,
    y_bar: f64,
    sxx: f64,
) -> Result<f64, CalibrationError> {
    if test_repeats == 0 {
        return Err(CalibrationError::InvalidReplicates);
    }
    if slope == 0.0 {
        return Err(CalibrationError::DegenerateSlope);
    }
    if sxx <= 0.0 {
        return Err(CalibrationError::ConstantPredictor);
    }
    let m = test_repeats as f64;
    let n = cal_line_points as f64;
    let syx2 = syx * syx;
    let var = sr * sr / m + syx2 / n + syx2 * (y0 - y_bar).powi(2) / (slope * slope * sxx);
    Ok(var.sqrt() / slope)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn t_critical_matches_tables() {
        // Two-sided 95% critical values.
        assert_relative_eq!(t_critical(0.05, 3).unwrap(), 3.182446, epsilon = 1e-5);
        assert_relative_eq!(t_critical(0.05, 10).unwrap(), 2.228139, epsilon = 1e-5);
        // Two-sided 99%.
        assert_relative_eq!(t_critical(0.01, 3).unwrap(), 5.840909, epsilon = 1e-5);
    }

    #[test]
    fn t_critical_rejects_bad_alpha() {
        assert!(matches!(
            t_critical(0.0, 3),
            Err(CalibrationError::InvalidAlpha(_))
        ));
        assert!(matches!(
            t_critical(1.0, 3),
            Err(CalibrationError::InvalidAlpha(_))
        ));
    }

    #[test]
    fn sxhat_single_replicate() {
        // (0.2 / 2.0) * sqrt(1/1 + 1/5)
        let s = sxhat(0.2, 2.0, 1, 5).unwrap();
        assert_relative_eq!(s, 0.1 * 1.2f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn sxhat_guards() {
        assert!(matches!(
            sxhat(0.2, 2.0, 0, 5),
            Err(CalibrationError::InvalidReplicates)
        ));
        assert!(matches!(
            sxhat(0.2, 0.0, 1, 5),
            Err(CalibrationError::DegenerateSlope)
        ));
    }

    #[test]
    fn hibbert_reduces_when_unknown_sits_on_the_mean() {
        // With sr = 0 and y0 = ȳ the third term vanishes and the formula
        // collapses to (Syx/slope) * sqrt(1/n).
        let s = hibbert_standard_uncertainty(0.2, 2.0, 5, 0.0, 3, 6.0, 6.0, 10.0).unwrap();
        assert_relative_eq!(s, (0.2 / 2.0) * (1.0f64 / 5.0).sqrt(), epsilon = 1e-12);
    }
}
