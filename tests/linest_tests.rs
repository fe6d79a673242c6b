//! LINEST-style diagnostics tests.

use approx::assert_relative_eq;
use calcurve::{CalibrationModel, FittedCalibration};

fn noisy_fit() -> FittedCalibration {
    CalibrationModel::from_slices(&[1.0, 2.0, 3.0, 4.0, 5.0], &[2.1, 3.9, 6.2, 7.8, 10.1])
        .expect("valid data")
        .fit()
        .expect("fit should succeed")
}

#[test]
fn sum_of_squares_decomposition_holds() {
    let fitted = noisy_fit();
    let stats = fitted.linest_stats();

    // Regression SS + residual SS = total SS about the mean.
    let y_bar = fitted.mean_response();
    let total_ss: f64 = fitted.y().iter().map(|&yi| (yi - y_bar).powi(2)).sum();
    assert_relative_eq!(
        stats.regression_ss + stats.residual_ss,
        total_ss,
        epsilon = 1e-10
    );

    // For a simple regression the regression SS is slope² * Sxx.
    assert_relative_eq!(
        stats.regression_ss,
        fitted.slope() * fitted.slope() * fitted.sxx(),
        epsilon = 1e-10
    );
    assert_relative_eq!(stats.residual_ss, fitted.sse(), epsilon = 1e-12);
}

#[test]
fn coefficient_uncertainties_match_the_standard_formulas() {
    let fitted = noisy_fit();
    let stats = fitted.linest_stats();

    // sqrt(RSS / (df * Sxx)) is exactly the fit's slope standard error.
    assert_relative_eq!(
        stats.slope_uncertainty,
        fitted.slope_std_err(),
        epsilon = 1e-12
    );

    // SE(intercept) = SE(slope) * sqrt(Σx² / n); Σx² = 55 here.
    assert_relative_eq!(
        stats.intercept_uncertainty,
        stats.slope_uncertainty * (55.0f64 / 5.0).sqrt(),
        epsilon = 1e-12
    );

    assert_relative_eq!(stats.std_error_of_regression, fitted.syx(), epsilon = 1e-12);
    assert_eq!(stats.degrees_of_freedom, 3);
}

#[test]
fn f_statistic_equals_the_mean_square_ratio() {
    let fitted = noisy_fit();
    let stats = fitted.linest_stats();

    // One regression degree of freedom, so MSR/MSE = regression SS / Syx².
    let msr = stats.regression_ss / 1.0;
    let mse = stats.residual_ss / stats.degrees_of_freedom as f64;
    assert_relative_eq!(stats.f_statistic, msr / mse, epsilon = 1e-8);
    assert_relative_eq!(stats.f_statistic, 1110.308, epsilon = 1e-2);
}

#[test]
fn rows_expose_every_statistic_in_report_order() {
    let fitted = noisy_fit();
    let rows = fitted.linest_stats().rows();

    let names: Vec<&str> = rows.iter().map(|(name, _)| *name).collect();
    assert_eq!(
        names,
        vec![
            "Slope",
            "Intercept",
            "Uncertainty in slope",
            "Uncertainty in intercept",
            "Standard error of regression",
            "F-statistic",
            "Degrees of freedom",
            "Regression sum of squares",
            "Residual sum of squares",
        ]
    );

    assert_relative_eq!(rows[0].1, fitted.slope(), epsilon = 1e-12);
    assert_relative_eq!(rows[6].1, 3.0, epsilon = 1e-12);
}

#[test]
fn perfect_fit_yields_infinite_f() {
    let fitted =
        CalibrationModel::from_slices(&[1.0, 2.0, 3.0, 4.0, 5.0], &[2.0, 4.0, 6.0, 8.0, 10.0])
            .expect("valid data")
            .fit()
            .expect("fit should succeed");
    let stats = fitted.linest_stats();

    assert!(stats.residual_ss < 1e-20);
    assert!(stats.f_statistic.is_infinite());
    assert!(!stats.f_statistic.is_nan());
}
