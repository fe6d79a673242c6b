//! Formatted terminal output.
//!
//! Formatting is kept in one place so the fitting code stays clean and
//! testable, and output changes stay localized.

use crate::core::CalibrationResult;
use crate::diagnostics::LinestStats;

/// Format the fit summary (R², slope, intercept).
pub fn fit_summary(result: &CalibrationResult) -> String {
    let mut out = String::new();
    out.push_str("Calibration curve\n");
    out.push_str(&format!("R2 = {}\n", result.r_squared));
    out.push_str(&format!("Slope = {}\n", result.slope));
    out.push_str(&format!("Intercept = {}\n", result.intercept));
    out
}

/// Format the LINEST-style statistics as an aligned two-column table.
pub fn linest_table(stats: &LinestStats) -> String {
    let rows = stats.rows();
    let name_width = rows.iter().map(|(name, _)| name.len()).max().unwrap_or(0);

    let mut out = String::new();
    for (name, value) in rows {
        out.push_str(&format!("{name:<name_width$}  {value:>14.6}\n"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CalibrationModel;

    #[test]
    fn summary_reports_fit_coefficients() {
        let model =
            CalibrationModel::from_slices(&[1.0, 2.0, 3.0, 4.0, 5.0], &[2.0, 4.0, 6.0, 8.0, 10.0])
                .unwrap();
        let fitted = model.fit().unwrap();
        let summary = fit_summary(fitted.result());

        assert!(summary.starts_with("Calibration curve"));
        assert!(summary.contains("R2 = 1"));
        assert!(summary.contains("Slope = 2"));
        assert!(summary.contains("Intercept = 0"));
    }

    #[test]
    fn linest_table_has_one_line_per_statistic() {
        let model =
            CalibrationModel::from_slices(&[1.0, 2.0, 3.0, 4.0, 5.0], &[2.1, 3.9, 6.2, 7.8, 10.1])
                .unwrap();
        let fitted = model.fit().unwrap();
        let table = linest_table(&fitted.linest_stats());

        assert_eq!(table.lines().count(), 9);
        assert!(table.contains("F-statistic"));
        assert!(table.contains("Uncertainty in slope"));
    }
}
