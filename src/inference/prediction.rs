//! Inverse-prediction result type.

use std::fmt;

/// Result of an inverse prediction: the estimated concentration of an unknown
/// sample together with its expanded uncertainty.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InversePrediction {
    /// Predicted concentration: (y0 - intercept) / slope.
    pub predicted: f64,

    /// Expanded uncertainty (standard uncertainty times the coverage factor).
    pub expanded_uncertainty: f64,

    /// Coverage factor applied (the two-sided critical t-value).
    pub coverage_factor: f64,
}

impl InversePrediction {
    /// Lower bound of the coverage interval.
    pub fn lower(&self) -> f64 {
        self.predicted - self.expanded_uncertainty
    }

    /// Upper bound of the coverage interval.
    pub fn upper(&self) -> f64 {
        self.predicted + self.expanded_uncertainty
    }
}

impl fmt::Display for InversePrediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ± {}", self.predicted, self.expanded_uncertainty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_plus_minus() {
        let p = InversePrediction {
            predicted: 2.5,
            expanded_uncertainty: 0.125,
            coverage_factor: 3.182446,
        };
        assert_eq!(p.to_string(), "2.5 ± 0.125");
    }

    #[test]
    fn interval_bounds() {
        let p = InversePrediction {
            predicted: 2.5,
            expanded_uncertainty: 0.5,
            coverage_factor: 2.0,
        };
        assert_eq!(p.lower(), 2.0);
        assert_eq!(p.upper(), 3.0);
    }
}
