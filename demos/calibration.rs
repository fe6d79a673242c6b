//! # Calibration curve walkthrough
//!
//! Fits a calibration line to a set of standards, prints the fit summary and
//! LINEST-style diagnostics, predicts the concentration of an unknown sample
//! from replicate measurements, and renders the annotated calibration plot.
//!
//! Run with: `cargo run --example calibration`

use calcurve::plot::calplot;
use calcurve::prelude::*;
use calcurve::report;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Calibration standards: concentration (mg/L) vs. instrument response.
    let concentrations = [0.5, 1.0, 2.0, 4.0, 6.0, 8.0];
    let responses = [0.112, 0.207, 0.415, 0.822, 1.235, 1.653];

    let model = CalibrationModel::from_slices(&concentrations, &responses)?;
    let fitted = model.fit()?;

    println!("{}", fitted.summary());

    println!("LINEST statistics:");
    println!("{}", report::linest_table(&fitted.linest_stats()));

    // An unknown sample measured three times.
    let unknown = [0.641, 0.655, 0.648];
    let prediction = fitted.inverse_prediction(&unknown)?;
    println!("Unknown concentration = {prediction} mg/L");
    println!(
        "95% coverage interval: [{:.4}, {:.4}]",
        prediction.lower(),
        prediction.upper()
    );

    let path = std::path::Path::new("calibration_curve.svg");
    calplot(&fitted, "Concentration / mg L⁻¹", "Response", path)?;
    println!("Wrote {}", path.display());

    Ok(())
}
