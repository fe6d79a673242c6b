//! Calibration plot rendering.
//!
//! Presentation only: this module consumes the fitted state (points, slope,
//! intercept, R²) and draws a scatter plot with the regression line,
//! annotated with the fit equation. Rendering goes to an SVG file so no
//! native font or raster dependencies are pulled in.

use std::path::Path;

use plotters::prelude::*;
use thiserror::Error;

use crate::model::FittedCalibration;

/// Errors while rendering the calibration plot.
#[derive(Debug, Error)]
pub enum PlotError {
    #[error("nothing to plot: data bounds are degenerate or non-finite")]
    DegenerateBounds,

    #[error("drawing error: {0}")]
    Draw(String),
}

const PLOT_SIZE: (u32, u32) = (800, 600);

/// Render the calibration scatter plot with its regression line to `path`
/// as an SVG image, annotated with the fit equation and R².
pub fn calplot(
    fitted: &FittedCalibration,
    xlab: &str,
    ylab: &str,
    path: &Path,
) -> Result<(), PlotError> {
    let points: Vec<(f64, f64)> = fitted
        .x()
        .iter()
        .zip(fitted.y().iter())
        .map(|(&x, &y)| (x, y))
        .collect();

    let (x_range, y_range) = plot_bounds(&points, fitted)?;

    let root = SVGBackend::new(path, PLOT_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(draw_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Calibration curve", ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range.clone(), y_range)
        .map_err(draw_err)?;

    chart
        .configure_mesh()
        .x_desc(xlab)
        .y_desc(ylab)
        .draw()
        .map_err(draw_err)?;

    // Regression line across the full x-range.
    let line = [
        (x_range.start, fitted.slope() * x_range.start + fitted.intercept()),
        (x_range.end, fitted.slope() * x_range.end + fitted.intercept()),
    ];
    chart
        .draw_series(LineSeries::new(line, &RED))
        .map_err(draw_err)?;

    chart
        .draw_series(
            points
                .iter()
                .map(|&(x, y)| Circle::new((x, y), 4, BLUE.filled())),
        )
        .map_err(draw_err)?;

    root.draw(&Text::new(
        format!("y = {:.3}x + {:.3}", fitted.slope(), fitted.intercept()),
        (80, 50),
        ("sans-serif", 16),
    ))
    .map_err(draw_err)?;
    root.draw(&Text::new(
        format!("R-squared = {:.4}", fitted.r_squared()),
        (80, 70),
        ("sans-serif", 16),
    ))
    .map_err(draw_err)?;

    root.present().map_err(draw_err)?;
    Ok(())
}

fn draw_err<E: std::fmt::Display>(e: E) -> PlotError {
    PlotError::Draw(e.to_string())
}

fn plot_bounds(
    points: &[(f64, f64)],
    fitted: &FittedCalibration,
) -> Result<(std::ops::Range<f64>, std::ops::Range<f64>), PlotError> {
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;

    for &(x, y) in points {
        x_min = x_min.min(x);
        x_max = x_max.max(x);
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }
    // The line endpoints may lie outside the scatter in either direction.
    for &y in [
        fitted.slope() * x_min + fitted.intercept(),
        fitted.slope() * x_max + fitted.intercept(),
    ]
    .iter()
    {
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }

    if !(x_min.is_finite() && x_max.is_finite() && y_min.is_finite() && y_max.is_finite())
        || x_max <= x_min
    {
        return Err(PlotError::DegenerateBounds);
    }

    let x_pad = (x_max - x_min) * 0.05;
    let y_span = y_max - y_min;
    let y_pad = if y_span > 0.0 { y_span * 0.05 } else { 1.0 };

    Ok((
        (x_min - x_pad)..(x_max + x_pad),
        (y_min - y_pad)..(y_max + y_pad),
    ))
}
