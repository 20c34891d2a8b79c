//! CDF chart rendering
//!
//! `CdfPlot` is the whole figure description. It owns no drawing state:
//! every render builds a fresh backend, so nothing leaks between calls.

use crate::cdf::Cdf;
use crate::error::{CdfError, Result};
use plotters::chart::SeriesLabelPosition;
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use std::ops::Range;
use std::path::Path;

/// Figure description for a latency CDF chart
#[derive(Debug, Clone, PartialEq)]
pub struct CdfPlot {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub legend: String,
    /// Pixels
    pub width: u32,
    /// Pixels
    pub height: u32,
    pub grid: bool,
    /// Marker radius in pixels
    pub marker_size: u32,
}

impl Default for CdfPlot {
    fn default() -> Self {
        Self {
            title: "CDF of Latencies".to_string(),
            x_label: "Latency (seconds)".to_string(),
            y_label: "CDF".to_string(),
            legend: "CDF of Latencies".to_string(),
            width: 800,
            height: 600,
            grid: true,
            marker_size: 3,
        }
    }
}

fn render_err<E: std::error::Error + Send + Sync>(e: DrawingAreaErrorKind<E>) -> CdfError {
    CdfError::Render(e.to_string())
}

impl CdfPlot {
    /// Override the figure size
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Render the chart as an SVG document
    pub fn render_svg(&self, cdf: &Cdf) -> Result<String> {
        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, (self.width, self.height))
                .into_drawing_area();
            self.draw(&root, cdf)?;
        }
        Ok(svg)
    }

    /// Render the chart and write it to `path`
    pub fn write_svg(&self, cdf: &Cdf, path: &Path) -> Result<()> {
        let svg = self.render_svg(cdf)?;
        std::fs::write(path, svg).map_err(|source| CdfError::Write {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::info!(path = %path.display(), "wrote CDF plot");
        Ok(())
    }

    /// Draw the chart onto any plotters drawing area
    pub fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>, cdf: &Cdf) -> Result<()> {
        let points = drawable_points(cdf);
        let (x_range, y_range) = axis_ranges(&points);

        root.fill(&WHITE).map_err(render_err)?;

        let mut chart = ChartBuilder::on(root)
            .caption(&self.title, ("sans-serif", 24))
            .margin(15)
            .x_label_area_size(45)
            .y_label_area_size(60)
            .build_cartesian_2d(x_range, y_range)
            .map_err(render_err)?;

        let mut mesh = chart.configure_mesh();
        mesh.x_desc(&self.x_label).y_desc(&self.y_label);
        if !self.grid {
            mesh.disable_mesh();
        }
        mesh.draw().map_err(render_err)?;

        let color = BLUE;
        chart
            .draw_series(LineSeries::new(points.iter().copied(), color.stroke_width(2)))
            .map_err(render_err)?
            .label(&self.legend)
            .legend(move |(x, y)| {
                PathElement::new(vec![(x - 10, y), (x + 10, y)], color.stroke_width(2))
            });

        chart
            .draw_series(
                points
                    .iter()
                    .map(|&point| Circle::new(point, self.marker_size, color.filled())),
            )
            .map_err(render_err)?;

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::LowerRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(render_err)?;

        root.present().map_err(render_err)?;
        Ok(())
    }
}

/// Points with a finite latency; NaN and infinities cannot be placed on an axis
fn drawable_points(cdf: &Cdf) -> Vec<(f64, f64)> {
    let points: Vec<(f64, f64)> = cdf.points().filter(|(x, _)| x.is_finite()).collect();

    let skipped = cdf.len() - points.len();
    if skipped > 0 {
        tracing::warn!(skipped, "non-finite latencies left out of the plot");
    }
    points
}

/// Widest x range handed to plotters; its tick arithmetic needs `end - start` finite
const MAX_X_SPAN: f64 = f64::MAX / 2.0;

/// x spans the finite latencies with 5% padding; y always covers [0, 1]
///
/// Data wider than `MAX_X_SPAN` is windowed from the smallest latency up.
fn axis_ranges(points: &[(f64, f64)]) -> (Range<f64>, Range<f64>) {
    let y_range = 0.0..1.05;

    let (lo, hi) = points
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &(x, _)| {
            (lo.min(x), hi.max(x))
        });
    if lo > hi {
        return (0.0..1.0, y_range);
    }

    // Halved operands keep the difference finite for any two finite values
    let half_span = hi / 2.0 - lo / 2.0;
    if half_span > MAX_X_SPAN / 2.0 {
        tracing::warn!(lo, hi, "latency range too wide to plot, clipping the upper end");
        return (lo..lo + MAX_X_SPAN, y_range);
    }

    let span = half_span * 2.0;
    let pad = if span > 0.0 {
        span * 0.05
    } else if lo != 0.0 {
        lo.abs() * 0.05
    } else {
        1.0
    };
    let pad = pad.min((MAX_X_SPAN - span) / 2.0);

    let start = (lo - pad).max(-f64::MAX);
    let end = (hi + pad).min(f64::MAX);
    (start..end, y_range)
}
