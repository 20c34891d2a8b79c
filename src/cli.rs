//! CLI argument parsing for latency-cdf

use crate::display::RenderTarget;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Machine-readable dump of the computed CDF table
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TableFormat {
    /// `latency,cdf` rows
    Csv,
    /// Points plus percentile summary
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "latency-cdf")]
#[command(version)]
#[command(about = "Plot the empirical CDF of latency samples", long_about = None)]
pub struct Cli {
    /// Text file with one latency sample (seconds) per line
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Write the chart as SVG to PATH instead of opening a viewer
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Viewer command used when no --output is given (default: platform opener)
    #[arg(long = "viewer", value_name = "CMD", env = "LATENCY_CDF_VIEWER")]
    pub viewer: Option<String>,

    /// Skip rendering the chart
    #[arg(long = "no-plot", conflicts_with = "output")]
    pub no_plot: bool,

    /// Print the CDF table to stdout
    #[arg(long = "table", value_enum, value_name = "FORMAT")]
    pub table: Option<TableFormat>,

    /// Print a percentile summary to stderr
    #[arg(short = 's', long = "summary")]
    pub summary: bool,

    /// Chart width in pixels
    #[arg(
        long = "width",
        default_value_t = 800,
        value_parser = clap::value_parser!(u32).range(100..)
    )]
    pub width: u32,

    /// Chart height in pixels
    #[arg(
        long = "height",
        default_value_t = 600,
        value_parser = clap::value_parser!(u32).range(100..)
    )]
    pub height: u32,

    /// Enable debug tracing on stderr
    #[arg(long = "debug")]
    pub debug: bool,
}

impl Cli {
    /// Where the chart should go, or `None` with --no-plot
    pub fn render_target(&self) -> Option<RenderTarget> {
        if self.no_plot {
            return None;
        }
        Some(match &self.output {
            Some(path) => RenderTarget::File(path.clone()),
            None => RenderTarget::Viewer {
                command: self.viewer.clone(),
            },
        })
    }
}
