//! latency-cdf - empirical CDF plots for latency samples
//!
//! Reads one latency sample (seconds) per line, sorts the samples, computes
//! the empirical cumulative distribution function and renders it as an SVG
//! line chart, either to a file or to a viewer the caller waits on.

pub mod cdf;
pub mod cli;
pub mod csv_output;
pub mod display;
pub mod error;
pub mod json_output;
pub mod plot;
pub mod samples;
pub mod stats;

pub use cdf::Cdf;
pub use error::{CdfError, Result};
