//! Percentile summary for --summary mode
//!
//! Works directly on the sorted latencies held by a `Cdf`, so no extra sort
//! is needed.

use crate::cdf::Cdf;
use serde::Serialize;

/// Descriptive statistics over a latency sample set (seconds)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CdfSummary {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub stddev: f64,
    pub p50: f64,
    pub p90: f64,
    pub p95: f64,
    pub p99: f64,
    pub p999: f64,
}

impl CdfSummary {
    /// Summarize the samples behind `cdf`
    pub fn from_cdf(cdf: &Cdf) -> Self {
        let sorted = cdf.latencies();
        let count = sorted.len();

        let mean = sorted.iter().sum::<f64>() / count as f64;
        // Population standard deviation
        let variance = sorted.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / count as f64;

        Self {
            count,
            min: sorted[0],
            max: sorted[count - 1],
            mean,
            stddev: variance.sqrt(),
            p50: percentile(sorted, 50.0),
            p90: percentile(sorted, 90.0),
            p95: percentile(sorted, 95.0),
            p99: percentile(sorted, 99.0),
            p999: percentile(sorted, 99.9),
        }
    }

    /// Print the summary to stderr
    pub fn print(&self) {
        eprint!("{}", self.render());
    }

    /// Render the summary table printed by `print`
    pub fn render(&self) -> String {
        let rows = [
            ("Samples", None),
            ("Min", Some(self.min)),
            ("Mean", Some(self.mean)),
            ("Std Dev", Some(self.stddev)),
            ("Median (P50)", Some(self.p50)),
            ("P90", Some(self.p90)),
            ("P95", Some(self.p95)),
            ("P99", Some(self.p99)),
            ("P99.9", Some(self.p999)),
            ("Max", Some(self.max)),
        ];

        let mut out = String::from("=== Latency Summary ===\n");
        for (label, value) in rows {
            match value {
                Some(seconds) => {
                    out.push_str(&format!("  {:<14}{:.6} s\n", format!("{label}:"), seconds))
                }
                None => out.push_str(&format!("  {:<14}{}\n", format!("{label}:"), self.count)),
            }
        }
        out
    }
}

/// Linearly interpolated percentile over ascending data
///
/// `index = p/100 * (n - 1)`; `percentile` is clamped to `[0, 100]`.
/// Returns 0.0 for empty input.
pub fn percentile(sorted_data: &[f64], percentile: f64) -> f64 {
    let percentile = percentile.clamp(0.0, 100.0);
    if sorted_data.is_empty() {
        return 0.0;
    }
    if sorted_data.len() == 1 {
        return sorted_data[0];
    }

    let index = (percentile / 100.0) * (sorted_data.len() - 1) as f64;
    let lower = index.floor() as usize;
    let upper = index.ceil() as usize;

    if lower == upper {
        sorted_data[lower]
    } else {
        let weight = index - lower as f64;
        sorted_data[lower] * (1.0 - weight) + sorted_data[upper] * weight
    }
}
