//! JSON output format for the CDF table

use crate::cdf::Cdf;
use crate::stats::CdfSummary;
use serde::Serialize;

/// A single point on the CDF curve
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JsonPoint {
    /// Latency in seconds
    pub latency: f64,
    /// Fraction of samples <= `latency`
    pub cdf: f64,
}

/// Complete JSON document
#[derive(Debug, Clone, Serialize)]
pub struct JsonOutput {
    /// Format version
    pub version: String,
    /// Number of samples
    pub count: usize,
    /// Curve points in ascending latency order
    pub points: Vec<JsonPoint>,
    /// Percentile summary
    pub summary: CdfSummary,
}

impl JsonOutput {
    /// Build the document for a computed CDF
    pub fn new(cdf: &Cdf) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            count: cdf.len(),
            points: cdf
                .points()
                .map(|(latency, cdf)| JsonPoint { latency, cdf })
                .collect(),
            summary: CdfSummary::from_cdf(cdf),
        }
    }

    /// Serialize to pretty JSON
    ///
    /// Non-finite latencies have no JSON representation and come out as `null`.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
