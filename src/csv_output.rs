//! CSV output format for the CDF table
//!
//! `latency,cdf` header followed by one row per sample, ascending.

use crate::cdf::Cdf;

/// CSV output formatter
#[derive(Debug)]
pub struct CsvOutput<'a> {
    cdf: &'a Cdf,
}

impl<'a> CsvOutput<'a> {
    /// Create a CSV formatter over a computed CDF
    pub fn new(cdf: &'a Cdf) -> Self {
        Self { cdf }
    }

    /// Generate CSV header row
    fn header() -> &'static str {
        "latency,cdf"
    }

    /// Generate CSV output as string
    pub fn to_csv(&self) -> String {
        let mut output = String::with_capacity(self.cdf.len() * 24);

        output.push_str(Self::header());
        output.push('\n');

        for (latency, probability) in self.cdf.points() {
            output.push_str(&format!("{},{}\n", latency, probability));
        }

        output
    }
}
