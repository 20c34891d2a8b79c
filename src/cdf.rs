//! Empirical cumulative distribution function over latency samples
//!
//! For N samples sorted ascending, the i-th smallest value (1-based) maps to
//! `i / N`. A `Cdf` is never empty: the last probability is exactly 1.0.

use crate::error::{CdfError, Result};
use crate::samples;
use std::path::Path;

/// Sorted latencies paired with their cumulative probabilities
#[derive(Debug, Clone, PartialEq)]
pub struct Cdf {
    latencies: Vec<f64>,
    probabilities: Vec<f64>,
}

impl Cdf {
    /// Build the CDF from unsorted samples
    ///
    /// Returns `None` for an empty sample set, which has no distribution.
    pub fn from_samples(mut samples: Vec<f64>) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }

        sort_samples(&mut samples);
        let probabilities = cdf_values(samples.len());

        Some(Self {
            latencies: samples,
            probabilities,
        })
    }

    /// Load samples from `path` and build their CDF
    pub fn load(path: &Path) -> Result<Self> {
        let samples = samples::load_samples(path)?;
        let cdf = Self::from_samples(samples).ok_or_else(|| CdfError::EmptyInput {
            path: path.to_path_buf(),
        })?;

        tracing::debug!(
            count = cdf.len(),
            min = cdf.latencies[0],
            max = cdf.latencies[cdf.len() - 1],
            "computed CDF"
        );
        Ok(cdf)
    }

    /// Latencies in ascending order
    pub fn latencies(&self) -> &[f64] {
        &self.latencies
    }

    /// Cumulative probability for each entry of `latencies()`
    pub fn probabilities(&self) -> &[f64] {
        &self.probabilities
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.latencies.len()
    }

    /// Always false for a constructed `Cdf`
    pub fn is_empty(&self) -> bool {
        self.latencies.is_empty()
    }

    /// `(latency, probability)` pairs in ascending latency order
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.latencies
            .iter()
            .copied()
            .zip(self.probabilities.iter().copied())
    }
}

/// Sort ascending under IEEE-754 total order
///
/// Stable, and NaN never poisons the comparison: negative NaN sorts first,
/// positive NaN last.
pub fn sort_samples(samples: &mut [f64]) {
    samples.sort_by(f64::total_cmp);
}

/// `[1/n, 2/n, ..., n/n]`
pub fn cdf_values(n: usize) -> Vec<f64> {
    let total = n as f64;
    (1..=n).map(|i| i as f64 / total).collect()
}
