//! JSON output structures for score reports.

use serde::Serialize;

use crate::error::ScoreError;
use crate::scoring::MurphyRating;

/// Top-level score report.
#[derive(Debug, Serialize)]
pub struct ScoreReport {
    /// Configuration summary.
    pub config: ConfigSummary,
    /// One entry per scored (region, variable) sample pair.
    pub pairs: Vec<PairScores>,
}

/// Summary of the configuration used.
#[derive(Debug, Serialize)]
pub struct ConfigSummary {
    pub scores: Vec<String>,
    pub n_pairs: usize,
}

/// Every selected score for one (region, variable) sample pair.
#[derive(Debug, Clone, Serialize)]
pub struct PairScores {
    pub region: String,
    pub variable: String,
    /// Total number of aligned samples, missing ones included.
    pub n_samples: usize,
    /// Number of samples where both sides are present.
    pub n_valid: usize,
    /// Score values in registry order.
    pub scores: Vec<ScoreValue>,
    /// Qualitative band for the Murphy score, when it was computed and
    /// came out finite.
    pub murphy_rating: Option<MurphyRating>,
}

/// A single named score value.
///
/// `None` marks a mathematically undefined (non-finite) result and
/// serializes as `null`; downstream formatting shows it as "undefined"
/// rather than as a float.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreValue {
    pub name: String,
    pub value: Option<f64>,
}

/// Serialize a score report to a JSON string.
pub fn to_json(report: &ScoreReport) -> Result<String, ScoreError> {
    serde_json::to_string_pretty(report).map_err(|e| ScoreError::Serialization {
        reason: e.to_string(),
    })
}
