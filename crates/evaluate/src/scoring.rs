//! The four skill-score formulas.
//!
//! Each score compares a modeled array against an observed array of the
//! same shape. Indices where either side is NaN are excluded from every
//! sum and mean in a formula, so a missing value behaves exactly like a
//! deleted sample. Degenerate inputs (constant observations, no valid
//! pairs) produce a non-finite score rather than an error; callers check
//! `is_finite` to detect an undefined result.

use serde::Serialize;
use skill_stats::{mean, sum_sq_dev, valid_pairs};

use crate::error::ScoreError;

fn check_shape(modeled: &[f64], observed: &[f64]) -> Result<(), ScoreError> {
    if modeled.len() != observed.len() {
        return Err(ScoreError::ShapeMismatch {
            modeled: modeled.len(),
            observed: observed.len(),
        });
    }
    Ok(())
}

/// Murphy skill score (Murphy 1988).
///
/// `1 - sum((m - o)^2) / sum((o - mean(o))^2)`, i.e. mean-square error
/// relative to the variance of the observations. At most 1 (perfect
/// agreement); 0 means the model predicts no better than the observed
/// mean; negative means worse than the observed mean.
pub fn murphy_skill_score(modeled: &[f64], observed: &[f64]) -> Result<f64, ScoreError> {
    check_shape(modeled, observed)?;
    let pairs = valid_pairs(modeled, observed);

    let rms_error: f64 = pairs.iter().map(|&(m, o)| (m - o) * (m - o)).sum();

    let obs: Vec<f64> = pairs.iter().map(|&(_, o)| o).collect();
    let obs_variance = sum_sq_dev(&obs, mean(&obs));

    Ok(1.0 - rms_error / obs_variance)
}

/// Pearson correlation coefficient r.
///
/// Linear association between model and observations, in [-1, 1].
pub fn pearson_correlation_coefficient(
    modeled: &[f64],
    observed: &[f64],
) -> Result<f64, ScoreError> {
    check_shape(modeled, observed)?;
    let pairs = valid_pairs(modeled, observed);

    let mod_vals: Vec<f64> = pairs.iter().map(|&(m, _)| m).collect();
    let obs_vals: Vec<f64> = pairs.iter().map(|&(_, o)| o).collect();
    let mod_mean = mean(&mod_vals);
    let obs_mean = mean(&obs_vals);

    let cross_covariance: f64 = pairs
        .iter()
        .map(|&(m, o)| (m - mod_mean) * (o - obs_mean))
        .sum();
    let mod_variance = sum_sq_dev(&mod_vals, mod_mean);
    let obs_variance = sum_sq_dev(&obs_vals, obs_mean);

    Ok(cross_covariance / (mod_variance * obs_variance).sqrt())
}

/// Coefficient of determination r^2, the square of the Pearson
/// correlation coefficient. In [0, 1].
pub fn coefficient_of_determination(modeled: &[f64], observed: &[f64]) -> Result<f64, ScoreError> {
    pearson_correlation_coefficient(modeled, observed).map(|r| r * r)
}

/// Wilmott skill score (Wilmott 1981).
///
/// Mean-square error normalized by the "potential error", the squared
/// sum of each series' absolute deviations from its own mean. Typically
/// in [0, 1], with 1 for perfect agreement.
pub fn wilmott_skill_score(modeled: &[f64], observed: &[f64]) -> Result<f64, ScoreError> {
    check_shape(modeled, observed)?;
    let pairs = valid_pairs(modeled, observed);

    let mod_vals: Vec<f64> = pairs.iter().map(|&(m, _)| m).collect();
    let obs_vals: Vec<f64> = pairs.iter().map(|&(_, o)| o).collect();
    let mod_mean = mean(&mod_vals);
    let obs_mean = mean(&obs_vals);

    let mean_square_error: f64 = pairs.iter().map(|&(m, o)| (m - o) * (m - o)).sum();
    let potential_error: f64 = pairs
        .iter()
        .map(|&(m, o)| {
            let dev = (m - mod_mean).abs() + (o - obs_mean).abs();
            dev * dev
        })
        .sum();

    Ok(1.0 - mean_square_error / potential_error)
}

/// Qualitative band for a Murphy skill score, after Allen et al. (2007).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MurphyRating {
    /// Score above 0.65.
    Excellent,
    /// Score in (0.5, 0.65].
    VeryGood,
    /// Score in (0.2, 0.5].
    Good,
    /// Score of 0.2 or below.
    Poor,
}

impl MurphyRating {
    /// Classify a Murphy skill score. Returns None for a non-finite
    /// (undefined) score.
    pub fn classify(score: f64) -> Option<Self> {
        if !score.is_finite() {
            return None;
        }
        Some(if score > 0.65 {
            Self::Excellent
        } else if score > 0.5 {
            Self::VeryGood
        } else if score > 0.2 {
            Self::Good
        } else {
            Self::Poor
        })
    }
}
