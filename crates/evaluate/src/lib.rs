//! Skill scores for comparing a modeled dataset against observations.
//!
//! Four agreement metrics over paired float arrays with NaN-marked
//! missing values: the Murphy skill score (Murphy 1988), the Pearson
//! correlation coefficient, the coefficient of determination, and the
//! Wilmott skill score (Wilmott 1981). A read-only registry exposes the
//! scores by display name, and [`score_report`] tabulates every score
//! for a batch of named (region, variable) sample pairs.
//!
//! The crate does no I/O: arrays come from an external data-loading
//! collaborator and the report goes to an external formatting one.

mod config;
mod error;
mod input;
mod output;
mod registry;
mod scoring;

pub use config::ReportConfig;
pub use error::ScoreError;
pub use input::SamplePair;
pub use output::{to_json, ConfigSummary, PairScores, ScoreReport, ScoreValue};
pub use registry::{
    find, ScoreFn, DETERMINATION_R2, MURPHY_SS, PEARSON_R, SKILL_SCORES, WILMOTT_SSW,
};
pub use scoring::{
    coefficient_of_determination, murphy_skill_score, pearson_correlation_coefficient,
    wilmott_skill_score, MurphyRating,
};

use tracing::{debug, warn};

/// Compute every selected score for every sample pair.
///
/// Scores appear in registry order (or the order given by
/// [`ReportConfig::with_scores`]). A score that comes out non-finite is
/// reported as `None` rather than aborting the batch; one degenerate
/// region must not take down a report covering many.
///
/// # Errors
///
/// Returns [`ScoreError::UnknownScore`] if the configuration names a
/// score absent from the registry, or [`ScoreError::ShapeMismatch`] if a
/// pair's arrays disagree in length.
pub fn score_report(
    pairs: &[SamplePair<'_>],
    config: &ReportConfig,
) -> Result<ScoreReport, ScoreError> {
    let selected = select_scores(config)?;

    let mut entries = Vec::with_capacity(pairs.len());
    for pair in pairs {
        let n_valid = skill_stats::valid_pairs(pair.modeled(), pair.observed()).len();
        debug!(
            region = pair.region(),
            variable = pair.variable(),
            n_samples = pair.len(),
            n_valid,
            "scoring sample pair"
        );

        let mut scores = Vec::with_capacity(selected.len());
        let mut murphy_rating = None;
        for &(name, score_fn) in &selected {
            let raw = score_fn(pair.modeled(), pair.observed())?;
            let value = if raw.is_finite() {
                Some(raw)
            } else {
                warn!(
                    region = pair.region(),
                    variable = pair.variable(),
                    score = name,
                    "score is undefined for this sample pair"
                );
                None
            };
            if name == MURPHY_SS {
                murphy_rating = MurphyRating::classify(raw);
            }
            scores.push(ScoreValue {
                name: name.to_string(),
                value,
            });
        }

        entries.push(PairScores {
            region: pair.region().to_string(),
            variable: pair.variable().to_string(),
            n_samples: pair.len(),
            n_valid,
            scores,
            murphy_rating,
        });
    }

    Ok(ScoreReport {
        config: ConfigSummary {
            scores: selected.iter().map(|&(n, _)| n.to_string()).collect(),
            n_pairs: pairs.len(),
        },
        pairs: entries,
    })
}

/// Resolve the configured score selection against the registry.
fn select_scores(config: &ReportConfig) -> Result<Vec<(&'static str, ScoreFn)>, ScoreError> {
    if config.scores().is_empty() {
        return Ok(SKILL_SCORES.to_vec());
    }

    let mut selected = Vec::with_capacity(config.scores().len());
    for name in config.scores() {
        match SKILL_SCORES.iter().find(|(n, _)| *n == name.as_str()) {
            Some(&entry) => selected.push(entry),
            None => {
                return Err(ScoreError::UnknownScore { name: name.clone() });
            }
        }
    }
    Ok(selected)
}
