//! Skill-scoring error types.

/// Errors that can occur while scoring or building a report.
///
/// Numeric degeneracies (zero variance, no valid pairs) are not errors:
/// the affected score comes back as a non-finite float instead.
#[derive(Debug, thiserror::Error)]
pub enum ScoreError {
    /// Modeled and observed arrays differ in shape.
    #[error("shape mismatch: modeled has {modeled} values, observed has {observed}")]
    ShapeMismatch { modeled: usize, observed: usize },

    /// A requested score name is not in the registry.
    #[error("unknown score '{name}'")]
    UnknownScore { name: String },

    /// JSON serialization failed.
    #[error("serialization error: {reason}")]
    Serialization { reason: String },
}
