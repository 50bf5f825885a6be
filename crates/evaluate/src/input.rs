//! Validated sample-pair inputs.

use crate::error::ScoreError;

/// A named pair of aligned model/observation arrays.
///
/// The arrays are borrowed from the caller (typically flattened field
/// values produced by an external data-loading pipeline) and validated
/// to have the same length at construction.
#[derive(Debug, Clone)]
pub struct SamplePair<'a> {
    region: String,
    variable: String,
    modeled: &'a [f64],
    observed: &'a [f64],
}

impl<'a> SamplePair<'a> {
    /// Create a sample pair for a (region, variable) combination.
    ///
    /// # Errors
    ///
    /// Returns [`ScoreError::ShapeMismatch`] if the arrays differ in
    /// length.
    pub fn new(
        region: impl Into<String>,
        variable: impl Into<String>,
        modeled: &'a [f64],
        observed: &'a [f64],
    ) -> Result<Self, ScoreError> {
        if modeled.len() != observed.len() {
            return Err(ScoreError::ShapeMismatch {
                modeled: modeled.len(),
                observed: observed.len(),
            });
        }
        Ok(Self {
            region: region.into(),
            variable: variable.into(),
            modeled,
            observed,
        })
    }

    /// Returns the region name.
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Returns the variable name.
    pub fn variable(&self) -> &str {
        &self.variable
    }

    /// Returns the modeled values.
    pub fn modeled(&self) -> &[f64] {
        self.modeled
    }

    /// Returns the observed values.
    pub fn observed(&self) -> &[f64] {
        self.observed
    }

    /// Returns the number of aligned samples (including missing ones).
    pub fn len(&self) -> usize {
        self.modeled.len()
    }

    /// Returns true if the pair holds no samples.
    pub fn is_empty(&self) -> bool {
        self.modeled.is_empty()
    }
}
