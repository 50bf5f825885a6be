//! Read-only registry of the available skill scores.

use crate::error::ScoreError;
use crate::scoring::{
    coefficient_of_determination, murphy_skill_score, pearson_correlation_coefficient,
    wilmott_skill_score,
};

/// Signature shared by every skill-score function.
pub type ScoreFn = fn(&[f64], &[f64]) -> Result<f64, ScoreError>;

/// Display name of the Murphy skill score.
pub const MURPHY_SS: &str = "Murphy skill score SS";
/// Display name of the Pearson correlation coefficient.
pub const PEARSON_R: &str = "Pearson Correlation Coefficient r";
/// Display name of the coefficient of determination.
pub const DETERMINATION_R2: &str = "Coefficient of determination r^2";
/// Display name of the Wilmott skill score.
pub const WILMOTT_SSW: &str = "Wilmott skill score SSw";

/// Every available score, in report order, keyed by display name.
pub const SKILL_SCORES: &[(&str, ScoreFn)] = &[
    (MURPHY_SS, murphy_skill_score),
    (PEARSON_R, pearson_correlation_coefficient),
    (DETERMINATION_R2, coefficient_of_determination),
    (WILMOTT_SSW, wilmott_skill_score),
];

/// Look up a score function by its display name.
pub fn find(name: &str) -> Option<ScoreFn> {
    SKILL_SCORES
        .iter()
        .find(|(n, _)| *n == name)
        .map(|&(_, f)| f)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_has_four_entries_in_order() {
        let names: Vec<&str> = SKILL_SCORES.iter().map(|&(n, _)| n).collect();
        assert_eq!(
            names,
            vec![MURPHY_SS, PEARSON_R, DETERMINATION_R2, WILMOTT_SSW]
        );
    }

    #[test]
    fn test_registered_functions_match_direct_calls() {
        let modeled = [1.0, 2.0, 3.0, 4.0, 5.0];
        let observed = [1.1, 1.9, 3.2, 3.8, 5.1];

        let direct: [(&str, ScoreFn); 4] = [
            (MURPHY_SS, murphy_skill_score),
            (PEARSON_R, pearson_correlation_coefficient),
            (DETERMINATION_R2, coefficient_of_determination),
            (WILMOTT_SSW, wilmott_skill_score),
        ];

        for (name, direct_fn) in direct {
            let registered = find(name).expect("score should be registered");
            assert_eq!(
                registered(&modeled, &observed).unwrap(),
                direct_fn(&modeled, &observed).unwrap(),
                "registry entry '{}' disagrees with direct call",
                name
            );
        }
    }

    #[test]
    fn test_find_unknown_name() {
        assert!(find("Brier score").is_none());
        assert!(find("").is_none());
    }
}
