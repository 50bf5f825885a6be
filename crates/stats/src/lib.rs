//! Statistical primitives shared by the skill-scoring crates.

/// Filter two aligned slices down to the pairs where neither value is NaN.
///
/// NaN is the missing-value marker: an index where either side is NaN is
/// dropped from the result. Infinities are data, not markers, and are kept.
pub fn valid_pairs(x: &[f64], y: &[f64]) -> Vec<(f64, f64)> {
    x.iter()
        .zip(y.iter())
        .filter(|(xi, yi)| !xi.is_nan() && !yi.is_nan())
        .map(|(xi, yi)| (*xi, *yi))
        .collect()
}

/// Arithmetic mean of a slice. Returns NaN if empty.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return f64::NAN;
    }
    let sum: f64 = data.iter().sum();
    sum / data.len() as f64
}

/// Sum of squared deviations from `center`.
pub fn sum_sq_dev(data: &[f64], center: f64) -> f64 {
    data.iter().map(|&x| (x - center) * (x - center)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_valid_pairs_all_finite() {
        let x = [1.0, 2.0, 3.0];
        let y = [4.0, 5.0, 6.0];
        let pairs = valid_pairs(&x, &y);
        assert_eq!(pairs, vec![(1.0, 4.0), (2.0, 5.0), (3.0, 6.0)]);
    }

    #[test]
    fn test_valid_pairs_drops_nan_on_either_side() {
        let x = [1.0, f64::NAN, 3.0, 4.0];
        let y = [5.0, 6.0, f64::NAN, 8.0];
        let pairs = valid_pairs(&x, &y);
        assert_eq!(pairs, vec![(1.0, 5.0), (4.0, 8.0)]);
    }

    #[test]
    fn test_valid_pairs_keeps_infinities() {
        let x = [1.0, f64::INFINITY];
        let y = [2.0, 3.0];
        let pairs = valid_pairs(&x, &y);
        assert_eq!(pairs.len(), 2);
        assert!(pairs[1].0.is_infinite());
    }

    #[test]
    fn test_valid_pairs_all_nan() {
        let x = [f64::NAN, f64::NAN];
        let y = [1.0, 2.0];
        assert!(valid_pairs(&x, &y).is_empty());
    }

    #[test]
    fn test_mean() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_relative_eq!(mean(&data), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_mean_single() {
        assert_relative_eq!(mean(&[3.5]), 3.5, epsilon = 1e-12);
    }

    #[test]
    fn test_mean_empty_is_nan() {
        assert!(mean(&[]).is_nan());
    }

    #[test]
    fn test_sum_sq_dev() {
        // [1, 2, 3] about 2: 1 + 0 + 1 = 2
        assert_relative_eq!(sum_sq_dev(&[1.0, 2.0, 3.0], 2.0), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_sum_sq_dev_empty() {
        assert_eq!(sum_sq_dev(&[], 0.0), 0.0);
    }

    #[test]
    fn test_sum_sq_dev_constant_about_own_mean() {
        let data = [3.0, 3.0, 3.0];
        assert_eq!(sum_sq_dev(&data, mean(&data)), 0.0);
    }
}
