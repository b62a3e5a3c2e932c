//! Cross-sectional z-score standardization.
//!
//! Uses sample standard deviation (ddof = 1) for every factor series. A
//! series with fewer than 2 members or zero variance is degenerate: every
//! z-score becomes the 0 sentinel, which nullifies that factor's composite
//! contribution instead of propagating NaN.

use crate::config::Direction;

/// A standardized factor series.
#[derive(Debug, Clone, PartialEq)]
pub struct StandardizedSeries {
    /// Z-scores, in input order. All zeros when degenerate.
    pub zscores: Vec<f64>,
    /// Whether the sentinel was applied.
    pub degenerate: bool,
}

/// Arithmetic mean of a series.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (ddof = 1). Zero for fewer than 2 values.
pub fn sample_std(values: &[f64]) -> f64 {
    let n = values.len();
    if n < 2 {
        return 0.0;
    }
    let m = mean(values);
    let ss: f64 = values.iter().map(|v| (v - m).powi(2)).sum();
    (ss / (n - 1) as f64).sqrt()
}

/// Standardize a series to mean 0, sample standard deviation 1.
pub fn standardize(values: &[f64]) -> StandardizedSeries {
    let std = sample_std(values);
    if values.len() < 2 || std <= 0.0 || !std.is_finite() {
        return StandardizedSeries {
            zscores: vec![0.0; values.len()],
            degenerate: true,
        };
    }

    let m = mean(values);
    StandardizedSeries {
        zscores: values.iter().map(|v| (v - m) / std).collect(),
        degenerate: false,
    }
}

/// Standardize and orient a series so a positive z-score is attractive.
///
/// Lower-is-better factors are sign-inverted after standardization. The
/// degenerate sentinel stays exactly 0 regardless of direction.
pub fn standardize_oriented(values: &[f64], direction: Direction) -> StandardizedSeries {
    let mut series = standardize(values);
    if !series.degenerate && direction.sign() < 0.0 {
        for z in &mut series.zscores {
            *z = -*z;
        }
    }
    series
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sample_std_ddof_one() {
        // Sample std of [2, 4, 4, 4, 5, 5, 7, 9] is ~2.138 (population: 2.0)
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_relative_eq!(sample_std(&values), 2.13809, epsilon = 1e-5);
    }

    #[test]
    fn test_zscores_mean_zero_std_one() {
        let values = [10.0, 20.0, 35.0, 50.0, 90.0];
        let series = standardize(&values);
        assert!(!series.degenerate);

        assert_relative_eq!(mean(&series.zscores), 0.0, epsilon = 1e-12);
        assert_relative_eq!(sample_std(&series.zscores), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_variance_sentinel() {
        let series = standardize(&[10.0, 10.0, 10.0]);
        assert!(series.degenerate);
        assert_eq!(series.zscores, vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_single_value_sentinel() {
        let series = standardize(&[42.0]);
        assert!(series.degenerate);
        assert_eq!(series.zscores, vec![0.0]);
    }

    #[test]
    fn test_empty_series_sentinel() {
        let series = standardize(&[]);
        assert!(series.degenerate);
        assert!(series.zscores.is_empty());
    }

    #[test]
    fn test_lower_is_better_inverts() {
        let values = [5.0, 10.0, 15.0];
        let direct = standardize_oriented(&values, Direction::HigherIsBetter);
        let inverted = standardize_oriented(&values, Direction::LowerIsBetter);

        for (d, i) in direct.zscores.iter().zip(&inverted.zscores) {
            assert_relative_eq!(*d, -*i, epsilon = 1e-12);
        }
        // Lower raw value gets the higher oriented score
        assert!(inverted.zscores[0] > inverted.zscores[2]);
    }

    #[test]
    fn test_degenerate_sentinel_unaffected_by_inversion() {
        let series = standardize_oriented(&[3.0, 3.0], Direction::LowerIsBetter);
        assert!(series.degenerate);
        assert_eq!(series.zscores, vec![0.0, 0.0]);
    }
}
