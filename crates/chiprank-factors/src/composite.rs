//! Composite score construction and 0–100 rescaling.

use crate::config::FactorWeights;

/// Composite scores rescaled to the 0–100 range.
#[derive(Debug, Clone, PartialEq)]
pub struct RescaledScores {
    /// Scores in [0, 100], in input order. All 50 when degenerate.
    pub scores: Vec<f64>,
    /// Whether the midpoint sentinel was applied.
    pub degenerate: bool,
}

/// The midpoint sentinel used when every composite is equal.
pub const MIDPOINT_SENTINEL: f64 = 50.0;

/// Combine oriented z-score series into weighted composites.
///
/// All three slices must have equal length (one entry per included record).
pub fn composite_scores(
    z_valuation: &[f64],
    z_innovation: &[f64],
    z_momentum: &[f64],
    weights: &FactorWeights,
) -> Vec<f64> {
    debug_assert_eq!(z_valuation.len(), z_innovation.len());
    debug_assert_eq!(z_valuation.len(), z_momentum.len());

    z_valuation
        .iter()
        .zip(z_innovation)
        .zip(z_momentum)
        .map(|((v, i), m)| weights.innovation * i + weights.valuation * v + weights.momentum * m)
        .collect()
}

/// Min-max rescale composites to [0, 100] over the included set.
///
/// A degenerate range (max = min, including the single-record case) maps
/// every score to the 50 midpoint sentinel.
pub fn rescale_0_100(composites: &[f64]) -> RescaledScores {
    let Some(min) = composites.iter().copied().reduce(f64::min) else {
        return RescaledScores {
            scores: Vec::new(),
            degenerate: true,
        };
    };
    let max = composites
        .iter()
        .copied()
        .reduce(f64::max)
        .expect("non-empty checked above");

    let range = max - min;
    if range <= 0.0 || !range.is_finite() {
        return RescaledScores {
            scores: vec![MIDPOINT_SENTINEL; composites.len()],
            degenerate: true,
        };
    }

    RescaledScores {
        scores: composites.iter().map(|c| (c - min) / range * 100.0).collect(),
        degenerate: false,
    }
}
