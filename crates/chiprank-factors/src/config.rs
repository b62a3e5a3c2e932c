//! Scoring configuration: factor weights and per-factor direction flags.

use crate::error::ScoringError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tolerance for the weight-sum check.
const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// The three factors of the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FactorKind {
    /// Valuation multiple (market cap / EBITDA).
    Valuation,
    /// Innovation (R&D intensity).
    Innovation,
    /// Momentum (YTD return).
    Momentum,
}

impl FactorKind {
    /// Returns all factors.
    pub fn all() -> Vec<Self> {
        vec![Self::Valuation, Self::Innovation, Self::Momentum]
    }

    /// Returns the factor name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Valuation => "valuation",
            Self::Innovation => "innovation",
            Self::Momentum => "momentum",
        }
    }
}

impl fmt::Display for FactorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Whether a higher or lower raw factor value is better.
///
/// Lower-is-better factors have their z-scores sign-inverted after
/// standardization, so a positive oriented z-score always means "attractive".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Higher raw values score higher (innovation, momentum).
    HigherIsBetter,
    /// Lower raw values score higher (valuation multiple).
    LowerIsBetter,
}

impl Direction {
    /// Sign applied to a standardized z-score.
    pub const fn sign(&self) -> f64 {
        match self {
            Self::HigherIsBetter => 1.0,
            Self::LowerIsBetter => -1.0,
        }
    }
}

/// Composite weights per factor. Must sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FactorWeights {
    /// Weight on the innovation z-score.
    pub innovation: f64,
    /// Weight on the (inverted) valuation z-score.
    pub valuation: f64,
    /// Weight on the momentum z-score.
    pub momentum: f64,
}

impl FactorWeights {
    /// The "Balanced Tech Quant" strategy: innovation-led with equal value
    /// and momentum sleeves.
    pub const fn balanced() -> Self {
        Self {
            innovation: 0.4,
            valuation: 0.3,
            momentum: 0.3,
        }
    }

    /// Weight for a factor.
    pub const fn weight(&self, factor: FactorKind) -> f64 {
        match factor {
            FactorKind::Valuation => self.valuation,
            FactorKind::Innovation => self.innovation,
            FactorKind::Momentum => self.momentum,
        }
    }

    /// Validate that weights are non-negative and sum to 1.0.
    pub fn validate(&self) -> Result<(), ScoringError> {
        for factor in FactorKind::all() {
            let weight = self.weight(factor);
            if !weight.is_finite() || weight < 0.0 {
                return Err(ScoringError::InvalidWeight { factor, weight });
            }
        }

        let sum = self.innovation + self.valuation + self.momentum;
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ScoringError::WeightSum { sum });
        }
        Ok(())
    }
}

impl Default for FactorWeights {
    fn default() -> Self {
        Self::balanced()
    }
}

/// Full scoring configuration: weights plus per-factor direction flags.
///
/// Directions are configuration rather than call-site constants so a
/// strategy swap never touches engine logic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Composite weights.
    pub weights: FactorWeights,
    /// Direction for the valuation multiple (default: lower is better).
    pub valuation_direction: Direction,
    /// Direction for R&D intensity (default: higher is better).
    pub innovation_direction: Direction,
    /// Direction for YTD momentum (default: higher is better).
    pub momentum_direction: Direction,
}

impl ScoringConfig {
    /// Direction for a factor.
    pub const fn direction(&self, factor: FactorKind) -> Direction {
        match factor {
            FactorKind::Valuation => self.valuation_direction,
            FactorKind::Innovation => self.innovation_direction,
            FactorKind::Momentum => self.momentum_direction,
        }
    }

    /// Validate the configuration at startup.
    pub fn validate(&self) -> Result<(), ScoringError> {
        self.weights.validate()
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: FactorWeights::balanced(),
            valuation_direction: Direction::LowerIsBetter,
            innovation_direction: Direction::HigherIsBetter,
            momentum_direction: Direction::HigherIsBetter,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_default_weights_validate() {
        assert!(ScoringConfig::default().validate().is_ok());
    }

    #[test]
    fn test_default_weights_sum_to_one() {
        let weights = FactorWeights::balanced();
        let sum = weights.innovation + weights.valuation + weights.momentum;
        assert!((sum - 1.0).abs() < 1e-12);
    }

    #[rstest]
    #[case(0.5, 0.3, 0.3)]
    #[case(0.0, 0.0, 0.0)]
    #[case(0.9, 0.2, -0.1)]
    fn test_bad_weights_rejected(
        #[case] innovation: f64,
        #[case] valuation: f64,
        #[case] momentum: f64,
    ) {
        let weights = FactorWeights {
            innovation,
            valuation,
            momentum,
        };
        assert!(weights.validate().is_err());
    }

    #[test]
    fn test_negative_weight_error_names_factor() {
        let weights = FactorWeights {
            innovation: 1.1,
            valuation: -0.1,
            momentum: 0.0,
        };
        match weights.validate().unwrap_err() {
            ScoringError::InvalidWeight { factor, .. } => {
                assert_eq!(factor, FactorKind::Valuation);
            }
            other => panic!("expected InvalidWeight, got {:?}", other),
        }
    }

    #[test]
    fn test_direction_signs() {
        assert_eq!(Direction::HigherIsBetter.sign(), 1.0);
        assert_eq!(Direction::LowerIsBetter.sign(), -1.0);
    }

    #[test]
    fn test_default_directions() {
        let config = ScoringConfig::default();
        assert_eq!(config.direction(FactorKind::Valuation), Direction::LowerIsBetter);
        assert_eq!(config.direction(FactorKind::Innovation), Direction::HigherIsBetter);
        assert_eq!(config.direction(FactorKind::Momentum), Direction::HigherIsBetter);
    }
}
