//! Error and warning types for the scoring engine.

use crate::config::FactorKind;
use crate::derive::UndefinedReason;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Fatal scoring errors. These halt the run before any table is produced.
#[derive(Debug, Error)]
pub enum ScoringError {
    /// A factor weight is negative or non-finite.
    #[error("Invalid weight for {factor} factor: {weight}")]
    InvalidWeight {
        /// Offending factor.
        factor: FactorKind,
        /// Offending weight.
        weight: f64,
    },

    /// Weights do not sum to 1.0.
    #[error("Factor weights must sum to 1.0, got {sum}")]
    WeightSum {
        /// Actual sum of the weights.
        sum: f64,
    },

    /// No records survived filtering; there is nothing to rank.
    #[error("No records left to score after filtering")]
    EmptyUniverse,
}

/// Recoverable conditions surfaced on the scoring result.
///
/// The engine always produces a complete ranked table for every included
/// record; these report what was locally recovered along the way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoringWarning {
    /// A record was excluded from the ranking for an undefined factor.
    UndefinedFactor {
        /// Ticker of the excluded record.
        ticker: String,
        /// Why the factor was undefined.
        reason: UndefinedReason,
    },

    /// A factor series had zero variance or fewer than 2 members; its
    /// z-scores were set to the 0 sentinel, nullifying its contribution.
    DegenerateDistribution {
        /// Affected factor.
        factor: FactorKind,
        /// Number of contributing records.
        len: usize,
    },

    /// All composites were equal; every 0–100 score was set to the 50
    /// midpoint sentinel.
    DegenerateRange,
}

impl fmt::Display for ScoringWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UndefinedFactor { ticker, reason } => {
                write!(f, "{} excluded from ranking: {}", ticker, reason)
            }
            Self::DegenerateDistribution { factor, len } => {
                write!(
                    f,
                    "{} factor is degenerate over {} record(s); z-scores set to 0",
                    factor, len
                )
            }
            Self::DegenerateRange => {
                write!(f, "uniform composite scores; all 0-100 scores set to 50")
            }
        }
    }
}
