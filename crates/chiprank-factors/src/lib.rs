#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/chiprank/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod composite;
pub mod config;
pub mod derive;
pub mod engine;
pub mod error;
pub mod rank;
pub mod zscore;

pub use composite::{RescaledScores, composite_scores, rescale_0_100};
pub use config::{Direction, FactorKind, FactorWeights, ScoringConfig};
pub use derive::{DerivedFactors, FactorValue, UndefinedReason, derive_factors};
pub use engine::{Exclusion, RankingTable, score_snapshot};
pub use error::{ScoringError, ScoringWarning};
pub use rank::{ScoredRecord, rank_descending};
pub use zscore::{StandardizedSeries, sample_std, standardize, standardize_oriented};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
