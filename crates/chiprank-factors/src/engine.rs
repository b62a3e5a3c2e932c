//! The scoring pipeline: derive → standardize → combine → rescale → rank.

use crate::composite::{composite_scores, rescale_0_100};
use crate::config::{FactorKind, ScoringConfig};
use crate::derive::{UndefinedReason, derive_factors};
use crate::error::{ScoringError, ScoringWarning};
use crate::rank::{ScoredRecord, rank_descending};
use crate::zscore::standardize_oriented;
use chiprank_data::CompanyRecord;
use serde::{Deserialize, Serialize};

/// A record excluded from the ranking for an undefined factor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exclusion {
    /// Ticker of the excluded record.
    pub ticker: String,
    /// Why it was excluded.
    pub reason: UndefinedReason,
}

/// The complete, consistently ranked output of one scoring run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingTable {
    /// Ranked records, best first.
    pub records: Vec<ScoredRecord>,

    /// Records excluded for undefined factors.
    pub excluded: Vec<Exclusion>,

    /// Locally recovered conditions encountered during scoring.
    pub warnings: Vec<ScoringWarning>,
}

/// Score and rank a normalized snapshot.
///
/// A pure function of the input records and configuration: identical inputs
/// always produce an identical table. Records whose derived ratios are
/// undefined are excluded from the whole ranking and reported; every other
/// recoverable condition resolves to a documented sentinel and a warning.
pub fn score_snapshot(
    records: &[CompanyRecord],
    config: &ScoringConfig,
) -> Result<RankingTable, ScoringError> {
    config.validate()?;

    let mut warnings = Vec::new();
    let mut excluded = Vec::new();

    // Stage 1: derive ratios, splitting off records with undefined factors
    let mut included: Vec<(&CompanyRecord, f64, f64, f64)> = Vec::with_capacity(records.len());
    for record in records {
        let factors = derive_factors(record);
        match factors.complete() {
            Some((valuation_multiple, rd_intensity, momentum)) => {
                included.push((record, valuation_multiple, rd_intensity, momentum));
            }
            None => {
                let reason = factors
                    .undefined_reason()
                    .expect("incomplete factors carry a reason");
                warnings.push(ScoringWarning::UndefinedFactor {
                    ticker: record.ticker.clone(),
                    reason,
                });
                excluded.push(Exclusion {
                    ticker: record.ticker.clone(),
                    reason,
                });
            }
        }
    }

    if included.is_empty() {
        return Err(ScoringError::EmptyUniverse);
    }

    // Stage 2: standardize each factor series cross-sectionally
    let valuations: Vec<f64> = included.iter().map(|(_, v, _, _)| *v).collect();
    let intensities: Vec<f64> = included.iter().map(|(_, _, i, _)| *i).collect();
    let momenta: Vec<f64> = included.iter().map(|(_, _, _, m)| *m).collect();

    let z_valuation = standardize_oriented(&valuations, config.direction(FactorKind::Valuation));
    let z_innovation = standardize_oriented(&intensities, config.direction(FactorKind::Innovation));
    let z_momentum = standardize_oriented(&momenta, config.direction(FactorKind::Momentum));

    for (factor, series) in [
        (FactorKind::Valuation, &z_valuation),
        (FactorKind::Innovation, &z_innovation),
        (FactorKind::Momentum, &z_momentum),
    ] {
        if series.degenerate {
            warnings.push(ScoringWarning::DegenerateDistribution {
                factor,
                len: series.zscores.len(),
            });
        }
    }

    // Stage 3: weighted composite, rescaled to 0-100
    let composites = composite_scores(
        &z_valuation.zscores,
        &z_innovation.zscores,
        &z_momentum.zscores,
        &config.weights,
    );
    let rescaled = rescale_0_100(&composites);
    if rescaled.degenerate {
        warnings.push(ScoringWarning::DegenerateRange);
    }

    // Stage 4: assemble in input order, then rank
    let scored: Vec<ScoredRecord> = included
        .iter()
        .enumerate()
        .map(|(idx, (record, valuation_multiple, rd_intensity, _))| ScoredRecord {
            record: (*record).clone(),
            valuation_multiple: *valuation_multiple,
            rd_intensity: *rd_intensity,
            z_valuation: z_valuation.zscores[idx],
            z_innovation: z_innovation.zscores[idx],
            z_momentum: z_momentum.zscores[idx],
            composite: composites[idx],
            score_0_100: rescaled.scores[idx],
            rank: 0,
        })
        .collect();

    Ok(RankingTable {
        records: rank_descending(scored),
        excluded,
        warnings,
    })
}
