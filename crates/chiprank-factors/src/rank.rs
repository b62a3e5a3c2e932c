//! Ranking of scored records.

use chiprank_data::CompanyRecord;
use serde::{Deserialize, Serialize};

/// A fully scored record: raw fields, derived ratios, z-scores, composite,
/// 0–100 score, and rank. Read-only once ranked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredRecord {
    /// The raw input record.
    pub record: CompanyRecord,

    /// Market cap / EBITDA.
    pub valuation_multiple: f64,

    /// R&D expense / revenue.
    pub rd_intensity: f64,

    /// Oriented valuation z-score (inverted: cheaper scores higher).
    pub z_valuation: f64,

    /// Innovation z-score.
    pub z_innovation: f64,

    /// Momentum z-score.
    pub z_momentum: f64,

    /// Weighted composite of the three z-scores.
    pub composite: f64,

    /// Composite rescaled to [0, 100].
    pub score_0_100: f64,

    /// 1-based rank, 1 = best. Ties keep upstream order.
    pub rank: usize,
}

/// Sort by 0–100 score descending and assign 1-based ranks.
///
/// The sort is stable: records with equal scores keep their relative order
/// from the upstream sequence, so reruns on identical input are identical.
pub fn rank_descending(mut records: Vec<ScoredRecord>) -> Vec<ScoredRecord> {
    records.sort_by(|a, b| {
        b.score_0_100
            .partial_cmp(&a.score_0_100)
            .expect("scores are always finite")
    });
    for (idx, record) in records.iter_mut().enumerate() {
        record.rank = idx + 1;
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(ticker: &str, score: f64) -> ScoredRecord {
        ScoredRecord {
            record: CompanyRecord {
                ticker: ticker.to_string(),
                name: ticker.to_string(),
                market_cap: 100.0,
                revenue: 50.0,
                ebitda: 10.0,
                rd_expense: 5.0,
                ytd_return: 0.0,
            },
            valuation_multiple: 10.0,
            rd_intensity: 0.1,
            z_valuation: 0.0,
            z_innovation: 0.0,
            z_momentum: 0.0,
            composite: 0.0,
            score_0_100: score,
            rank: 0,
        }
    }

    #[test]
    fn test_rank_descending_order() {
        let ranked = rank_descending(vec![
            scored("LOW", 10.0),
            scored("HIGH", 90.0),
            scored("MID", 50.0),
        ]);

        let order: Vec<&str> = ranked.iter().map(|r| r.record.ticker.as_str()).collect();
        assert_eq!(order, vec!["HIGH", "MID", "LOW"]);
        let ranks: Vec<usize> = ranked.iter().map(|r| r.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
    }

    #[test]
    fn test_ranks_are_gapless_permutation() {
        let ranked = rank_descending(vec![
            scored("A", 70.0),
            scored("B", 70.0),
            scored("C", 20.0),
            scored("D", 95.0),
        ]);

        let mut ranks: Vec<usize> = ranked.iter().map(|r| r.rank).collect();
        ranks.sort_unstable();
        assert_eq!(ranks, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let ranked = rank_descending(vec![
            scored("FIRST", 50.0),
            scored("SECOND", 50.0),
            scored("THIRD", 50.0),
        ]);

        let order: Vec<&str> = ranked.iter().map(|r| r.record.ticker.as_str()).collect();
        assert_eq!(order, vec!["FIRST", "SECOND", "THIRD"]);
    }

    #[test]
    fn test_rank_one_has_max_score() {
        let ranked = rank_descending(vec![scored("A", 33.0), scored("B", 66.0)]);
        let top = ranked.iter().find(|r| r.rank == 1).unwrap();
        assert_eq!(top.record.ticker, "B");
        assert!(ranked.iter().all(|r| r.score_0_100 <= top.score_0_100));
    }
}
