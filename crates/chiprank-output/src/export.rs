//! Export functionality for ranked tables.
//!
//! Flattens [`ScoredRecord`]s into one row per company carrying every raw,
//! derived, and display field plus the rank, and writes the full set (no
//! truncation) as CSV or JSON for downstream consumption or archival.

use chiprank_factors::{RankingTable, ScoredRecord};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during export operations.
#[derive(Debug, Error)]
pub enum ExportError {
    /// CSV serialization error.
    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Export format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Comma-separated values format.
    Csv,

    /// Compact JSON format.
    Json,

    /// Pretty-printed JSON format.
    PrettyJson,
}

impl ExportFormat {
    /// Get the file extension for this format.
    pub const fn extension(&self) -> &str {
        match self {
            Self::Csv => "csv",
            Self::Json | Self::PrettyJson => "json",
        }
    }
}

/// One fully flattened row of the ranked export.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RankingRow {
    /// Rank, 1 = best.
    pub rank: usize,

    /// Ticker symbol.
    pub ticker: String,

    /// Company display name.
    pub name: String,

    /// Composite score rescaled to [0, 100].
    pub score_0_100: f64,

    /// Weighted composite of the z-scores.
    pub composite: f64,

    /// Oriented valuation z-score.
    pub z_valuation: f64,

    /// Innovation z-score.
    pub z_innovation: f64,

    /// Momentum z-score.
    pub z_momentum: f64,

    /// Market cap / EBITDA.
    pub valuation_multiple: f64,

    /// R&D expense / revenue.
    pub rd_intensity: f64,

    /// Market capitalization (USD).
    pub market_cap: f64,

    /// Total revenue (USD).
    pub revenue: f64,

    /// EBITDA (USD).
    pub ebitda: f64,

    /// R&D expense (USD).
    pub rd_expense: f64,

    /// Year-to-date return, percent.
    pub ytd_return: f64,

    /// Valuation multiple for display, e.g. "12.4x".
    pub valuation_display: String,

    /// R&D intensity for display, e.g. "14.2%".
    pub rd_display: String,

    /// YTD return for display, e.g. "-8.2%".
    pub ytd_display: String,
}

impl From<&ScoredRecord> for RankingRow {
    fn from(scored: &ScoredRecord) -> Self {
        Self {
            rank: scored.rank,
            ticker: scored.record.ticker.clone(),
            name: scored.record.name.clone(),
            score_0_100: scored.score_0_100,
            composite: scored.composite,
            z_valuation: scored.z_valuation,
            z_innovation: scored.z_innovation,
            z_momentum: scored.z_momentum,
            valuation_multiple: scored.valuation_multiple,
            rd_intensity: scored.rd_intensity,
            market_cap: scored.record.market_cap,
            revenue: scored.record.revenue,
            ebitda: scored.record.ebitda,
            rd_expense: scored.record.rd_expense,
            ytd_return: scored.record.ytd_return,
            valuation_display: format_multiple(scored.valuation_multiple),
            rd_display: format_percent(scored.rd_intensity * 100.0),
            ytd_display: format_percent(scored.record.ytd_return),
        }
    }
}

/// Flatten a ranked table into export rows, rank order preserved.
pub fn ranking_rows(table: &RankingTable) -> Vec<RankingRow> {
    table.records.iter().map(RankingRow::from).collect()
}

/// Format a valuation multiple for display, one decimal.
pub fn format_multiple(multiple: f64) -> String {
    format!("{:.1}x", multiple)
}

/// Format a percentage for display, one decimal.
pub fn format_percent(percent: f64) -> String {
    format!("{:.1}%", percent)
}

/// Trait for exporting data in various formats.
pub trait Exporter {
    /// Export data to a string in the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError>;

    /// Export data to a file in the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or file writing fails.
    fn export_to_file(&self, path: &Path, format: ExportFormat) -> Result<(), ExportError> {
        let content = self.export_to_string(format)?;
        let mut file = File::create(path)?;
        file.write_all(content.as_bytes())?;
        Ok(())
    }
}

impl Exporter for Vec<RankingRow> {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        match format {
            ExportFormat::Csv => {
                let mut wtr = csv::Writer::from_writer(vec![]);
                for row in self {
                    wtr.serialize(row)?;
                }
                let data =
                    String::from_utf8(wtr.into_inner().map_err(|e| e.into_error())?).unwrap();
                Ok(data)
            }
            ExportFormat::Json => Ok(serde_json::to_string(self)?),
            ExportFormat::PrettyJson => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chiprank_data::CompanyRecord;

    fn scored(ticker: &str, rank: usize, score: f64) -> ScoredRecord {
        ScoredRecord {
            record: CompanyRecord {
                ticker: ticker.to_string(),
                name: format!("{} Inc", ticker),
                market_cap: 220_000.0,
                revenue: 22_680.0,
                ebitda: 4_124.0,
                rd_expense: 5_872.0,
                ytd_return: -8.25,
            },
            valuation_multiple: 53.346,
            rd_intensity: 0.2589,
            z_valuation: -1.2,
            z_innovation: 1.4,
            z_momentum: -0.3,
            composite: 0.11,
            score_0_100: score,
            rank,
        }
    }

    #[test]
    fn test_display_formatting() {
        let row = RankingRow::from(&scored("AMD", 3, 61.7));

        assert_eq!(row.valuation_display, "53.3x");
        assert_eq!(row.rd_display, "25.9%");
        assert_eq!(row.ytd_display, "-8.2%");
    }

    #[test]
    fn test_csv_export_has_every_field() {
        let rows = vec![RankingRow::from(&scored("AMD", 1, 100.0))];
        let csv = rows.export_to_string(ExportFormat::Csv).unwrap();

        let header = csv.lines().next().unwrap();
        for column in [
            "rank",
            "ticker",
            "name",
            "score_0_100",
            "composite",
            "z_valuation",
            "z_innovation",
            "z_momentum",
            "valuation_multiple",
            "rd_intensity",
            "market_cap",
            "revenue",
            "ebitda",
            "rd_expense",
            "ytd_return",
            "valuation_display",
            "rd_display",
            "ytd_display",
        ] {
            assert!(header.contains(column), "missing column {}", column);
        }
        assert!(csv.contains("AMD"));
    }

    #[test]
    fn test_csv_export_full_set_in_rank_order() {
        let rows = vec![
            RankingRow::from(&scored("NVDA", 1, 100.0)),
            RankingRow::from(&scored("AMD", 2, 61.7)),
            RankingRow::from(&scored("INTC", 3, 0.0)),
        ];
        let csv = rows.export_to_string(ExportFormat::Csv).unwrap();

        // Header plus one line per record, nothing truncated
        assert_eq!(csv.trim_end().lines().count(), 4);
        let body: Vec<&str> = csv.trim_end().lines().skip(1).collect();
        assert!(body[0].starts_with("1,NVDA"));
        assert!(body[2].starts_with("3,INTC"));
    }

    #[test]
    fn test_json_export() {
        let rows = vec![RankingRow::from(&scored("TSM", 1, 88.8))];
        let json = rows.export_to_string(ExportFormat::Json).unwrap();
        assert!(json.contains("\"TSM\""));
        assert!(json.contains("\"rank\":1"));
    }

    #[test]
    fn test_pretty_json_export() {
        let rows = vec![RankingRow::from(&scored("TSM", 1, 88.8))];
        let json = rows.export_to_string(ExportFormat::PrettyJson).unwrap();
        assert!(json.contains("  ")); // Indentation indicates pretty format
    }

    #[test]
    fn test_extension() {
        assert_eq!(ExportFormat::Csv.extension(), "csv");
        assert_eq!(ExportFormat::PrettyJson.extension(), "json");
    }
}
