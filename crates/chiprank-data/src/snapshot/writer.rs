//! Snapshot writing for the acquisition collaborator.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// One acquired row, prior to normalization.
///
/// Fields the provider could not supply stay empty in the CSV; the
/// normalizer decides later whether that drops the row or defaults it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotRow {
    /// Ticker symbol.
    pub ticker: String,
    /// Company display name.
    pub name: String,
    /// Market capitalization (USD).
    pub market_cap: Option<f64>,
    /// Total revenue (USD).
    pub revenue: Option<f64>,
    /// EBITDA (USD).
    pub ebitda: Option<f64>,
    /// R&D expense (USD).
    pub rd_expense: Option<f64>,
    /// Year-to-date price return, percent.
    pub ytd_return: Option<f64>,
}

/// Write acquired rows to a canonical snapshot CSV.
pub fn write_snapshot(path: impl AsRef<Path>, rows: &[SnapshotRow]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer.serialize(row)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| std::io::Error::other(e.to_string()))?;

    let mut file = File::create(path.as_ref())?;
    file.write_all(&bytes)?;
    Ok(())
}
