//! Snapshot reading and normalization.

use crate::error::{DataError, Result};
use crate::snapshot::schema::{
    COL_EBITDA, COL_MARKET_CAP, COL_NAME, COL_RD_EXPENSE, COL_REVENUE, COL_TICKER, COL_YTD_RETURN,
    REQUIRED_COLUMNS, SchemaMapping,
};
use crate::snapshot::{CompanyRecord, NormalizeReport};
use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// A normalized input snapshot: the surviving records in input order plus
/// the normalization report.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// Records that survived normalization, in input order.
    pub records: Vec<CompanyRecord>,

    /// Aggregate counts from normalization.
    pub report: NormalizeReport,
}

/// Read and normalize a snapshot CSV from a file path.
pub fn read_snapshot(path: impl AsRef<Path>, mapping: &SchemaMapping) -> Result<Snapshot> {
    let file = File::open(path.as_ref())?;
    read_snapshot_from_reader(file, mapping)
}

/// Read and normalize a snapshot CSV from any reader.
///
/// Rows missing a required field (market cap, revenue, EBITDA, or YTD
/// return) are dropped and counted, never errored. A required canonical
/// column absent from the header row entirely is fatal.
pub fn read_snapshot_from_reader<R: Read>(rdr: R, mapping: &SchemaMapping) -> Result<Snapshot> {
    let mut csv_reader = csv::ReaderBuilder::new().flexible(true).from_reader(rdr);

    let headers: Vec<String> = csv_reader
        .headers()
        .map_err(|e| DataError::Parse(format!("Unreadable snapshot header: {}", e)))?
        .iter()
        .map(str::to_string)
        .collect();

    let (indices, unmapped) = mapping.resolve_headers(&headers);

    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|col| !indices.contains_key(**col))
        .map(|col| col.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(DataError::MissingColumns { columns: missing });
    }

    let mut records = Vec::new();
    let mut report = NormalizeReport {
        unmapped_columns: unmapped,
        ..NormalizeReport::default()
    };
    let mut seen_tickers = HashSet::new();

    for row in csv_reader.records() {
        let row = row.map_err(|e| DataError::Parse(format!("Unreadable snapshot row: {}", e)))?;
        report.rows_read += 1;

        let ticker = match text_field(&row, &indices, COL_TICKER) {
            Some(t) => t,
            None => {
                report.dropped_missing += 1;
                continue;
            }
        };

        // Hard requirement: these feed denominators or the momentum factor
        let market_cap = numeric_field(&row, &indices, COL_MARKET_CAP);
        let revenue = numeric_field(&row, &indices, COL_REVENUE);
        let ebitda = numeric_field(&row, &indices, COL_EBITDA);
        let ytd_return = numeric_field(&row, &indices, COL_YTD_RETURN);

        let (Some(market_cap), Some(revenue), Some(ebitda), Some(ytd_return)) =
            (market_cap, revenue, ebitda, ytd_return)
        else {
            report.dropped_missing += 1;
            continue;
        };

        if !seen_tickers.insert(ticker.clone()) {
            report.dropped_duplicate += 1;
            continue;
        }

        let name = text_field(&row, &indices, COL_NAME).unwrap_or_else(|| ticker.clone());
        let rd_expense = numeric_field(&row, &indices, COL_RD_EXPENSE).unwrap_or(0.0);

        records.push(CompanyRecord {
            ticker,
            name,
            market_cap,
            revenue,
            ebitda,
            rd_expense,
            ytd_return,
        });
    }

    report.included = records.len();
    Ok(Snapshot { records, report })
}

fn text_field(
    row: &csv::StringRecord,
    indices: &HashMap<String, usize>,
    canonical: &str,
) -> Option<String> {
    let idx = *indices.get(canonical)?;
    let value = row.get(idx)?.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn numeric_field(
    row: &csv::StringRecord,
    indices: &HashMap<String, usize>,
    canonical: &str,
) -> Option<f64> {
    let idx = *indices.get(canonical)?;
    let value = row.get(idx)?.trim();
    if value.is_empty() {
        return None;
    }
    // Tolerate thousands separators from spreadsheet exports
    let cleaned = value.replace(',', "");
    let parsed: f64 = cleaned.parse().ok()?;
    parsed.is_finite().then_some(parsed)
}
