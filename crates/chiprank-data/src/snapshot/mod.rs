//! Canonical snapshot schema and normalization.
//!
//! A snapshot is a flat tabular file, one row per company, whose headers vary
//! by data provider. The [`SchemaMapping`] translates provider headers into
//! the canonical schema and the reader filters out rows that cannot feed the
//! scoring engine, reporting aggregate drop counts instead of failing.

pub mod reader;
pub mod schema;
pub mod writer;

pub use reader::{Snapshot, read_snapshot, read_snapshot_from_reader};
pub use schema::SchemaMapping;
pub use writer::{SnapshotRow, write_snapshot};

use serde::{Deserialize, Serialize};

/// One normalized row of the input snapshot.
///
/// Constructed once from the immutable snapshot; downstream stages attach
/// derived views and never mutate these raw fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyRecord {
    /// Ticker symbol (unique key within the working set).
    pub ticker: String,

    /// Company display name.
    pub name: String,

    /// Market capitalization (USD).
    pub market_cap: f64,

    /// Total revenue (USD).
    pub revenue: f64,

    /// EBITDA (USD, may be negative).
    pub ebitda: f64,

    /// R&D expense (USD). Defaults to 0 when the provider has no figure.
    pub rd_expense: f64,

    /// Year-to-date price return, in percent (signed).
    pub ytd_return: f64,
}

/// Aggregate outcome of normalizing one snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizeReport {
    /// Total data rows read from the snapshot.
    pub rows_read: usize,

    /// Rows that survived normalization.
    pub included: usize,

    /// Rows dropped for a missing or unparseable required field.
    pub dropped_missing: usize,

    /// Rows dropped because their ticker duplicated an earlier row.
    pub dropped_duplicate: usize,

    /// Source columns with no canonical mapping (passed through, ignored).
    pub unmapped_columns: Vec<String>,
}

impl NormalizeReport {
    /// Total rows excluded from the working set.
    pub const fn dropped(&self) -> usize {
        self.dropped_missing + self.dropped_duplicate
    }
}
