//! Schema mapping from provider headers to the canonical snapshot columns.

use std::collections::HashMap;

/// Canonical column: ticker symbol.
pub const COL_TICKER: &str = "ticker";
/// Canonical column: company display name.
pub const COL_NAME: &str = "name";
/// Canonical column: market capitalization.
pub const COL_MARKET_CAP: &str = "market_cap";
/// Canonical column: total revenue.
pub const COL_REVENUE: &str = "revenue";
/// Canonical column: EBITDA.
pub const COL_EBITDA: &str = "ebitda";
/// Canonical column: R&D expense (optional).
pub const COL_RD_EXPENSE: &str = "rd_expense";
/// Canonical column: year-to-date return.
pub const COL_YTD_RETURN: &str = "ytd_return";

/// Canonical columns that must be mappable from the snapshot header.
///
/// `rd_expense` and `name` are deliberately absent: a missing R&D column
/// defaults every row to 0, and a missing name column falls back to the
/// ticker.
pub const REQUIRED_COLUMNS: &[&str] = &[
    COL_TICKER,
    COL_MARKET_CAP,
    COL_REVENUE,
    COL_EBITDA,
    COL_YTD_RETURN,
];

/// Explicit mapping table from source header names to canonical columns.
///
/// Source headers without an entry are passed through untouched and ignored
/// by every downstream stage.
#[derive(Debug, Clone)]
pub struct SchemaMapping {
    map: HashMap<String, String>,
}

impl SchemaMapping {
    /// Create an empty mapping (canonical headers still map to themselves).
    pub fn new() -> Self {
        let mut map = HashMap::new();
        for canonical in [
            COL_TICKER,
            COL_NAME,
            COL_MARKET_CAP,
            COL_REVENUE,
            COL_EBITDA,
            COL_RD_EXPENSE,
            COL_YTD_RETURN,
        ] {
            map.insert(canonical.to_string(), canonical.to_string());
        }
        Self { map }
    }

    /// Default mapping covering the LSEG-style headers of the original feed
    /// plus common provider variants.
    pub fn default_mapping() -> Self {
        Self::new()
            .with_mapping("Instrument", COL_TICKER)
            .with_mapping("Ticker", COL_TICKER)
            .with_mapping("Company", COL_NAME)
            .with_mapping("Company Common Name", COL_NAME)
            .with_mapping("Market_Cap", COL_MARKET_CAP)
            .with_mapping("Market Cap", COL_MARKET_CAP)
            .with_mapping("Company Market Cap", COL_MARKET_CAP)
            .with_mapping("Revenue", COL_REVENUE)
            .with_mapping("Total Revenue", COL_REVENUE)
            .with_mapping("EBITDA", COL_EBITDA)
            .with_mapping("R&D_Expense", COL_RD_EXPENSE)
            .with_mapping("R&D Expense", COL_RD_EXPENSE)
            .with_mapping("Research And Development", COL_RD_EXPENSE)
            .with_mapping("YTD_Return", COL_YTD_RETURN)
            .with_mapping("YTD Price PCT Change", COL_YTD_RETURN)
            .with_mapping("Price PCT Change YTD", COL_YTD_RETURN)
    }

    /// Add a source → canonical mapping.
    pub fn with_mapping(mut self, source: impl Into<String>, canonical: impl Into<String>) -> Self {
        self.map.insert(source.into(), canonical.into());
        self
    }

    /// Resolve a source header to its canonical name, if mapped.
    pub fn canonical(&self, source: &str) -> Option<&str> {
        self.map.get(source).map(String::as_str)
    }

    /// Resolve a full header row: canonical name → column index, plus the
    /// list of source columns that had no mapping.
    pub fn resolve_headers(&self, headers: &[String]) -> (HashMap<String, usize>, Vec<String>) {
        let mut indices = HashMap::new();
        let mut unmapped = Vec::new();

        for (idx, header) in headers.iter().enumerate() {
            match self.canonical(header.trim()) {
                // First mapping wins on duplicate headers
                Some(canonical) => {
                    indices.entry(canonical.to_string()).or_insert(idx);
                }
                None => unmapped.push(header.clone()),
            }
        }

        (indices, unmapped)
    }
}

impl Default for SchemaMapping {
    fn default() -> Self {
        Self::default_mapping()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_headers_map_to_themselves() {
        let mapping = SchemaMapping::new();
        assert_eq!(mapping.canonical("ticker"), Some(COL_TICKER));
        assert_eq!(mapping.canonical("ebitda"), Some(COL_EBITDA));
    }

    #[test]
    fn test_default_mapping_covers_lseg_headers() {
        let mapping = SchemaMapping::default_mapping();
        assert_eq!(mapping.canonical("Instrument"), Some(COL_TICKER));
        assert_eq!(mapping.canonical("YTD Price PCT Change"), Some(COL_YTD_RETURN));
        assert_eq!(mapping.canonical("Research And Development"), Some(COL_RD_EXPENSE));
    }

    #[test]
    fn test_unknown_headers_pass_through() {
        let mapping = SchemaMapping::default_mapping();
        let headers = vec![
            "Instrument".to_string(),
            "Gross Profit Margin".to_string(),
            "EBITDA".to_string(),
        ];

        let (indices, unmapped) = mapping.resolve_headers(&headers);
        assert_eq!(indices.get(COL_TICKER), Some(&0));
        assert_eq!(indices.get(COL_EBITDA), Some(&2));
        assert_eq!(unmapped, vec!["Gross Profit Margin".to_string()]);
    }

    #[test]
    fn test_custom_mapping_overrides() {
        let mapping = SchemaMapping::new().with_mapping("RIC", COL_TICKER);
        assert_eq!(mapping.canonical("RIC"), Some(COL_TICKER));
    }
}
