//! Fundamental data fetching from Yahoo Finance.

use crate::error::{DataError, Result};
use crate::snapshot::SnapshotRow;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use tokio::time::sleep;

const QUOTE_SUMMARY_URL: &str = "https://query2.finance.yahoo.com/v10/finance/quoteSummary";
const MODULES: &str = "price,financialData,incomeStatementHistory";

/// Company fundamental data for one symbol.
///
/// Every field the provider may fail to report is optional; the snapshot
/// normalizer decides downstream what is required.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FundamentalData {
    /// Stock symbol
    pub symbol: String,
    /// Company display name
    pub name: Option<String>,
    /// Market capitalization (USD)
    pub market_cap: Option<f64>,
    /// Total revenue, trailing twelve months (USD)
    pub revenue: Option<f64>,
    /// EBITDA, trailing twelve months (USD)
    pub ebitda: Option<f64>,
    /// R&D expense from the latest annual income statement (USD)
    pub rd_expense: Option<f64>,
}

impl FundamentalData {
    /// Combine fundamentals with a YTD return into an acquisition row.
    pub fn into_snapshot_row(self, ytd_return: Option<f64>) -> SnapshotRow {
        let name = self.name.unwrap_or_else(|| self.symbol.clone());
        SnapshotRow {
            ticker: self.symbol,
            name,
            market_cap: self.market_cap,
            revenue: self.revenue,
            ebitda: self.ebitda,
            rd_expense: self.rd_expense,
            ytd_return,
        }
    }
}

/// Yahoo Finance fundamentals provider with rate limiting.
#[derive(Debug)]
pub struct YahooFundamentalsProvider {
    client: reqwest::Client,
    rate_limit_delay: Duration,
}

impl YahooFundamentalsProvider {
    /// Create a new Yahoo Finance fundamentals provider.
    pub fn new() -> Self {
        Self::with_rate_limit(Duration::from_millis(1000))
    }

    /// Create a new provider with custom rate limiting.
    pub fn with_rate_limit(rate_limit_delay: Duration) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent("Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7)")
                .build()
                .expect("Failed to create HTTP client"),
            rate_limit_delay,
        }
    }

    /// Fetch fundamental data for a single symbol.
    pub async fn fetch_fundamentals(&self, symbol: &str) -> Result<FundamentalData> {
        if symbol.is_empty() {
            return Err(DataError::InvalidSymbol("Empty symbol".to_string()));
        }

        sleep(self.rate_limit_delay).await;

        let url = format!("{}/{}?modules={}", QUOTE_SUMMARY_URL, symbol, MODULES);
        let body: Value = self.client.get(&url).send().await?.json().await?;

        parse_quote_summary(symbol, &body)
    }

    /// Fetch fundamental data for multiple symbols.
    ///
    /// Per-symbol failures are reported and skipped, never fatal.
    pub async fn fetch_fundamentals_batch(&self, symbols: &[String]) -> Result<Vec<FundamentalData>> {
        let mut fundamentals = Vec::new();

        for symbol in symbols {
            match self.fetch_fundamentals(symbol).await {
                Ok(data) => fundamentals.push(data),
                Err(e) => {
                    eprintln!("Warning: Failed to fetch fundamentals for {}: {}", symbol, e);
                    continue;
                }
            }
        }

        Ok(fundamentals)
    }
}

impl Default for YahooFundamentalsProvider {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract fundamentals from a quoteSummary response body.
fn parse_quote_summary(symbol: &str, body: &Value) -> Result<FundamentalData> {
    let result = body
        .pointer("/quoteSummary/result/0")
        .ok_or_else(|| DataError::MissingData {
            symbol: symbol.to_string(),
            reason: "Empty quoteSummary result".to_string(),
        })?;

    let name = result
        .pointer("/price/longName")
        .and_then(Value::as_str)
        .map(str::to_string);

    Ok(FundamentalData {
        symbol: symbol.to_string(),
        name,
        market_cap: raw_f64(result, "/price/marketCap"),
        revenue: raw_f64(result, "/financialData/totalRevenue"),
        ebitda: raw_f64(result, "/financialData/ebitda"),
        rd_expense: raw_f64(
            result,
            "/incomeStatementHistory/incomeStatementHistory/0/researchDevelopment",
        ),
    })
}

/// Yahoo wraps numbers as `{"raw": ..., "fmt": ...}`; accept bare numbers too.
fn raw_f64(value: &Value, pointer: &str) -> Option<f64> {
    let node = value.pointer(pointer)?;
    match node {
        Value::Number(n) => n.as_f64(),
        Value::Object(_) => node.pointer("/raw").and_then(Value::as_f64),
        _ => None,
    }
}
