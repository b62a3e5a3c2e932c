//! Quote data fetching from Yahoo Finance.

use crate::error::{DataError, Result};
use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};
use std::time::Duration;
use tokio::time::sleep;
use yahoo_finance_api as yahoo;

/// One daily closing quote.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyClose {
    /// Trading date (UTC).
    pub date: NaiveDate,
    /// Closing price.
    pub close: f64,
    /// Dividend/split adjusted closing price.
    pub adjclose: f64,
    /// Share volume.
    pub volume: u64,
}

/// Yahoo Finance quote provider with rate limiting.
pub struct YahooQuoteProvider {
    provider: yahoo::YahooConnector,
    rate_limit_delay: Duration,
}

impl std::fmt::Debug for YahooQuoteProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("YahooQuoteProvider")
            .field("rate_limit_delay", &self.rate_limit_delay)
            .finish_non_exhaustive()
    }
}

impl YahooQuoteProvider {
    /// Create a new Yahoo Finance quote provider with default rate limiting (1 req/sec).
    pub fn new() -> Self {
        Self {
            provider: yahoo::YahooConnector::new().expect("Failed to create Yahoo connector"),
            rate_limit_delay: Duration::from_millis(1000),
        }
    }

    /// Create a new Yahoo Finance quote provider with custom rate limiting.
    pub fn with_rate_limit(rate_limit_delay: Duration) -> Self {
        Self {
            provider: yahoo::YahooConnector::new().expect("Failed to create Yahoo connector"),
            rate_limit_delay,
        }
    }

    /// Fetch daily closes for a single symbol.
    pub async fn fetch_closes(
        &self,
        symbol: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<DailyClose>> {
        if start > end {
            return Err(DataError::InvalidDateRange {
                start: start.to_rfc3339(),
                end: end.to_rfc3339(),
            });
        }

        if symbol.is_empty() {
            return Err(DataError::InvalidSymbol("Empty symbol".to_string()));
        }

        sleep(self.rate_limit_delay).await;

        let start_time = time::OffsetDateTime::from_unix_timestamp(start.timestamp())
            .map_err(|e| DataError::TimeConversion(e.to_string()))?;
        let end_time = time::OffsetDateTime::from_unix_timestamp(end.timestamp())
            .map_err(|e| DataError::TimeConversion(e.to_string()))?;

        let response = self
            .provider
            .get_quote_history(symbol, start_time, end_time)
            .await?;

        let quotes = response
            .quotes()
            .map_err(|e| DataError::YahooApi(e.to_string()))?;

        if quotes.is_empty() {
            return Err(DataError::MissingData {
                symbol: symbol.to_string(),
                reason: "No data returned from Yahoo Finance".to_string(),
            });
        }

        let mut closes = Vec::with_capacity(quotes.len());
        for quote in &quotes {
            let date = DateTime::from_timestamp(quote.timestamp, 0)
                .ok_or_else(|| {
                    DataError::TimeConversion(format!("Invalid timestamp {}", quote.timestamp))
                })?
                .date_naive();
            closes.push(DailyClose {
                date,
                close: quote.close,
                adjclose: quote.adjclose,
                volume: quote.volume,
            });
        }

        closes.sort_by_key(|c| c.date);
        Ok(closes)
    }

    /// Fetch the year-to-date price return for a symbol, in percent.
    ///
    /// Measured from the first trading close of `asof`'s calendar year to the
    /// latest close at or before `asof`.
    pub async fn fetch_ytd_return(&self, symbol: &str, asof: DateTime<Utc>) -> Result<f64> {
        let year_start = Utc
            .with_ymd_and_hms(asof.year(), 1, 1, 0, 0, 0)
            .single()
            .ok_or_else(|| {
                DataError::TimeConversion(format!("Invalid year start for {}", asof.year()))
            })?;

        let closes = self.fetch_closes(symbol, year_start, asof).await?;
        ytd_return_from_closes(&closes, symbol)
    }
}

impl Default for YahooQuoteProvider {
    fn default() -> Self {
        Self::new()
    }
}

/// Compute the YTD return (percent) from a date-sorted close series.
pub(crate) fn ytd_return_from_closes(closes: &[DailyClose], symbol: &str) -> Result<f64> {
    let first = closes.first().ok_or_else(|| DataError::MissingData {
        symbol: symbol.to_string(),
        reason: "Empty close series".to_string(),
    })?;
    let last = closes.last().expect("non-empty checked above");

    if first.adjclose <= 0.0 {
        return Err(DataError::MissingData {
            symbol: symbol.to_string(),
            reason: format!("Non-positive base close {}", first.adjclose),
        });
    }

    Ok((last.adjclose / first.adjclose - 1.0) * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn close(date: (i32, u32, u32), adjclose: f64) -> DailyClose {
        DailyClose {
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            close: adjclose,
            adjclose,
            volume: 1_000,
        }
    }

    #[test]
    fn test_ytd_return_from_closes() {
        let closes = vec![
            close((2025, 1, 2), 100.0),
            close((2025, 6, 2), 140.0),
            close((2025, 8, 22), 125.0),
        ];
        let ytd = ytd_return_from_closes(&closes, "NVDA").unwrap();
        assert_relative_eq!(ytd, 25.0, epsilon = 1e-12);
    }

    #[test]
    fn test_ytd_return_negative() {
        let closes = vec![close((2025, 1, 2), 50.0), close((2025, 8, 22), 35.0)];
        let ytd = ytd_return_from_closes(&closes, "INTC").unwrap();
        assert_relative_eq!(ytd, -30.0, epsilon = 1e-12);
    }

    #[test]
    fn test_ytd_return_empty_series() {
        let err = ytd_return_from_closes(&[], "GFS").unwrap_err();
        assert!(matches!(err, DataError::MissingData { .. }));
    }

    #[test]
    fn test_ytd_return_zero_base() {
        let closes = vec![close((2025, 1, 2), 0.0), close((2025, 8, 22), 10.0)];
        let err = ytd_return_from_closes(&closes, "GFS").unwrap_err();
        assert!(matches!(err, DataError::MissingData { .. }));
    }
}
