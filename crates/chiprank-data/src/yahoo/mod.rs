//! Market-data acquisition from Yahoo Finance.
//!
//! These providers exist to build a fresh canonical snapshot for the fixed
//! universe. The scoring engine never calls them; it consumes only the CSV
//! they write.

pub mod fundamentals;
pub mod quotes;

pub use fundamentals::{FundamentalData, YahooFundamentalsProvider};
pub use quotes::{DailyClose, YahooQuoteProvider};
