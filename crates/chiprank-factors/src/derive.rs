//! Factor derivation from raw fundamentals.
//!
//! Division-prone ratios carry an explicit tagged result instead of relying
//! on floating-point NaN/∞ propagation: a zero denominator yields
//! [`FactorValue::Undefined`] with a reason, which downstream stages treat
//! as an exclusion, never as a number.

use chiprank_data::CompanyRecord;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a derived ratio is undefined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UndefinedReason {
    /// EBITDA is zero; the valuation multiple has no value.
    ZeroEbitda,
    /// Revenue is zero; R&D intensity has no value.
    ZeroRevenue,
}

impl fmt::Display for UndefinedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroEbitda => write!(f, "valuation multiple undefined (EBITDA is zero)"),
            Self::ZeroRevenue => write!(f, "R&D intensity undefined (revenue is zero)"),
        }
    }
}

/// A derived ratio: a defined value or a tagged reason it has none.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum FactorValue {
    /// The ratio is well defined.
    Defined(f64),
    /// The ratio's denominator was zero.
    Undefined(UndefinedReason),
}

impl FactorValue {
    /// The defined value, if any.
    pub const fn value(&self) -> Option<f64> {
        match self {
            Self::Defined(v) => Some(*v),
            Self::Undefined(_) => None,
        }
    }

    /// Whether the ratio is defined.
    pub const fn is_defined(&self) -> bool {
        matches!(self, Self::Defined(_))
    }
}

/// Intermediate factor inputs for one record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedFactors {
    /// Market cap / EBITDA (EV/EBITDA proxy). Lower is better.
    pub valuation_multiple: FactorValue,
    /// R&D expense / revenue. Higher is better.
    pub rd_intensity: FactorValue,
    /// YTD return passthrough, percent. Higher is better.
    pub momentum: f64,
}

impl DerivedFactors {
    /// The first undefined reason, if any ratio is undefined.
    pub const fn undefined_reason(&self) -> Option<UndefinedReason> {
        match (self.valuation_multiple, self.rd_intensity) {
            (FactorValue::Undefined(reason), _) => Some(reason),
            (_, FactorValue::Undefined(reason)) => Some(reason),
            _ => None,
        }
    }

    /// All three factor inputs, when every ratio is defined.
    pub fn complete(&self) -> Option<(f64, f64, f64)> {
        Some((
            self.valuation_multiple.value()?,
            self.rd_intensity.value()?,
            self.momentum,
        ))
    }
}

/// Compute the derived factor inputs for one record.
pub fn derive_factors(record: &CompanyRecord) -> DerivedFactors {
    let valuation_multiple = if record.ebitda == 0.0 {
        FactorValue::Undefined(UndefinedReason::ZeroEbitda)
    } else {
        FactorValue::Defined(record.market_cap / record.ebitda)
    };

    let rd_intensity = if record.revenue == 0.0 {
        FactorValue::Undefined(UndefinedReason::ZeroRevenue)
    } else {
        FactorValue::Defined(record.rd_expense / record.revenue)
    };

    DerivedFactors {
        valuation_multiple,
        rd_intensity,
        momentum: record.ytd_return,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn record(market_cap: f64, revenue: f64, ebitda: f64, rd: f64, ytd: f64) -> CompanyRecord {
        CompanyRecord {
            ticker: "TEST".to_string(),
            name: "Test Co".to_string(),
            market_cap,
            revenue,
            ebitda,
            rd_expense: rd,
            ytd_return: ytd,
        }
    }

    #[test]
    fn test_derive_defined() {
        let factors = derive_factors(&record(100.0, 50.0, 10.0, 5.0, 20.0));

        assert_relative_eq!(factors.valuation_multiple.value().unwrap(), 10.0);
        assert_relative_eq!(factors.rd_intensity.value().unwrap(), 0.1);
        assert_relative_eq!(factors.momentum, 20.0);
        assert!(factors.undefined_reason().is_none());
    }

    #[test]
    fn test_zero_ebitda_is_tagged_not_infinite() {
        let factors = derive_factors(&record(100.0, 50.0, 0.0, 5.0, 20.0));

        assert_eq!(
            factors.valuation_multiple,
            FactorValue::Undefined(UndefinedReason::ZeroEbitda)
        );
        assert_eq!(factors.undefined_reason(), Some(UndefinedReason::ZeroEbitda));
        assert!(factors.complete().is_none());
    }

    #[test]
    fn test_zero_revenue_is_tagged() {
        let factors = derive_factors(&record(100.0, 0.0, 10.0, 5.0, 20.0));

        assert_eq!(
            factors.rd_intensity,
            FactorValue::Undefined(UndefinedReason::ZeroRevenue)
        );
        assert_eq!(factors.undefined_reason(), Some(UndefinedReason::ZeroRevenue));
    }

    #[test]
    fn test_negative_ebitda_is_defined() {
        // Loss-making on EBITDA still has a (negative) multiple
        let factors = derive_factors(&record(100.0, 50.0, -10.0, 5.0, 20.0));
        assert_relative_eq!(factors.valuation_multiple.value().unwrap(), -10.0);
    }

    #[test]
    fn test_zero_rd_is_defined_zero_intensity() {
        let factors = derive_factors(&record(100.0, 50.0, 10.0, 0.0, 20.0));
        assert_relative_eq!(factors.rd_intensity.value().unwrap(), 0.0);
    }
}
