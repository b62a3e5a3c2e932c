//! The fixed semiconductor universe with segment classifications.

use crate::universe::segment::Segment;
use std::collections::HashMap;

/// Semiconductor universe constituent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constituent {
    /// Stock symbol (Yahoo Finance convention).
    pub symbol: String,
    /// Company display name.
    pub name: String,
    /// Industry segment.
    pub segment: Segment,
}

impl Constituent {
    /// Create a new constituent.
    pub fn new(symbol: impl Into<String>, name: impl Into<String>, segment: Segment) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            segment,
        }
    }
}

/// The global semiconductor universe evaluated in each run.
#[derive(Debug, Clone)]
pub struct SemiconductorUniverse {
    constituents: Vec<Constituent>,
    symbol_to_segment: HashMap<String, Segment>,
}

impl SemiconductorUniverse {
    /// Create the universe with its default constituents.
    pub fn new() -> Self {
        let constituents = Self::default_constituents();
        let symbol_to_segment = constituents
            .iter()
            .map(|c| (c.symbol.clone(), c.segment))
            .collect();

        Self {
            constituents,
            symbol_to_segment,
        }
    }

    /// Get all constituents.
    pub fn constituents(&self) -> &[Constituent] {
        &self.constituents
    }

    /// Get all symbols.
    pub fn symbols(&self) -> Vec<String> {
        self.constituents.iter().map(|c| c.symbol.clone()).collect()
    }

    /// Get the segment for a symbol.
    pub fn segment(&self, symbol: &str) -> Option<Segment> {
        self.symbol_to_segment.get(symbol).copied()
    }

    /// Get all symbols in a specific segment.
    pub fn symbols_in_segment(&self, segment: Segment) -> Vec<String> {
        self.constituents
            .iter()
            .filter(|c| c.segment == segment)
            .map(|c| c.symbol.clone())
            .collect()
    }

    /// Get the count of constituents per segment.
    pub fn segment_counts(&self) -> HashMap<Segment, usize> {
        let mut counts = HashMap::new();
        for constituent in &self.constituents {
            *counts.entry(constituent.segment).or_insert(0) += 1;
        }
        counts
    }

    /// Default universe: the 14 global names tracked by the model.
    fn default_constituents() -> Vec<Constituent> {
        vec![
            Constituent::new("NVDA", "NVIDIA", Segment::Fabless),
            Constituent::new("AMD", "Advanced Micro Devices", Segment::Fabless),
            Constituent::new("QCOM", "Qualcomm", Segment::Fabless),
            Constituent::new("AVGO", "Broadcom", Segment::Fabless),
            Constituent::new("TSM", "Taiwan Semiconductor", Segment::Foundry),
            Constituent::new("0981.HK", "SMIC", Segment::Foundry),
            Constituent::new("GFS", "GlobalFoundries", Segment::Foundry),
            Constituent::new("TXN", "Texas Instruments", Segment::Idm),
            Constituent::new("ADI", "Analog Devices", Segment::Idm),
            Constituent::new("INTC", "Intel", Segment::Idm),
            Constituent::new("MU", "Micron Technology", Segment::Memory),
            Constituent::new("ASML", "ASML Holding", Segment::Equipment),
            Constituent::new("LRCX", "Lam Research", Segment::Equipment),
            Constituent::new("AMAT", "Applied Materials", Segment::Equipment),
        ]
    }
}

impl Default for SemiconductorUniverse {
    fn default() -> Self {
        Self::new()
    }
}
