//! Universe management for the Chiprank ranking model.
//!
//! This module defines the fixed semiconductor universe evaluated in each
//! run, along with industry segment classifications for its constituents.

pub mod segment;
pub mod semis;

pub use segment::Segment;
pub use semis::{Constituent, SemiconductorUniverse};

/// Trait for stock universes.
pub trait Universe {
    /// Get all symbols in the universe.
    fn symbols(&self) -> Vec<String>;

    /// Check if a symbol is in the universe.
    fn contains(&self, symbol: &str) -> bool {
        self.symbols().contains(&symbol.to_string())
    }

    /// Get the number of constituents.
    fn size(&self) -> usize {
        self.symbols().len()
    }
}

impl Universe for SemiconductorUniverse {
    fn symbols(&self) -> Vec<String> {
        self.symbols()
    }
}
