//! Semiconductor industry segment definitions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Business-model segments within the semiconductor industry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Segment {
    /// Fabless chip designers (outsource manufacturing)
    Fabless,

    /// Pure-play contract foundries
    Foundry,

    /// Integrated device manufacturers (design and fabricate in-house)
    Idm,

    /// Memory manufacturers
    Memory,

    /// Semiconductor capital equipment suppliers
    Equipment,
}

impl Segment {
    /// Returns all segments.
    pub fn all() -> Vec<Self> {
        vec![
            Self::Fabless,
            Self::Foundry,
            Self::Idm,
            Self::Memory,
            Self::Equipment,
        ]
    }

    /// Returns the full segment name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Fabless => "Fabless",
            Self::Foundry => "Foundry",
            Self::Idm => "IDM",
            Self::Memory => "Memory",
            Self::Equipment => "Equipment",
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Segment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fabless" => Ok(Self::Fabless),
            "foundry" => Ok(Self::Foundry),
            "idm" => Ok(Self::Idm),
            "memory" => Ok(Self::Memory),
            "equipment" => Ok(Self::Equipment),
            _ => Err(format!("Unknown segment: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_roundtrip() {
        for segment in Segment::all() {
            let parsed: Segment = segment.name().parse().unwrap();
            assert_eq!(parsed, segment);
        }
    }

    #[test]
    fn test_unknown_segment() {
        assert!("conglomerate".parse::<Segment>().is_err());
    }
}
