//! Enumeration types for the reservation engine
//!
//! This module contains the allocation strategy reported for each booking and
//! the output formats supported by the command line driver.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Strategy that produced a room allocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AllocationStrategy {
    /// Every room of the group sits on a single floor
    SameFloor,
    /// The group spans floors, ordered by floor then position
    CrossFloor,
}

impl fmt::Display for AllocationStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AllocationStrategy::SameFloor => write!(f, "Same Floor"),
            AllocationStrategy::CrossFloor => write!(f, "Cross Floor"),
        }
    }
}

impl FromStr for AllocationStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "same floor" | "samefloor" | "same-floor" => Ok(AllocationStrategy::SameFloor),
            "cross floor" | "crossfloor" | "cross-floor" => Ok(AllocationStrategy::CrossFloor),
            _ => Err(format!("Unknown allocation strategy: {}", s)),
        }
    }
}

/// Output formats for booking results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable lines
    Text,
    /// JSON format for structured data
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "TEXT"),
            OutputFormat::Json => write!(f, "JSON"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocation_strategy_display() {
        assert_eq!(format!("{}", AllocationStrategy::SameFloor), "Same Floor");
        assert_eq!(format!("{}", AllocationStrategy::CrossFloor), "Cross Floor");
    }

    #[test]
    fn test_allocation_strategy_from_str() {
        assert_eq!("same floor".parse::<AllocationStrategy>().unwrap(), AllocationStrategy::SameFloor);
        assert_eq!("SameFloor".parse::<AllocationStrategy>().unwrap(), AllocationStrategy::SameFloor);
        assert_eq!("cross-floor".parse::<AllocationStrategy>().unwrap(), AllocationStrategy::CrossFloor);

        assert!("diagonal".parse::<AllocationStrategy>().is_err());
    }

    #[test]
    fn test_output_format_display() {
        assert_eq!(format!("{}", OutputFormat::Text), "TEXT");
        assert_eq!(format!("{}", OutputFormat::Json), "JSON");
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);

        // Test error case
        assert!("csv".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_enum_serialization() {
        let strategy = AllocationStrategy::CrossFloor;
        let json = serde_json::to_string(&strategy).unwrap();
        let deserialized: AllocationStrategy = serde_json::from_str(&json).unwrap();
        assert_eq!(strategy, deserialized);
    }
}
