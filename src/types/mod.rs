//! Core types and configuration for the reservation engine
//!
//! This module contains identifiers, enumerations, and configuration structures
//! used throughout the crate.
//!
//! # Overview
//!
//! - **Identifiers**: UUID-based session identifiers
//! - **Enums**: Allocation strategies and output formats
//! - **Configuration**: Hotel layout and booking limits with validation and CLI support
//!
//! # Usage Example
//!
//! ```rust
//! use hotel_room_reservation::types::*;
//!
//! let config = HotelConfig {
//!     floor_count: 3,
//!     ..Default::default()
//! };
//! assert!(config.validate().is_ok());
//! assert_eq!(config.max_book, MAX_BOOK);
//!
//! let strategy: AllocationStrategy = "same floor".parse().unwrap();
//! assert_eq!(strategy, AllocationStrategy::SameFloor);
//! ```

pub mod config;
pub mod enums;
pub mod identifiers;

// Re-export all public types for convenience
pub use config::*;
pub use enums::*;
pub use identifiers::*;
