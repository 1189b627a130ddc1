//! Booking orchestration and control
//!
//! This module contains the booking engine, occupancy simulation, isolated
//! sessions, statistics collection, logging setup and error handling.
//!
//! # Overview
//!
//! - **BookingEngine**: Validates a request, picks a group and marks it booked
//! - **OccupancySimulator**: Randomizes or resets every booked flag
//! - **SessionRegistry**: Keeps one hotel per caller behind its own lock
//! - **BookingStatistics**: Counts requests by outcome and strategy
//! - **BookingError**: Why a request was rejected
//!
//! # Usage Example
//!
//! ```rust
//! use hotel_room_reservation::booking::*;
//! use hotel_room_reservation::inventory::generate_standard;
//!
//! let mut hotel = generate_standard();
//! let mut engine = BookingEngine::new();
//!
//! let rooms = engine.book(&mut hotel, 3).unwrap();
//! assert_eq!(rooms.iter().map(|r| r.number).collect::<Vec<_>>(), vec![101, 102, 103]);
//!
//! assert!(matches!(engine.book(&mut hotel, 6), Err(BookingError::InvalidRequest { .. })));
//! assert_eq!(engine.statistics().total_requests, 2);
//!
//! let mut simulator = OccupancySimulator::with_seed(42);
//! simulator.randomize(&mut hotel, 0.3).unwrap();
//! reset(&mut hotel);
//! assert_eq!(hotel.booked_count(), 0);
//! ```

pub mod engine;
pub mod error;
pub mod logging;
pub mod occupancy;
pub mod session;
pub mod statistics;

// Re-export all public types for convenience
pub use engine::{book, BookingEngine};
pub use error::*;
pub use logging::*;
pub use occupancy::{randomize, reset, OccupancySimulator};
pub use session::{Session, SessionRegistry};
pub use statistics::*;
