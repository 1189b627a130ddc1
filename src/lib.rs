//! Hotel Room Reservation
//!
//! A room allocation engine for a fixed-layout hotel that books groups of rooms
//! with the least travel time between the first and last room of the group.
//!
//! # Overview
//!
//! The hotel is a grid of floors, each holding rooms numbered
//! `floor * 100 + position`. Moving one floor costs two units and moving one
//! room along a floor costs one. A booking of 1 to 5 rooms is placed on a single
//! floor whenever any floor can hold it; only when none can does the engine
//! look across floors.
//!
//! ## Key Features
//!
//! - **Deterministic Allocation**: Same hotel state and request always yield the same rooms
//! - **Atomic Booking**: A request either books every room it returns or changes nothing
//! - **Occupancy Simulation**: Seeded random occupancy and reset for demos and tests
//! - **Isolated Sessions**: One hotel per caller, safe to drive from many threads
//! - **Configurable Layout**: Floor count, rooms per floor and request limit
//!
//! ## Quick Start
//!
//! ```rust
//! use hotel_room_reservation::*;
//!
//! let config = HotelConfig::default();
//! let mut hotel = generate(&config)?;
//! let mut engine = BookingEngine::from_config(&config);
//!
//! let allocation = engine.allocate(&mut hotel, 4)?;
//! assert_eq!(allocation.room_numbers(), vec![101, 102, 103, 104]);
//! assert_eq!(allocation.strategy, AllocationStrategy::SameFloor);
//! assert_eq!(allocation.travel_cost, 3);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`types`]: Configuration, identifiers and enums
//! - [`inventory`]: Rooms, floors, the hotel and its snapshots
//! - [`allocation`]: Travel cost and the same-floor and cross-floor searches
//! - [`booking`]: Engine, occupancy simulation, sessions and statistics
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐    ┌─────────────┐    ┌─────────────┐
//! │   Types     │    │  Inventory  │    │ Allocation  │
//! │             │    │             │    │             │
//! │ Config      │◄───┤ Rooms       │◄───┤ Travel Cost │
//! │ Enums       │    │ Floors      │    │ Same Floor  │
//! │ Identifiers │    │ Snapshots   │    │ Cross Floor │
//! └─────────────┘    └─────────────┘    └─────────────┘
//!                            ▲                   ▲
//!                            │                   │
//!                    ┌─────────────────────────────────┐
//!                    │            Booking              │
//!                    │                                 │
//!                    │ Engine  Occupancy  Sessions     │
//!                    │ Statistics  Errors  Logging     │
//!                    └─────────────────────────────────┘
//! ```
#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

// Module declarations
pub mod allocation;
pub mod booking;
pub mod inventory;
pub mod types;

// Core types and configuration
pub use types::{
    AllocationStrategy, ConfigError, ConfigValidationError, HotelConfig, OutputFormat, SessionId,
    MAX_BOOK,
};

// Inventory
pub use inventory::{generate, generate_standard, Floor, Hotel, HotelGenerator, HotelSnapshot, Room};

// Allocation
pub use allocation::{find_best_across_hotel, find_best_on_floor, travel_cost, Allocation};

// Booking
pub use booking::{
    BookingEngine, BookingError, BookingResult, BookingStatistics, LoggingConfig,
    OccupancySimulator, OccupancyStatistics, Session, SessionError, SessionRegistry,
};
