//! Hotel inventory
//!
//! This module holds the room grid: rooms, floors and the hotel that owns them,
//! the deterministic generator that builds it, and read-only snapshots.
//!
//! # Overview
//!
//! - **Room**: Bookable unit numbered `floor * 100 + position`
//! - **Floor**: Rooms in physical order
//! - **Hotel**: Floors in ascending order, owned by one session
//! - **HotelSnapshot**: Detached view of booked flags for display
//!
//! # Usage Example
//!
//! ```rust
//! use hotel_room_reservation::inventory::*;
//!
//! let mut hotel = generate_standard();
//! assert_eq!(hotel.total_room_count(), 97);
//!
//! if let Some(room) = hotel.get_room_mut(305) {
//!     room.book();
//! }
//! let snapshot = hotel.snapshot();
//! assert_eq!(snapshot.booked_room_numbers(), vec![305]);
//! ```

pub mod floor;
pub mod generator;
pub mod hotel;
pub mod room;
pub mod snapshot;

// Re-export all public types for convenience
pub use floor::Floor;
pub use generator::{generate, generate_standard, HotelGenerator};
pub use hotel::Hotel;
pub use room::Room;
pub use snapshot::{FloorSnapshot, HotelSnapshot};
