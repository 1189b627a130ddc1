//! Room model
//!
//! This module contains the Room struct: the atomic bookable unit of the hotel,
//! identified by its number and carrying a mutable booked flag.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Multiplier that places the floor number in the hundreds digit of a room number
pub const ROOM_NUMBER_FLOOR_FACTOR: u32 = 100;

/// Represents a single room within a floor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Room {
    /// Room number, `floor * 100 + position`
    pub number: u32,
    /// Floor this room belongs to (1-indexed)
    pub floor: u32,
    /// Whether the room is currently booked
    pub booked: bool,
}

impl Room {
    /// Create a new unbooked room at a 1-indexed position on a floor
    pub fn new(floor: u32, position: u32) -> Self {
        Self { number: floor * ROOM_NUMBER_FLOOR_FACTOR + position, floor, booked: false }
    }

    /// Position of the room within its floor, recovered from the room number
    pub fn position(&self) -> u32 {
        self.number % ROOM_NUMBER_FLOOR_FACTOR
    }

    /// Check if the room can be booked
    pub fn is_available(&self) -> bool {
        !self.booked
    }

    /// Mark the room booked
    pub fn book(&mut self) {
        self.booked = true;
    }

    /// Mark the room free
    pub fn release(&mut self) {
        self.booked = false;
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_creation() {
        let room = Room::new(3, 7);
        assert_eq!(room.number, 307);
        assert_eq!(room.floor, 3);
        assert_eq!(room.position(), 7);
        assert!(room.is_available());
    }

    #[test]
    fn test_position_on_tenth_floor() {
        let room = Room::new(10, 7);
        assert_eq!(room.number, 1007);
        assert_eq!(room.position(), 7);
    }

    #[test]
    fn test_book_and_release() {
        let mut room = Room::new(1, 1);
        room.book();
        assert!(room.booked);
        assert!(!room.is_available());

        room.release();
        assert!(room.is_available());
    }

    #[test]
    fn test_room_display() {
        assert_eq!(Room::new(5, 2).to_string(), "502");
    }
}
