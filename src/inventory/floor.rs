//! Floor management and room organization
//!
//! This module contains the Floor struct, an ordered run of rooms where index
//! order is physical position order.

use crate::inventory::room::{Room, ROOM_NUMBER_FLOOR_FACTOR};
use serde::{Deserialize, Serialize};

/// Represents one floor of the hotel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Floor {
    /// Floor number (1-indexed)
    pub number: u32,
    /// Rooms on this floor in physical order
    pub rooms: Vec<Room>,
}

impl Floor {
    /// Create a new empty floor
    pub fn new(number: u32) -> Self {
        Self { number, rooms: Vec::new() }
    }

    /// Append a room at the next physical position
    pub fn add_room(&mut self, mut room: Room) {
        // Ensure the room belongs to this floor
        room.floor = self.number;
        self.rooms.push(room);
    }

    /// Get a room by number
    pub fn get_room(&self, number: u32) -> Option<&Room> {
        self.rooms.iter().find(|r| r.number == number)
    }

    /// Get a mutable reference to a room by number
    pub fn get_room_mut(&mut self, number: u32) -> Option<&mut Room> {
        self.rooms.iter_mut().find(|r| r.number == number)
    }

    /// Unbooked rooms in physical order
    pub fn available_rooms(&self) -> impl Iterator<Item = &Room> + '_ {
        self.rooms.iter().filter(|r| r.is_available())
    }

    /// Get the number of rooms on the floor
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Get the number of unbooked rooms on the floor
    pub fn available_count(&self) -> usize {
        self.available_rooms().count()
    }

    /// Get the number of booked rooms on the floor
    pub fn booked_count(&self) -> usize {
        self.room_count() - self.available_count()
    }

    /// Check if the floor can hold a request of `count` rooms on its own
    pub fn can_accommodate(&self, count: usize) -> bool {
        self.available_count() >= count
    }

    /// Validate that every room belongs to this floor and sits at its index position
    pub fn validate(&self) -> Result<(), String> {
        for (index, room) in self.rooms.iter().enumerate() {
            if room.floor != self.number || room.number / ROOM_NUMBER_FLOOR_FACTOR != self.number {
                return Err(format!("Room {} does not belong to floor {}", room.number, self.number));
            }
            if room.position() as usize != index + 1 {
                return Err(format!(
                    "Room {} is out of order on floor {} (expected position {})",
                    room.number,
                    self.number,
                    index + 1
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn floor_with(number: u32, rooms: u32) -> Floor {
        let mut floor = Floor::new(number);
        for position in 1..=rooms {
            floor.add_room(Room::new(number, position));
        }
        floor
    }

    #[test]
    fn test_floor_creation() {
        let floor = floor_with(2, 10);
        assert_eq!(floor.number, 2);
        assert_eq!(floor.room_count(), 10);
        assert_eq!(floor.available_count(), 10);
        assert_eq!(floor.booked_count(), 0);
        assert!(floor.validate().is_ok());
    }

    #[test]
    fn test_available_rooms_preserve_order() {
        let mut floor = floor_with(1, 5);
        floor.get_room_mut(102).unwrap().book();
        floor.get_room_mut(104).unwrap().book();

        let numbers: Vec<u32> = floor.available_rooms().map(|r| r.number).collect();
        assert_eq!(numbers, vec![101, 103, 105]);
        assert_eq!(floor.booked_count(), 2);
        assert!(floor.can_accommodate(3));
        assert!(!floor.can_accommodate(4));
    }

    #[test]
    fn test_add_room_reassigns_floor() {
        let mut floor = Floor::new(4);
        floor.add_room(Room { number: 401, floor: 9, booked: false });
        assert_eq!(floor.rooms[0].floor, 4);
    }

    #[test]
    fn test_validate_detects_misordered_rooms() {
        let mut floor = Floor::new(3);
        floor.add_room(Room::new(3, 2));
        floor.add_room(Room::new(3, 1));
        assert!(floor.validate().is_err());
    }
}
