//! Hotel inventory and room lookup
//!
//! This module contains the Hotel struct: the ordered collection of floors that
//! a session owns exclusively and that the booking engine mutates in place.

use crate::booking::{BookingError, BookingResult};
use crate::inventory::{floor::Floor, room::Room, snapshot::HotelSnapshot};
use crate::inventory::room::ROOM_NUMBER_FLOOR_FACTOR;
use serde::{Deserialize, Serialize};

/// The full room inventory, floors in ascending order
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Hotel {
    /// All floors, index order is floor number ascending
    pub floors: Vec<Floor>,
}

impl Hotel {
    /// Create a new empty hotel
    pub fn new() -> Self {
        Self { floors: Vec::new() }
    }

    /// Add a floor above the current top floor
    pub fn add_floor(&mut self, floor: Floor) {
        self.floors.push(floor);
    }

    /// Get a floor by number
    pub fn get_floor(&self, number: u32) -> Option<&Floor> {
        self.floors.iter().find(|f| f.number == number)
    }

    /// Get a room by number
    pub fn get_room(&self, number: u32) -> Option<&Room> {
        self.get_floor(number / ROOM_NUMBER_FLOOR_FACTOR).and_then(|f| f.get_room(number))
    }

    /// Get a mutable reference to a room by number
    pub fn get_room_mut(&mut self, number: u32) -> Option<&mut Room> {
        let floor_number = number / ROOM_NUMBER_FLOOR_FACTOR;
        self.floors
            .iter_mut()
            .find(|f| f.number == floor_number)
            .and_then(|f| f.get_room_mut(number))
    }

    /// Iterate every room, floor by floor in physical order
    pub fn rooms(&self) -> impl Iterator<Item = &Room> + '_ {
        self.floors.iter().flat_map(|f| f.rooms.iter())
    }

    /// Iterate every room mutably
    pub fn rooms_mut(&mut self) -> impl Iterator<Item = &mut Room> + '_ {
        self.floors.iter_mut().flat_map(|f| f.rooms.iter_mut())
    }

    /// Get the number of floors
    pub fn floor_count(&self) -> usize {
        self.floors.len()
    }

    /// Get the total number of rooms
    pub fn total_room_count(&self) -> usize {
        self.floors.iter().map(Floor::room_count).sum()
    }

    /// Get the number of booked rooms
    pub fn booked_count(&self) -> usize {
        self.rooms().filter(|r| r.booked).count()
    }

    /// Get the number of unbooked rooms
    pub fn available_count(&self) -> usize {
        self.rooms().filter(|r| r.is_available()).count()
    }

    /// Unbooked room count for each floor, in floor order
    pub fn available_per_floor(&self) -> Vec<(u32, usize)> {
        self.floors.iter().map(|f| (f.number, f.available_count())).collect()
    }

    /// Clear every booked flag
    pub fn reset(&mut self) {
        self.rooms_mut().for_each(Room::release);
    }

    /// Take an owned, read-only view of the current booked state
    pub fn snapshot(&self) -> HotelSnapshot {
        HotelSnapshot::capture(self)
    }

    /// Mark a previously selected group booked and return the rooms as they now stand
    ///
    /// Every room in the group must be present and unbooked; otherwise nothing is
    /// marked and the first offending room is reported.
    pub(crate) fn mark_booked(&mut self, group: &[Room]) -> BookingResult<Vec<Room>> {
        if let Some(stale) = group
            .iter()
            .find(|selected| !self.get_room(selected.number).is_some_and(Room::is_available))
        {
            return Err(BookingError::room_unavailable(stale.number));
        }

        let mut booked = Vec::with_capacity(group.len());
        for selected in group {
            if let Some(room) = self.get_room_mut(selected.number) {
                room.book();
                booked.push(*room);
            }
        }
        Ok(booked)
    }

    /// Validate floor ordering and per-floor room layout
    pub fn validate(&self) -> Result<(), String> {
        for (index, floor) in self.floors.iter().enumerate() {
            if floor.number as usize != index + 1 {
                return Err(format!(
                    "Floor {} is out of order (expected floor {})",
                    floor.number,
                    index + 1
                ));
            }
            floor.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::generator::generate_standard;

    #[test]
    fn test_room_lookup() {
        let hotel = generate_standard();
        assert_eq!(hotel.get_room(101).map(|r| r.floor), Some(1));
        assert_eq!(hotel.get_room(1007).map(|r| r.floor), Some(10));
        assert!(hotel.get_room(1008).is_none());
        assert!(hotel.get_room(1101).is_none());
        assert!(hotel.get_room(100).is_none());
    }

    #[test]
    fn test_counts_follow_bookings() {
        let mut hotel = generate_standard();
        assert_eq!(hotel.total_room_count(), 97);
        assert_eq!(hotel.available_count(), 97);

        hotel.get_room_mut(305).unwrap().book();
        hotel.get_room_mut(1001).unwrap().book();
        assert_eq!(hotel.booked_count(), 2);
        assert_eq!(hotel.available_count(), 95);

        let per_floor = hotel.available_per_floor();
        assert_eq!(per_floor[2], (3, 9));
        assert_eq!(per_floor[9], (10, 6));
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut hotel = generate_standard();
        hotel.rooms_mut().for_each(Room::book);
        assert_eq!(hotel.booked_count(), 97);

        hotel.reset();
        assert_eq!(hotel.booked_count(), 0);
    }

    #[test]
    fn test_mark_booked_returns_post_booking_rooms() {
        let mut hotel = generate_standard();
        let group = vec![Room::new(2, 3), Room::new(2, 4)];

        let booked = hotel.mark_booked(&group).unwrap();
        assert_eq!(booked.len(), 2);
        assert!(booked.iter().all(|r| r.booked));
        assert!(hotel.get_room(203).unwrap().booked);
        assert!(hotel.get_room(204).unwrap().booked);
    }

    #[test]
    fn test_mark_booked_rejects_stale_group_without_changes() {
        let mut hotel = generate_standard();
        hotel.get_room_mut(204).unwrap().book();
        let before = hotel.snapshot();

        let group = vec![Room::new(2, 3), Room::new(2, 4), Room::new(2, 5)];
        assert_eq!(hotel.mark_booked(&group), Err(BookingError::room_unavailable(204)));
        assert_eq!(hotel.snapshot(), before);

        let group = vec![Room::new(2, 6), Room::new(11, 1)];
        assert_eq!(hotel.mark_booked(&group), Err(BookingError::room_unavailable(1101)));
        assert!(hotel.get_room(206).unwrap().is_available());
    }

    #[test]
    fn test_validate_detects_floor_gap() {
        let mut hotel = Hotel::new();
        hotel.add_floor(Floor::new(2));
        assert!(hotel.validate().is_err());
        assert!(generate_standard().validate().is_ok());
    }
}
