//! Read-only hotel views
//!
//! A snapshot is an owned copy of the booked state, taken for display or
//! reporting; later mutations of the hotel do not reach it.

use crate::inventory::{hotel::Hotel, room::Room};
use serde::{Deserialize, Serialize};

/// Point-in-time copy of one floor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloorSnapshot {
    /// Floor number
    pub number: u32,
    /// Rooms in physical order
    pub rooms: Vec<Room>,
}

impl FloorSnapshot {
    /// Get the number of booked rooms on this floor
    pub fn booked_count(&self) -> usize {
        self.rooms.iter().filter(|r| r.booked).count()
    }

    /// Get the number of unbooked rooms on this floor
    pub fn available_count(&self) -> usize {
        self.rooms.len() - self.booked_count()
    }
}

/// Point-in-time copy of the whole hotel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotelSnapshot {
    /// Floors in ascending order
    pub floors: Vec<FloorSnapshot>,
}

impl HotelSnapshot {
    pub(crate) fn capture(hotel: &Hotel) -> Self {
        let floors = hotel
            .floors
            .iter()
            .map(|f| FloorSnapshot { number: f.number, rooms: f.rooms.clone() })
            .collect();
        Self { floors }
    }

    /// Get a floor view by number
    pub fn floor(&self, number: u32) -> Option<&FloorSnapshot> {
        self.floors.iter().find(|f| f.number == number)
    }

    /// Get the total number of rooms
    pub fn total_rooms(&self) -> usize {
        self.floors.iter().map(|f| f.rooms.len()).sum()
    }

    /// Get the number of booked rooms
    pub fn booked_count(&self) -> usize {
        self.floors.iter().map(FloorSnapshot::booked_count).sum()
    }

    /// Get the number of unbooked rooms
    pub fn available_count(&self) -> usize {
        self.total_rooms() - self.booked_count()
    }

    /// Numbers of all booked rooms in floor/position order
    pub fn booked_room_numbers(&self) -> Vec<u32> {
        self.floors
            .iter()
            .flat_map(|f| f.rooms.iter())
            .filter(|r| r.booked)
            .map(|r| r.number)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::inventory::generator::generate_standard;

    #[test]
    fn test_snapshot_mirrors_hotel() {
        let mut hotel = generate_standard();
        hotel.get_room_mut(410).unwrap().book();

        let snapshot = hotel.snapshot();
        assert_eq!(snapshot.floors.len(), 10);
        assert_eq!(snapshot.total_rooms(), 97);
        assert_eq!(snapshot.booked_count(), 1);
        assert_eq!(snapshot.booked_room_numbers(), vec![410]);
        assert_eq!(snapshot.floor(4).unwrap().available_count(), 9);
        assert_eq!(snapshot.floor(10).unwrap().rooms.len(), 7);
    }

    #[test]
    fn test_snapshot_is_detached_from_hotel() {
        let mut hotel = generate_standard();
        let before = hotel.snapshot();

        hotel.get_room_mut(101).unwrap().book();
        assert_eq!(before.booked_count(), 0);
        assert_eq!(hotel.snapshot().booked_count(), 1);
    }

    #[test]
    fn test_snapshot_serializes() {
        let hotel = generate_standard();
        let json = serde_json::to_string(&hotel.snapshot()).unwrap();
        assert!(json.contains("\"number\":101"));
        assert!(json.contains("\"booked\":false"));
    }
}
