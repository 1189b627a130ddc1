//! Room allocation strategies
//!
//! This module contains the travel cost model and the two searches the booking
//! engine runs: a per-floor search and a whole-hotel fallback.
//!
//! # Overview
//!
//! - **travel_cost**: Two units per floor changed plus positional difference
//! - **same_floor**: Cheapest run of available rooms on one floor
//! - **cross_floor**: Cheapest run across the hotel, ordered by floor then position
//! - **Allocation**: A chosen group together with how it was found and what it costs
//!
//! Both searches price a group by its endpoints and keep the first window on
//! equal cost, so results are fully determined by the current booked state.
//!
//! # Usage Example
//!
//! ```rust
//! use hotel_room_reservation::allocation::*;
//! use hotel_room_reservation::inventory::generate_standard;
//!
//! let hotel = generate_standard();
//! let group = find_best_on_floor(&hotel.floors[0].rooms, 3).unwrap();
//! assert_eq!(group_cost(&group), Some(2));
//!
//! let fallback = find_best_across_hotel(&hotel, 2).unwrap();
//! assert_eq!(fallback[0].number, 101);
//! ```

pub mod cross_floor;
pub mod same_floor;
pub mod travel_cost;
mod window;

pub use cross_floor::find_best_across_hotel;
pub use same_floor::find_best_on_floor;
pub use travel_cost::{group_cost, travel_cost, VERTICAL_COST_PER_FLOOR};

use crate::inventory::Room;
use crate::types::AllocationStrategy;
use serde::{Deserialize, Serialize};

/// A booked group of rooms and how it was chosen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    /// Rooms in the order the search produced them
    pub rooms: Vec<Room>,
    /// Search that produced the group
    pub strategy: AllocationStrategy,
    /// Endpoint travel cost of the group
    pub travel_cost: u32,
}

impl Allocation {
    /// Create an allocation, pricing the group by its endpoints
    pub fn new(rooms: Vec<Room>, strategy: AllocationStrategy) -> Self {
        let travel_cost = group_cost(&rooms).unwrap_or(0);
        Self { rooms, strategy, travel_cost }
    }

    /// Room numbers in allocation order
    pub fn room_numbers(&self) -> Vec<u32> {
        self.rooms.iter().map(|r| r.number).collect()
    }

    /// Distinct floors touched, ascending
    pub fn floors(&self) -> Vec<u32> {
        let mut floors: Vec<u32> = self.rooms.iter().map(|r| r.floor).collect();
        floors.sort_unstable();
        floors.dedup();
        floors
    }

    /// Get the number of rooms in the allocation
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Check if the whole group sits on one floor
    pub fn is_single_floor(&self) -> bool {
        self.floors().len() <= 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocation_summary() {
        let rooms = vec![Room::new(1, 9), Room::new(1, 10), Room::new(2, 1)];
        let allocation = Allocation::new(rooms, AllocationStrategy::CrossFloor);

        assert_eq!(allocation.room_numbers(), vec![109, 110, 201]);
        assert_eq!(allocation.floors(), vec![1, 2]);
        assert_eq!(allocation.travel_cost, 10);
        assert_eq!(allocation.room_count(), 3);
        assert!(!allocation.is_single_floor());
    }

    #[test]
    fn test_single_floor_allocation() {
        let rooms = vec![Room::new(6, 2), Room::new(6, 3)];
        let allocation = Allocation::new(rooms, AllocationStrategy::SameFloor);
        assert!(allocation.is_single_floor());
        assert_eq!(allocation.travel_cost, 1);
    }

    #[test]
    fn test_floors_are_distinct_and_ascending_for_any_room_order() {
        let rooms = vec![Room::new(3, 1), Room::new(1, 4), Room::new(3, 2), Room::new(1, 5)];
        let allocation = Allocation::new(rooms, AllocationStrategy::CrossFloor);

        assert_eq!(allocation.floors(), vec![1, 3]);
        assert!(!allocation.is_single_floor());

        let rooms = vec![Room::new(4, 2), Room::new(4, 7), Room::new(4, 1)];
        let allocation = Allocation::new(rooms, AllocationStrategy::SameFloor);
        assert_eq!(allocation.floors(), vec![4]);
        assert!(allocation.is_single_floor());
    }
}
