//! Cross-floor allocation
//!
//! Used when no single floor can hold a request. All available rooms in the
//! hotel are ordered by floor, then by position, and the cheapest run of
//! `count` consecutive rooms in that order is chosen.

use crate::allocation::window::cheapest_window;
use crate::inventory::{Hotel, Room};
use tracing::debug;

/// Best group of `count` available rooms anywhere in the hotel
///
/// The returned rooms are sorted by `(floor, position)`. Returns `None` if the
/// hotel has fewer than `count` available rooms or `count` is zero.
pub fn find_best_across_hotel(hotel: &Hotel, count: usize) -> Option<Vec<Room>> {
    let mut available: Vec<Room> = hotel.rooms().copied().filter(Room::is_available).collect();
    if available.len() < count {
        return None;
    }

    available.sort_by_key(|r| (r.floor, r.position()));

    let (window, cost) = cheapest_window(&available, count)?;
    debug!(
        first = window.first().map(|r| r.number),
        last = window.last().map(|r| r.number),
        count,
        cost,
        "Selected cross-floor group"
    );
    Some(window.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::generate_standard;

    fn numbers(rooms: &[Room]) -> Vec<u32> {
        rooms.iter().map(|r| r.number).collect()
    }

    fn hotel_with_free(free: &[u32]) -> Hotel {
        let mut hotel = generate_standard();
        for room in hotel.rooms_mut() {
            room.booked = !free.contains(&room.number);
        }
        hotel
    }

    #[test]
    fn test_picks_cheapest_run_across_floors() {
        // Sorted: 109, 110, 201, 702, 703 -> windows of 3 cost 10, 20, 12
        let hotel = hotel_with_free(&[109, 110, 201, 702, 703]);
        let group = find_best_across_hotel(&hotel, 3).unwrap();
        assert_eq!(numbers(&group), vec![109, 110, 201]);
    }

    #[test]
    fn test_later_window_wins_when_strictly_cheaper() {
        // Sorted: 101, 510, 601, 602 -> windows of 2 cost 17, 11, 1
        let hotel = hotel_with_free(&[101, 510, 601, 602]);
        let group = find_best_across_hotel(&hotel, 2).unwrap();
        assert_eq!(numbers(&group), vec![601, 602]);
    }

    #[test]
    fn test_result_is_sorted_by_floor_then_position() {
        let hotel = hotel_with_free(&[305, 204, 1001, 206]);
        let group = find_best_across_hotel(&hotel, 4).unwrap();
        assert_eq!(numbers(&group), vec![204, 206, 305, 1001]);
    }

    #[test]
    fn test_not_enough_rooms_in_hotel() {
        let hotel = hotel_with_free(&[101, 1007]);
        assert!(find_best_across_hotel(&hotel, 3).is_none());
        assert!(find_best_across_hotel(&hotel, 0).is_none());
    }
}
