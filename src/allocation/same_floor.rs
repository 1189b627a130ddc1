//! Same-floor allocation
//!
//! Finds the cheapest run of `count` available rooms on a single floor. The run
//! is contiguous within the floor's available rooms, so booked rooms in between
//! are skipped rather than breaking the run.

use crate::allocation::window::cheapest_window;
use crate::inventory::Room;
use tracing::debug;

/// Best group of `count` available rooms among `floor_rooms`
///
/// `floor_rooms` must be in physical order. Returns `None` if fewer than
/// `count` rooms are available or `count` is zero.
pub fn find_best_on_floor(floor_rooms: &[Room], count: usize) -> Option<Vec<Room>> {
    let available: Vec<Room> = floor_rooms.iter().copied().filter(Room::is_available).collect();
    if available.len() < count {
        return None;
    }

    let (window, cost) = cheapest_window(&available, count)?;
    debug!(
        floor = window.first().map(|r| r.floor),
        count,
        cost,
        "Selected same-floor group"
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

    #[test]
    fn test_fresh_floor_takes_leftmost_rooms() {
        let hotel = generate_standard();
        let group = find_best_on_floor(&hotel.floors[0].rooms, 3).unwrap();
        assert_eq!(numbers(&group), vec![101, 102, 103]);
    }

    #[test]
    fn test_skips_booked_rooms() {
        let mut hotel = generate_standard();
        for number in [101, 102, 103, 104, 108, 109, 110] {
            hotel.get_room_mut(number).unwrap().book();
        }

        let group = find_best_on_floor(&hotel.floors[0].rooms, 2).unwrap();
        assert_eq!(numbers(&group), vec![105, 106]);
    }

    #[test]
    fn test_window_spans_booked_gap() {
        let mut hotel = generate_standard();
        // Available: 101, 104, 105, 106 -> windows of 3 cost 4 and 2
        for number in [102, 103, 107, 108, 109, 110] {
            hotel.get_room_mut(number).unwrap().book();
        }

        let group = find_best_on_floor(&hotel.floors[0].rooms, 3).unwrap();
        assert_eq!(numbers(&group), vec![104, 105, 106]);

        let group = find_best_on_floor(&hotel.floors[0].rooms, 4).unwrap();
        assert_eq!(numbers(&group), vec![101, 104, 105, 106]);
    }

    #[test]
    fn test_not_enough_rooms() {
        let mut hotel = generate_standard();
        hotel.floors[9].rooms.iter_mut().take(5).for_each(Room::book);

        assert!(find_best_on_floor(&hotel.floors[9].rooms, 3).is_none());
        let group = find_best_on_floor(&hotel.floors[9].rooms, 2).unwrap();
        assert_eq!(numbers(&group), vec![1006, 1007]);
    }

    #[test]
    fn test_zero_count_finds_nothing() {
        let hotel = generate_standard();
        assert!(find_best_on_floor(&hotel.floors[0].rooms, 0).is_none());
    }
}
