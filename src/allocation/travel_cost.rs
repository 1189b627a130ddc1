//! Travel cost between rooms
//!
//! Distance is a two-term metric: two units per floor changed plus the
//! positional difference within the floor. A group of rooms is priced by its
//! endpoints only, the first and last room under the group's current order.

use crate::inventory::Room;

/// Cost of moving one floor up or down
pub const VERTICAL_COST_PER_FLOOR: u32 = 2;

/// Symmetric travel cost between two rooms
pub fn travel_cost(a: &Room, b: &Room) -> u32 {
    let vertical = a.floor.abs_diff(b.floor) * VERTICAL_COST_PER_FLOOR;
    let horizontal = a.position().abs_diff(b.position());
    vertical + horizontal
}

/// Cost of a group, measured between its first and last room
///
/// Returns `None` for an empty group. A single room costs zero.
pub fn group_cost(group: &[Room]) -> Option<u32> {
    match (group.first(), group.last()) {
        (Some(first), Some(last)) => Some(travel_cost(first, last)),
        _ => None,
    }
}
