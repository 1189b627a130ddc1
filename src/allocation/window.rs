//! Sliding-window search shared by both allocators

use crate::allocation::travel_cost::group_cost;
use crate::inventory::Room;

/// Find the cheapest run of `size` consecutive entries in `candidates`
///
/// Each window is priced by [`group_cost`]. On equal cost the earliest window
/// wins. Returns `None` when `size` is zero or exceeds the candidate count.
pub(crate) fn cheapest_window(candidates: &[Room], size: usize) -> Option<(&[Room], u32)> {
    if size == 0 || candidates.len() < size {
        return None;
    }

    let mut best: Option<(&[Room], u32)> = None;
    for window in candidates.windows(size) {
        let Some(cost) = group_cost(window) else { continue };
        match best {
            Some((_, best_cost)) if cost >= best_cost => {}
            _ => best = Some((window, cost)),
        }
    }
    best
}
