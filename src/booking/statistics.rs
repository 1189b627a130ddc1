//! Statistics collection and reporting
//!
//! Booking counters accumulate inside an engine across requests; occupancy
//! statistics are computed on demand from a snapshot.

use crate::allocation::Allocation;
use crate::booking::error::BookingError;
use crate::inventory::HotelSnapshot;
use crate::types::AllocationStrategy;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Running counters for booking requests handled by one engine
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingStatistics {
    /// Every request the engine saw, successful or not
    pub total_requests: usize,
    /// Requests satisfied from a single floor
    pub same_floor_bookings: usize,
    /// Requests satisfied by the cross-floor fallback
    pub cross_floor_bookings: usize,
    /// Requests rejected for an out-of-range room count
    pub invalid_requests: usize,
    /// Requests rejected for lack of free rooms, including rooms taken since planning
    pub insufficient_availability: usize,
    /// Rooms marked booked across all successful requests
    pub rooms_booked: usize,
    /// Sum of endpoint travel costs across all successful requests
    pub total_travel_cost: u64,
}

impl BookingStatistics {
    /// Create empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successful allocation
    pub fn record_allocation(&mut self, allocation: &Allocation) {
        self.total_requests += 1;
        match allocation.strategy {
            AllocationStrategy::SameFloor => self.same_floor_bookings += 1,
            AllocationStrategy::CrossFloor => self.cross_floor_bookings += 1,
        }
        self.rooms_booked += allocation.room_count();
        self.total_travel_cost += u64::from(allocation.travel_cost);
    }

    /// Record a rejected request
    pub fn record_rejection(&mut self, error: &BookingError) {
        self.total_requests += 1;
        match error {
            BookingError::InvalidRequest { .. } => self.invalid_requests += 1,
            BookingError::InsufficientAvailability { .. } | BookingError::RoomUnavailable { .. } => {
                self.insufficient_availability += 1
            }
        }
    }

    /// Get the number of successful bookings
    pub fn successful_bookings(&self) -> usize {
        self.same_floor_bookings + self.cross_floor_bookings
    }

    /// Get the number of rejected requests
    pub fn rejected_requests(&self) -> usize {
        self.invalid_requests + self.insufficient_availability
    }

    /// Get the percentage of requests that succeeded
    pub fn success_percentage(&self) -> f64 {
        percentage(self.successful_bookings(), self.total_requests)
    }

    /// Get the percentage of successful bookings that needed the cross-floor fallback
    pub fn cross_floor_percentage(&self) -> f64 {
        percentage(self.cross_floor_bookings, self.successful_bookings())
    }

    /// Get the mean endpoint travel cost of successful bookings
    pub fn average_travel_cost(&self) -> f64 {
        let bookings = self.successful_bookings();
        if bookings == 0 {
            0.0
        } else {
            self.total_travel_cost as f64 / bookings as f64
        }
    }

    /// Get a one-line summary
    pub fn compact_summary(&self) -> String {
        format!(
            "{} requests: {} same-floor, {} cross-floor, {} rejected; {} rooms booked",
            self.total_requests,
            self.same_floor_bookings,
            self.cross_floor_bookings,
            self.rejected_requests(),
            self.rooms_booked
        )
    }
}

impl fmt::Display for BookingStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Booking Statistics:")?;
        writeln!(f, "  Total Requests: {}", self.total_requests)?;
        writeln!(
            f,
            "  Successful: {} ({:.1}%)",
            self.successful_bookings(),
            self.success_percentage()
        )?;
        writeln!(f, "    Same Floor: {}", self.same_floor_bookings)?;
        writeln!(
            f,
            "    Cross Floor: {} ({:.1}%)",
            self.cross_floor_bookings,
            self.cross_floor_percentage()
        )?;
        writeln!(f, "  Rejected (invalid count): {}", self.invalid_requests)?;
        writeln!(f, "  Rejected (no availability): {}", self.insufficient_availability)?;
        writeln!(f, "  Rooms Booked: {}", self.rooms_booked)?;
        write!(f, "  Average Travel Cost: {:.2}", self.average_travel_cost())
    }
}

/// Availability of one floor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloorOccupancy {
    /// Floor number
    pub floor: u32,
    /// Rooms on the floor
    pub total_rooms: usize,
    /// Unbooked rooms on the floor
    pub available_rooms: usize,
}

/// Occupancy summary derived from a snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccupancyStatistics {
    /// Rooms in the hotel
    pub total_rooms: usize,
    /// Booked rooms
    pub booked_rooms: usize,
    /// Unbooked rooms
    pub available_rooms: usize,
    /// Per-floor availability, ascending
    pub floors: Vec<FloorOccupancy>,
    /// Floors that could still take a maximum-size request on their own
    pub floors_fitting_max_book: usize,
}

impl OccupancyStatistics {
    /// Summarize a snapshot against the engine's maximum request size
    pub fn from_snapshot(snapshot: &HotelSnapshot, max_book: usize) -> Self {
        let floors: Vec<FloorOccupancy> = snapshot
            .floors
            .iter()
            .map(|f| FloorOccupancy {
                floor: f.number,
                total_rooms: f.rooms.len(),
                available_rooms: f.available_count(),
            })
            .collect();
        let floors_fitting_max_book =
            floors.iter().filter(|f| f.available_rooms >= max_book).count();

        Self {
            total_rooms: snapshot.total_rooms(),
            booked_rooms: snapshot.booked_count(),
            available_rooms: snapshot.available_count(),
            floors,
            floors_fitting_max_book,
        }
    }

    /// Get the percentage of rooms booked
    pub fn occupancy_percentage(&self) -> f64 {
        percentage(self.booked_rooms, self.total_rooms)
    }
}

impl fmt::Display for OccupancyStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Occupancy:")?;
        writeln!(
            f,
            "  Booked: {} / {} ({:.1}%)",
            self.booked_rooms,
            self.total_rooms,
            self.occupancy_percentage()
        )?;
        for floor in self.floors.iter().rev() {
            writeln!(
                f,
                "  Floor {:>2}: {} of {} available",
                floor.floor, floor.available_rooms, floor.total_rooms
            )?;
        }
        write!(f, "  Floors able to take a full request: {}", self.floors_fitting_max_book)
    }
}

fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        (part as f64 / whole as f64) * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::{generate_standard, Room};

    #[test]
    fn test_booking_statistics_counts() {
        let mut stats = BookingStatistics::new();
        stats.record_allocation(&Allocation::new(
            vec![Room::new(1, 1), Room::new(1, 2)],
            AllocationStrategy::SameFloor,
        ));
        stats.record_allocation(&Allocation::new(
            vec![Room::new(1, 10), Room::new(2, 1)],
            AllocationStrategy::CrossFloor,
        ));
        stats.record_rejection(&BookingError::invalid_request(0, 5));
        stats.record_rejection(&BookingError::insufficient_availability(5, 1));

        assert_eq!(stats.total_requests, 4);
        assert_eq!(stats.successful_bookings(), 2);
        assert_eq!(stats.rejected_requests(), 2);
        assert_eq!(stats.rooms_booked, 4);
        assert_eq!(stats.total_travel_cost, 1 + 11);
        assert_eq!(stats.success_percentage(), 50.0);
        assert_eq!(stats.cross_floor_percentage(), 50.0);
        assert_eq!(stats.average_travel_cost(), 6.0);
        assert!(stats.compact_summary().starts_with("4 requests"));
    }

    #[test]
    fn test_empty_statistics_do_not_divide_by_zero() {
        let stats = BookingStatistics::new();
        assert_eq!(stats.success_percentage(), 0.0);
        assert_eq!(stats.average_travel_cost(), 0.0);
        assert!(stats.to_string().contains("Total Requests: 0"));
    }

    #[test]
    fn test_occupancy_statistics() {
        let mut hotel = generate_standard();
        for number in [101, 102, 103, 104, 105, 106, 1001] {
            hotel.get_room_mut(number).unwrap().book();
        }

        let stats = OccupancyStatistics::from_snapshot(&hotel.snapshot(), 5);
        assert_eq!(stats.total_rooms, 97);
        assert_eq!(stats.booked_rooms, 7);
        assert_eq!(stats.available_rooms, 90);
        assert_eq!(stats.floors[0].available_rooms, 4);
        assert_eq!(stats.floors[9].available_rooms, 6);
        assert_eq!(stats.floors_fitting_max_book, 9);
        assert!((stats.occupancy_percentage() - 700.0 / 97.0).abs() < 1e-9);
    }
}
