//! Booking engine
//!
//! This module contains the BookingEngine, which validates a request, runs the
//! same-floor search floor by floor, falls back to the cross-floor search, and
//! only then marks the chosen rooms booked.

use crate::allocation::{find_best_across_hotel, find_best_on_floor, Allocation};
use crate::booking::{BookingError, BookingResult, BookingStatistics};
use crate::booking_event;
use crate::inventory::{Hotel, Room};
use crate::types::{AllocationStrategy, HotelConfig, MAX_BOOK};
use tracing::{debug, info, instrument};

/// Orchestrates the allocators against a caller-owned hotel
///
/// The engine never stores a hotel; every call borrows one mutably for its
/// duration.
#[derive(Debug, Clone)]
pub struct BookingEngine {
    /// Largest accepted request size
    max_book: usize,
    /// Counters for every request this engine handled
    statistics: BookingStatistics,
}

impl Default for BookingEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl BookingEngine {
    /// Create an engine that accepts requests of 1 to [`MAX_BOOK`] rooms
    pub fn new() -> Self {
        Self::with_max_book(MAX_BOOK)
    }

    /// Create an engine with a custom request limit
    pub fn with_max_book(max_book: usize) -> Self {
        Self { max_book, statistics: BookingStatistics::new() }
    }

    /// Create an engine using the configured request limit
    pub fn from_config(config: &HotelConfig) -> Self {
        Self::with_max_book(config.max_book)
    }

    /// Get the largest accepted request size
    pub fn max_book(&self) -> usize {
        self.max_book
    }

    /// Get the counters for requests handled so far
    pub fn statistics(&self) -> &BookingStatistics {
        &self.statistics
    }

    /// Check that `count` lies in `1..=max_book`
    pub fn validate_request(&self, count: usize) -> BookingResult<()> {
        if count < 1 || count > self.max_book {
            return Err(BookingError::invalid_request(count, self.max_book));
        }
        Ok(())
    }

    /// Choose the group a booking of `count` rooms would take, without booking it
    ///
    /// The first floor, in ascending order, that can hold the whole request wins
    /// regardless of what the cross-floor search would cost.
    pub fn plan(&self, hotel: &Hotel, count: usize) -> BookingResult<Allocation> {
        self.validate_request(count)?;

        for floor in &hotel.floors {
            if let Some(group) = find_best_on_floor(&floor.rooms, count) {
                debug!(floor = floor.number, count, "Request fits on a single floor");
                return Ok(Allocation::new(group, AllocationStrategy::SameFloor));
            }
        }

        debug!(count, "No single floor can hold the request, searching across floors");
        find_best_across_hotel(hotel, count)
            .map(|group| Allocation::new(group, AllocationStrategy::CrossFloor))
            .ok_or_else(|| BookingError::insufficient_availability(count, hotel.available_count()))
    }

    /// Book `count` rooms and report how they were chosen
    ///
    /// Nothing is marked booked unless a complete group was found.
    #[instrument(skip(self, hotel), fields(available = hotel.available_count()))]
    pub fn allocate(&mut self, hotel: &mut Hotel, count: usize) -> BookingResult<Allocation> {
        let booked = self.plan(hotel, count).and_then(|plan| {
            let rooms = hotel.mark_booked(&plan.rooms)?;
            Ok(Allocation { rooms, ..plan })
        });

        let allocation = match booked {
            Ok(allocation) => allocation,
            Err(error) => {
                self.statistics.record_rejection(&error);
                booking_event!(warn, "Booking rejected", count = count, reason = error.category());
                return Err(error);
            }
        };
        self.statistics.record_allocation(&allocation);

        info!(
            component = "booking",
            count,
            strategy = %allocation.strategy,
            travel_cost = allocation.travel_cost,
            rooms = ?allocation.room_numbers(),
            "Rooms booked"
        );
        Ok(allocation)
    }

    /// Book `count` rooms and return them in their booked state
    pub fn book(&mut self, hotel: &mut Hotel, count: usize) -> BookingResult<Vec<Room>> {
        self.allocate(hotel, count).map(|allocation| allocation.rooms)
    }
}

/// Book `count` rooms with the standard request limit
pub fn book(hotel: &mut Hotel, count: usize) -> BookingResult<Vec<Room>> {
    BookingEngine::new().book(hotel, count)
}
