//! Inventory generation
//!
//! This module builds the room grid from a [`HotelConfig`]. Generation is
//! deterministic: the same configuration always yields the same hotel, with
//! every room unbooked.

use crate::inventory::{floor::Floor, hotel::Hotel, room::Room};
use crate::types::{ConfigValidationError, HotelConfig, MAX_FLOOR_COUNT, MAX_ROOMS_ON_FLOOR};
use tracing::{debug, instrument};

/// Generator for hotel inventories
#[derive(Debug, Clone, Default)]
pub struct HotelGenerator {
    config: HotelConfig,
}

impl HotelGenerator {
    /// Create a generator for the standard ten-floor layout
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a generator for a custom layout
    pub fn with_config(config: HotelConfig) -> Self {
        Self { config }
    }

    /// Validate the layout and build the hotel
    #[instrument(skip(self), fields(floors = self.config.floor_count))]
    pub fn generate(&self) -> Result<Hotel, ConfigValidationError> {
        self.config.validate()?;
        self.build()
    }

    fn build(&self) -> Result<Hotel, ConfigValidationError> {
        let too_large = || ConfigValidationError::FloorCountTooLarge {
            value: self.config.floor_count,
            max: MAX_FLOOR_COUNT,
        };

        let mut hotel = Hotel::new();
        for floor_number in 1..=self.config.floor_count {
            // rooms_on_floor is Some for every floor in 1..=floor_count
            let room_count = self.config.rooms_on_floor(floor_number).unwrap_or(0);
            let floor_number = u32::try_from(floor_number).map_err(|_| too_large())?;
            let room_count = u32::try_from(room_count).map_err(|_| {
                ConfigValidationError::InvalidRoomsPerFloor {
                    value: room_count,
                    max: MAX_ROOMS_ON_FLOOR,
                }
            })?;
            hotel.add_floor(Self::generate_floor(floor_number, room_count));
        }

        debug!(
            "Generated hotel with {} floors and {} rooms",
            hotel.floor_count(),
            hotel.total_room_count()
        );
        Ok(hotel)
    }

    /// Build one floor with rooms at positions `1..=room_count`
    ///
    /// `floor_number` must not exceed [`MAX_FLOOR_COUNT`]; [`HotelGenerator::generate`]
    /// checks this before building.
    pub fn generate_floor(floor_number: u32, room_count: u32) -> Floor {
        let mut floor = Floor::new(floor_number);
        for position in 1..=room_count {
            floor.add_room(Room::new(floor_number, position));
        }
        floor
    }
}

/// Build a hotel for the given layout
pub fn generate(config: &HotelConfig) -> Result<Hotel, ConfigValidationError> {
    HotelGenerator::with_config(config.clone()).generate()
}

/// Build the standard hotel: floors 1-9 with ten rooms, floor 10 with seven
pub fn generate_standard() -> Hotel {
    // The default layout always validates
    HotelGenerator::new().build().unwrap_or_default()
}
