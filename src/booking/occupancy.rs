//! Occupancy simulation
//!
//! Bulk operations over the booked flags: randomization for demos and tests,
//! and the unconditional reset. The random source is always injected so a
//! seeded generator reproduces the same occupancy.

use crate::inventory::Hotel;
use crate::types::{validate_percentage, ConfigValidationError, HotelConfig};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::fmt;
use tracing::{debug, info, instrument};

/// Randomizes and resets hotel occupancy using an owned random source
pub struct OccupancySimulator<R: Rng = StdRng> {
    rng: R,
}

impl<R: Rng> fmt::Debug for OccupancySimulator<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OccupancySimulator").finish_non_exhaustive()
    }
}

impl OccupancySimulator<StdRng> {
    /// Create a simulator with a deterministic seed
    pub fn with_seed(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }

    /// Create a simulator seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self { rng: StdRng::from_entropy() }
    }

    /// Create a simulator from the configured seed, falling back to entropy
    pub fn from_config(config: &HotelConfig) -> Self {
        match config.seed {
            Some(seed) => {
                debug!("Using deterministic occupancy seed: {}", seed);
                Self::with_seed(seed)
            }
            None => Self::from_entropy(),
        }
    }
}

impl<R: Rng> OccupancySimulator<R> {
    /// Create a simulator around an existing random source
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Overwrite every room's booked flag with an independent Bernoulli trial
    ///
    /// Returns the number of rooms booked afterwards.
    pub fn randomize(
        &mut self,
        hotel: &mut Hotel,
        probability: f64,
    ) -> Result<usize, ConfigValidationError> {
        randomize(hotel, probability, &mut self.rng)
    }

    /// Clear every booked flag
    pub fn reset(&self, hotel: &mut Hotel) {
        reset(hotel);
    }
}

/// Overwrite every room's booked flag, booking each with `probability`
///
/// The probability is checked before any room is touched.
#[instrument(skip(hotel, rng))]
pub fn randomize<R: Rng + ?Sized>(
    hotel: &mut Hotel,
    probability: f64,
    rng: &mut R,
) -> Result<usize, ConfigValidationError> {
    validate_percentage("probability", probability)?;

    for room in hotel.rooms_mut() {
        room.booked = rng.gen_bool(probability);
    }

    let booked = hotel.booked_count();
    info!(booked, total = hotel.total_room_count(), "Randomized occupancy");
    Ok(booked)
}

/// Clear every booked flag; calling it again changes nothing
pub fn reset(hotel: &mut Hotel) {
    hotel.reset();
    info!(total = hotel.total_room_count(), "Reset all bookings");
}
