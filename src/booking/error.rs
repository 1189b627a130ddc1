//! Error types and handling
//!
//! This module contains the error types surfaced by the booking engine and the
//! session registry.

use crate::types::{ConfigValidationError, SessionId};
use thiserror::Error;

/// Errors that can occur while booking rooms
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    /// Requested room count is outside `1..=max`
    #[error("Invalid booking request: {requested} rooms requested, allowed range is 1 to {max}")]
    InvalidRequest {
        /// Number of rooms asked for
        requested: usize,
        /// Largest request the engine accepts
        max: usize,
    },

    /// Neither a single floor nor the whole hotel has enough free rooms
    #[error("Not enough rooms available: {requested} requested, {available} available")]
    InsufficientAvailability {
        /// Number of rooms asked for
        requested: usize,
        /// Unbooked rooms in the hotel at the time of the request
        available: usize,
    },

    /// A planned room is missing from the hotel or was booked since planning
    #[error("Room {room} is no longer available")]
    RoomUnavailable {
        /// Number of the room that could not be booked
        room: u32,
    },
}

impl BookingError {
    /// Create an invalid request error
    pub fn invalid_request(requested: usize, max: usize) -> Self {
        Self::InvalidRequest { requested, max }
    }

    /// Create an insufficient availability error
    pub fn insufficient_availability(requested: usize, available: usize) -> Self {
        Self::InsufficientAvailability { requested, available }
    }

    /// Create a room unavailable error
    pub fn room_unavailable(room: u32) -> Self {
        Self::RoomUnavailable { room }
    }

    /// Check if the same request could succeed after the hotel state changes
    ///
    /// Allocation is deterministic, so retrying without a state change returns the
    /// same error.
    pub fn is_recoverable(&self) -> bool {
        match self {
            BookingError::InvalidRequest { .. } => false,
            BookingError::InsufficientAvailability { .. } => true,
            BookingError::RoomUnavailable { .. } => true,
        }
    }

    /// Get the error category
    pub fn category(&self) -> &'static str {
        match self {
            BookingError::InvalidRequest { .. } => "Invalid Request",
            BookingError::InsufficientAvailability { .. } => "Insufficient Availability",
            BookingError::RoomUnavailable { .. } => "Room Unavailable",
        }
    }
}

/// Result type for booking operations
pub type BookingResult<T> = Result<T, BookingError>;

/// Errors raised by the session registry
#[derive(Debug, Error)]
pub enum SessionError {
    /// No session is registered under the id
    #[error("Session not found: {0}")]
    SessionNotFound(SessionId),

    /// A thread panicked while holding a session or registry lock
    #[error("Session lock poisoned: {0}")]
    LockPoisoned(String),

    /// The booking itself failed
    #[error(transparent)]
    Booking(#[from] BookingError),

    /// The session configuration or an operation parameter was invalid
    #[error(transparent)]
    Configuration(#[from] ConfigValidationError),
}

/// Result type for session operations
pub type SessionResult<T> = Result<T, SessionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let error = BookingError::invalid_request(6, 5);
        assert_eq!(
            error.to_string(),
            "Invalid booking request: 6 rooms requested, allowed range is 1 to 5"
        );

        let error = BookingError::insufficient_availability(4, 2);
        assert_eq!(error.to_string(), "Not enough rooms available: 4 requested, 2 available");
    }

    #[test]
    fn test_error_classification() {
        let invalid = BookingError::invalid_request(0, 5);
        assert!(!invalid.is_recoverable());
        assert_eq!(invalid.category(), "Invalid Request");

        let insufficient = BookingError::insufficient_availability(5, 0);
        assert!(insufficient.is_recoverable());
        assert_eq!(insufficient.category(), "Insufficient Availability");

        let stale = BookingError::room_unavailable(305);
        assert!(stale.is_recoverable());
        assert_eq!(stale.category(), "Room Unavailable");
        assert_eq!(stale.to_string(), "Room 305 is no longer available");
    }

    #[test]
    fn test_session_error_wraps_booking_error() {
        let error: SessionError = BookingError::invalid_request(9, 5).into();
        assert!(matches!(error, SessionError::Booking(BookingError::InvalidRequest { .. })));
        assert!(error.to_string().contains("9 rooms requested"));
    }
}
