//! Isolated booking sessions
//!
//! Each session owns one hotel and one engine. The registry hands out sessions
//! by id and serializes all work on a given session behind that session's own
//! lock, so two sessions never contend and one session never interleaves.

use crate::allocation::Allocation;
use crate::booking::occupancy;
use crate::booking::{BookingEngine, BookingResult, BookingStatistics, SessionError, SessionResult};
use crate::inventory::{generate, Hotel, HotelSnapshot, Room};
use crate::types::{ConfigValidationError, HotelConfig, SessionId};
use chrono::{DateTime, Utc};
use rand::Rng;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{info, instrument};

/// One caller's hotel together with the engine that books it
#[derive(Debug)]
pub struct Session {
    id: SessionId,
    hotel: Hotel,
    engine: BookingEngine,
    occupancy_probability: f64,
    created_at: DateTime<Utc>,
    last_accessed: DateTime<Utc>,
}

impl Session {
    /// Create a session with a freshly generated, fully unbooked hotel
    pub fn new(config: &HotelConfig) -> Result<Self, ConfigValidationError> {
        let hotel = generate(config)?;
        let now = Utc::now();
        Ok(Self {
            id: SessionId::new(),
            hotel,
            engine: BookingEngine::from_config(config),
            occupancy_probability: config.occupancy_probability,
            created_at: now,
            last_accessed: now,
        })
    }

    /// Get the session id
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Get the session's hotel
    pub fn hotel(&self) -> &Hotel {
        &self.hotel
    }

    /// Get the booking counters for this session
    pub fn statistics(&self) -> &BookingStatistics {
        self.engine.statistics()
    }

    /// When the session was created
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// When the session was last operated on
    pub fn last_accessed(&self) -> DateTime<Utc> {
        self.last_accessed
    }

    fn touch(&mut self) {
        self.last_accessed = Utc::now();
    }

    /// Book `count` rooms in this session's hotel
    pub fn allocate(&mut self, count: usize) -> BookingResult<Allocation> {
        self.touch();
        self.engine.allocate(&mut self.hotel, count)
    }

    /// Book `count` rooms and return them
    pub fn book(&mut self, count: usize) -> BookingResult<Vec<Room>> {
        self.allocate(count).map(|allocation| allocation.rooms)
    }

    /// Clear every booking in this session's hotel
    pub fn reset(&mut self) {
        self.touch();
        occupancy::reset(&mut self.hotel);
    }

    /// Randomize occupancy; `None` uses the session's configured probability
    pub fn randomize<R: Rng + ?Sized>(
        &mut self,
        probability: Option<f64>,
        rng: &mut R,
    ) -> Result<usize, ConfigValidationError> {
        self.touch();
        let probability = probability.unwrap_or(self.occupancy_probability);
        occupancy::randomize(&mut self.hotel, probability, rng)
    }

    /// Take a read-only view of this session's hotel
    pub fn snapshot(&self) -> HotelSnapshot {
        self.hotel.snapshot()
    }
}

type SharedSession = Arc<Mutex<Session>>;

/// Registry of isolated sessions, safe to share across threads
#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: Mutex<HashMap<SessionId, SharedSession>>,
}

impl SessionRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    fn sessions(&self) -> SessionResult<MutexGuard<'_, HashMap<SessionId, SharedSession>>> {
        self.sessions.lock().map_err(|e| SessionError::LockPoisoned(e.to_string()))
    }

    fn get(&self, id: SessionId) -> SessionResult<SharedSession> {
        self.sessions()?.get(&id).cloned().ok_or(SessionError::SessionNotFound(id))
    }

    /// Create a session for the given layout and return its id
    #[instrument(skip(self, config))]
    pub fn create_session(&self, config: &HotelConfig) -> SessionResult<SessionId> {
        let session = Session::new(config)?;
        let id = session.id();
        self.sessions()?.insert(id, Arc::new(Mutex::new(session)));
        info!(session = %id, "Session created");
        Ok(id)
    }

    /// Remove a session and drop its hotel
    pub fn close_session(&self, id: SessionId) -> SessionResult<()> {
        self.sessions()?.remove(&id).ok_or(SessionError::SessionNotFound(id))?;
        info!(session = %id, "Session closed");
        Ok(())
    }

    /// Get the number of open sessions
    pub fn session_count(&self) -> SessionResult<usize> {
        Ok(self.sessions()?.len())
    }

    /// Get the ids of all open sessions
    pub fn session_ids(&self) -> SessionResult<Vec<SessionId>> {
        Ok(self.sessions()?.keys().copied().collect())
    }

    /// Run `operation` with exclusive access to one session
    ///
    /// The registry lock is released before the session lock is taken, so work on
    /// one session never blocks another.
    pub fn with_session<T>(
        &self,
        id: SessionId,
        operation: impl FnOnce(&mut Session) -> T,
    ) -> SessionResult<T> {
        let shared = self.get(id)?;
        let mut session = shared.lock().map_err(|e| SessionError::LockPoisoned(e.to_string()))?;
        Ok(operation(&mut *session))
    }

    /// Book rooms in a session and report how they were chosen
    pub fn allocate(&self, id: SessionId, count: usize) -> SessionResult<Allocation> {
        Ok(self.with_session(id, |session| session.allocate(count))??)
    }

    /// Book rooms in a session
    pub fn book(&self, id: SessionId, count: usize) -> SessionResult<Vec<Room>> {
        Ok(self.with_session(id, |session| session.book(count))??)
    }

    /// Clear every booking in a session
    pub fn reset(&self, id: SessionId) -> SessionResult<()> {
        self.with_session(id, Session::reset)
    }

    /// Randomize a session's occupancy
    pub fn randomize<R: Rng + ?Sized>(
        &self,
        id: SessionId,
        probability: Option<f64>,
        rng: &mut R,
    ) -> SessionResult<usize> {
        Ok(self.with_session(id, |session| session.randomize(probability, rng))??)
    }

    /// Take a read-only view of a session's hotel
    pub fn snapshot(&self, id: SessionId) -> SessionResult<HotelSnapshot> {
        self.with_session(id, |session| session.snapshot())
    }

    /// Get a copy of a session's booking counters
    pub fn statistics(&self, id: SessionId) -> SessionResult<BookingStatistics> {
        self.with_session(id, |session| session.statistics().clone())
    }
}
