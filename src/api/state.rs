//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use chrono::NaiveDate;
use std::sync::Arc;
use std::time::Instant;

use crate::config::ServerConfig;
use crate::content::ComicArchive;

/// Source of "today" for archive bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clock {
    /// Local calendar date of the host
    System,
    /// Pinned date, for tests and reproducible demos
    Fixed(NaiveDate),
}

impl Clock {
    pub fn today(&self) -> NaiveDate {
        match self {
            Clock::System => chrono::Local::now().date_naive(),
            Clock::Fixed(date) => *date,
        }
    }
}

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Comic archive bounds and placeholder image settings
    pub archive: Arc<ComicArchive>,
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Where "today" comes from
    pub clock: Clock,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(archive: ComicArchive, config: ServerConfig) -> Self {
        Self {
            archive: Arc::new(archive),
            config: Arc::new(config),
            clock: Clock::System,
            start_time: Instant::now(),
        }
    }

    /// Pin the archive's notion of today
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
