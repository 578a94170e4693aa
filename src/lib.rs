pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod observability;
pub mod services;
pub mod startup;

use crate::config::ServiceConfig;
use crate::models::UserDirectory;
use std::sync::Arc;
use std::time::Instant;

/// Shared application state.
///
/// Everything in here is read-only after startup: the seeded user directory
/// is constructed once in `Application::build` and never mutated, so request
/// handlers need no locking.
#[derive(Clone)]
pub struct AppState {
    pub config: ServiceConfig,
    pub users: Arc<UserDirectory>,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(config: ServiceConfig, users: UserDirectory) -> Self {
        Self {
            config,
            users: Arc::new(users),
            started_at: Instant::now(),
        }
    }

    /// Seconds since the process (well, this state) came up.
    pub fn uptime_seconds(&self) -> f64 {
        self.started_at.elapsed().as_secs_f64()
    }
}
