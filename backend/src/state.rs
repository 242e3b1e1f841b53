use crate::{config::Config, db::connection::DbPool, error::AppError};

/// Shared application state handed to every handler. The pool is `None`
/// when the startup connection attempt failed; the process keeps serving
/// and each handler reports the outage instead of crashing.
#[derive(Clone)]
pub struct AppState {
    pool: Option<DbPool>,
    pub config: Config,
}

impl AppState {
    pub fn new(pool: Option<DbPool>, config: Config) -> Self {
        Self { pool, config }
    }

    /// Returns the shared pool, or `ServiceUnavailable` when no pool was
    /// established at startup.
    pub fn pool(&self) -> Result<&DbPool, AppError> {
        self.pool.as_ref().ok_or(AppError::ServiceUnavailable)
    }
}
