//! Shared application state.

use crate::{config::Config, db::DbPool};

/// State shared with every handler via Axum's `State` extractor.
///
/// Cloning is cheap: the pool is internally reference-counted and the
/// config is a handful of small strings.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub pool: DbPool,

    /// Loaded application configuration (base URL, voice provider settings)
    pub config: Config,
}
