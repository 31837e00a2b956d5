//! # Application State
//!
//! Shared state for the HTTP surface: configuration plus the database
//! connection pool. The pool is shared across all probe invocations; this
//! component only uses it, bootstrap owns its lifecycle.

use std::sync::Arc;

use sqlx::PgPool;
use tracing::debug;

use crate::config::ReadyzConfig;
use crate::database;
use crate::error::Result;

/// Shared application state, cloned per request handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ReadyzConfig>,
    pub db_pool: PgPool,
}

impl AppState {
    /// Create application state, building the connection pool from
    /// configuration.
    pub fn from_config(config: ReadyzConfig) -> Result<Self> {
        debug!(
            max_connections = config.database.max_connections,
            probe_timeout_ms = config.probe.timeout_ms,
            "Creating application state"
        );

        let db_pool = database::connect_lazy(&config.database)?;

        Ok(Self {
            config: Arc::new(config),
            db_pool,
        })
    }
}
