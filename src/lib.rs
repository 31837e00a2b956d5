//! # Readyz
//!
//! A readiness probe service backed by PostgreSQL.
//!
//! ## Overview
//!
//! Readyz answers exactly one question for orchestration and load-balancing
//! infrastructure: "can this instance reach its required database right now?"
//! It exposes a single `GET /readyz` endpoint that issues one bounded
//! round-trip against the shared connection pool and maps the outcome to a
//! stable contract:
//!
//! - round-trip succeeds: `200` with body `{"status":"ok"}`
//! - round-trip fails for any reason: `503` with body `{"status":"error"}`
//!
//! Failure causes are deliberately collapsed: a timeout, an authentication
//! failure, and a network partition all produce the same `503`. The probe's
//! only consumer-facing signal is binary routability; causes are logged for
//! operators and then discarded.
//!
//! ## Module Organization
//!
//! - [`web`] - HTTP surface: router, shared state, and the probe handler
//! - [`database`] - Connection pool construction
//! - [`config`] - Configuration management
//! - [`error`] - Structured error handling
//! - [`logging`] - Environment-aware structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use readyz::config::ReadyzConfig;
//! use readyz::web::{self, state::AppState};
//!
//! # async fn example() -> readyz::Result<()> {
//! let config = ReadyzConfig::load("config/readyz.toml")?;
//! let state = AppState::from_config(config)?;
//! web::serve(state).await
//! # }
//! ```

pub mod config;
pub mod database;
pub mod error;
pub mod logging;
pub mod web;

pub use error::{ReadyzError, Result};
