//! # Web API Request Handlers
//!
//! Contains all HTTP request handlers. The readiness probe is the only
//! endpoint this service exposes.

pub mod health;
