//! Core error type.
//!
//! Sub-crates define their own error enums (`LocationError`, `RecordError`,
//! …) and `tt-session` wraps them all.  `CoreError` only covers invalid input
//! data and configuration; geometric degeneracies are never errors.

use thiserror::Error;

use crate::TrailId;

/// Errors produced while validating coordinates, trails, or configuration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoreError {
    #[error("coordinate ({latitude}, {longitude}) is outside the valid latitude/longitude range")]
    InvalidCoordinate { latitude: f64, longitude: f64 },

    #[error("trail {0} has no coordinates")]
    EmptyTrail(TrailId),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `tt-core`.
pub type CoreResult<T> = Result<T, CoreError>;
