use std::fmt;

use thiserror::Error;

/// Which location permission a request concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PermissionScope {
    Foreground,
    Background,
}

impl fmt::Display for PermissionScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PermissionScope::Foreground => f.write_str("foreground"),
            PermissionScope::Background => f.write_str("background"),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum LocationError {
    #[error("{0} location permission denied")]
    PermissionDenied(PermissionScope),

    #[error("location unavailable: {0}")]
    Unavailable(String),
}

pub type LocationResult<T> = Result<T, LocationError>;
