use thiserror::Error;
use tt_core::CoreError;
use tt_location::LocationError;
use tt_recorder::RecordError;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SessionError {
    #[error("location error: {0}")]
    Location(#[from] LocationError),

    #[error("recording error: {0}")]
    Record(#[from] RecordError),

    #[error("configuration error: {0}")]
    Core(#[from] CoreError),

    #[error("session has ended")]
    Closed,
}

pub type SessionResult<T> = Result<T, SessionError>;
