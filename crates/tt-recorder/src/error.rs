use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("a trail needs at least 2 recorded points, have {points}")]
    InsufficientPath { points: usize },

    #[error("cannot mark a waypoint (recording: {recording}, points: {points})")]
    InvalidWaypointMark { recording: bool, points: usize },
}

pub type RecordResult<T> = Result<T, RecordError>;
