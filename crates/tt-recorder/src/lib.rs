//! `tt-recorder`: turn a live position stream into a new trail.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                     |
//! |--------------|--------------------------------------------------------------|
//! | [`recorder`] | `TrailRecorder`: record / pause / mark / discard / finish    |
//! | [`draft`]    | `TrailDraft`: the finished recording handed to authoring     |
//! | [`event`]    | `RecordingEvent`: what a recording session reports           |
//! | [`error`]    | `RecordError`, `RecordResult<T>`                             |
//!
//! Waypoint marks are 1-based indices into the recorded path: a mark of `n`
//! points at the `n`-th recorded coordinate, which is also that coordinate's
//! `order` in the draft.

pub mod draft;
pub mod error;
pub mod event;
pub mod recorder;

#[cfg(test)]
mod tests;

pub use draft::{OrderedCoordinate, TrailDraft};
pub use error::{RecordError, RecordResult};
pub use event::RecordingEvent;
pub use recorder::{TrailRecorder, MIN_TRAIL_POINTS};
