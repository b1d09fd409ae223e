//! `tt-tracker`: follow a predefined trail sample by sample.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                       |
//! |-------------|----------------------------------------------------------------|
//! | [`state`]   | `TrackState`: inactive / on-track / off-track / completed      |
//! | [`event`]   | `TrackingEvent`: edge-triggered notifications                  |
//! | [`tracker`] | `TrailTracker`, `TrackingSummary`                              |
//!
//! # Evaluation model
//!
//! The tracker is a plain state machine with no clock and no I/O.  Each call
//! to [`TrailTracker::process`] evaluates one sample in three steps:
//!
//! 1. **Track check**: nearest-segment distance against the on-track
//!    threshold, via the trail's [`SegmentIndex`][tt_core::SegmentIndex].
//!    Leaving the path emits `OffTrack` once; coming back emits
//!    `BackOnTrack` once.
//! 2. **Waypoints**: every unvisited waypoint inside its radius is marked
//!    visited and reported, at most once per session.
//! 3. **Finish**: a sample near the last coordinate completes the trail.
//!    `Completed` is terminal.
//!
//! Elapsed time is advanced by the owner through
//! [`TrailTracker::advance_clock`], once per second.

pub mod event;
pub mod state;
pub mod tracker;

#[cfg(test)]
mod tests;

pub use event::TrackingEvent;
pub use state::TrackState;
pub use tracker::{TrackingSummary, TrailTracker};
