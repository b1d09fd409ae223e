//! Recording state machine.

use tt_core::{Coordinate, LocationSample, Stopwatch};

use crate::{RecordError, RecordResult, TrailDraft};

/// Fewest points a finished recording may have.
pub const MIN_TRAIL_POINTS: usize = 2;

/// Accumulates an ordered path and waypoint marks from accepted samples.
///
/// Lifecycle:
///
/// ```text
/// idle ──start──▶ recording ⇄ paused ──finish──▶ TrailDraft
///   ▲                  │          │
///   └─────discard──────┴──────────┘
/// ```
///
/// Rejected operations return an error and leave every field untouched.
#[derive(Debug, Default)]
pub struct TrailRecorder {
    path:      Vec<Coordinate>,
    /// 1-based indices into `path`.
    marks:     Vec<usize>,
    recording: bool,
    stopwatch: Stopwatch,
}

impl TrailRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin accepting samples and start the clock.
    pub fn start(&mut self) {
        self.recording = true;
        self.stopwatch.start();
        log::info!("recording started");
    }

    /// Pause or resume sample acceptance.  The path is kept either way.
    /// Starts the clock if it has never run.
    pub fn toggle_recording(&mut self) {
        if self.recording {
            self.recording = false;
            self.stopwatch.pause();
            log::info!("recording paused at {} with {} points", self.stopwatch, self.path.len());
        } else {
            self.recording = true;
            if self.stopwatch.is_active() {
                self.stopwatch.resume();
            } else {
                self.stopwatch.start();
            }
            log::info!("recording resumed");
        }
    }

    /// Append `sample` if recording.  Returns whether it was kept.
    pub fn record(&mut self, sample: &LocationSample) -> bool {
        if !self.recording {
            return false;
        }
        self.path.push(sample.coordinate);
        log::debug!("recorded point {} at {}", self.path.len(), sample.coordinate);
        true
    }

    /// Mark the latest recorded point as a waypoint.  Returns the waypoint's
    /// sequential number.
    pub fn mark_waypoint(&mut self) -> RecordResult<usize> {
        if !self.recording || self.path.is_empty() {
            log::warn!(
                "waypoint mark rejected (recording: {}, points: {})",
                self.recording,
                self.path.len()
            );
            return Err(RecordError::InvalidWaypointMark {
                recording: self.recording,
                points:    self.path.len(),
            });
        }
        self.marks.push(self.path.len());
        let number = self.marks.len();
        log::info!("waypoint {number} marked at point {}", self.path.len());
        Ok(number)
    }

    /// Drop everything recorded so far and stop.
    pub fn discard(&mut self) {
        log::info!("recording discarded ({} points, {} waypoints)", self.path.len(), self.marks.len());
        self.path.clear();
        self.marks.clear();
        self.recording = false;
        self.stopwatch.reset();
    }

    /// Stop recording and hand the result off as a [`TrailDraft`].
    ///
    /// Fails with [`RecordError::InsufficientPath`] below
    /// [`MIN_TRAIL_POINTS`], in which case nothing changes.
    pub fn finish(&mut self) -> RecordResult<TrailDraft> {
        if self.path.len() < MIN_TRAIL_POINTS {
            log::warn!("finish rejected: only {} points recorded", self.path.len());
            return Err(RecordError::InsufficientPath { points: self.path.len() });
        }
        self.recording = false;
        self.stopwatch.pause();
        let draft = TrailDraft::from_path(&self.path, &self.marks, self.stopwatch.elapsed_secs());
        log::info!(
            "recording finished: {} points, {} waypoints, {:.0} m in {}",
            self.path.len(),
            self.marks.len(),
            draft.distance_m(),
            self.stopwatch,
        );
        Ok(draft)
    }

    /// Count one second while recording.
    #[inline]
    pub fn advance_clock(&mut self) {
        self.stopwatch.advance();
    }

    #[inline]
    pub fn is_recording(&self) -> bool {
        self.recording
    }

    pub fn path(&self) -> &[Coordinate] {
        &self.path
    }

    pub fn waypoint_marks(&self) -> &[usize] {
        &self.marks
    }

    #[inline]
    pub fn elapsed_secs(&self) -> u64 {
        self.stopwatch.elapsed_secs()
    }

    #[inline]
    pub fn stopwatch(&self) -> &Stopwatch {
        &self.stopwatch
    }
}
