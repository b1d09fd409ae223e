//! The trail-following state machine.

use std::collections::HashSet;

use tt_core::{
    CoreResult, LocationSample, SegmentIndex, Stopwatch, TrackingConfig, Trail, TrailId, WaypointId,
};

use crate::{TrackState, TrackingEvent};

/// End-of-session report returned by [`TrailTracker::stop`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TrackingSummary {
    pub trail_id:          TrailId,
    pub visited_waypoints: usize,
    pub total_waypoints:   usize,
    pub completed:         bool,
    pub elapsed_secs:      u64,
}

/// Tracks one walker along one trail.
///
/// Owns the trail, its segment index, and all per-session progress.  Not
/// shared: a session drives exactly one tracker from exactly one source.
pub struct TrailTracker {
    trail:         Trail,
    config:        TrackingConfig,
    index:         SegmentIndex,
    state:         TrackState,
    paused:        bool,
    /// Latched on leaving the path; cleared on return.  Guards `OffTrack`.
    has_deviated:  bool,
    /// Visit order, for reporting.
    visited:       Vec<WaypointId>,
    visited_set:   HashSet<WaypointId>,
    last_distance: Option<f64>,
    stopwatch:     Stopwatch,
}

impl TrailTracker {
    /// Tracker with the default thresholds.
    pub fn new(trail: Trail) -> Self {
        let index = SegmentIndex::build(&trail.coordinates);
        Self {
            trail,
            config: TrackingConfig::default(),
            index,
            state: TrackState::Inactive,
            paused: false,
            has_deviated: false,
            visited: Vec::new(),
            visited_set: HashSet::new(),
            last_distance: None,
            stopwatch: Stopwatch::new(),
        }
    }

    /// Tracker with per-trail thresholds.  Fails if `config` does not
    /// validate.
    pub fn with_config(trail: Trail, config: TrackingConfig) -> CoreResult<Self> {
        config.validate()?;
        let mut tracker = Self::new(trail);
        tracker.config = config;
        Ok(tracker)
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────────

    /// Begin tracking: `Inactive → OnTrack`.  No-op in any other state.
    pub fn start(&mut self) {
        if self.state != TrackState::Inactive {
            return;
        }
        self.state = TrackState::OnTrack;
        self.paused = false;
        self.stopwatch.start();
        log::info!(
            "tracking {} ({} segments, {} waypoints, {:.0} m)",
            self.trail.id,
            self.index.segment_count(),
            self.trail.waypoints.len(),
            self.trail.length_m(),
        );
    }

    /// Stop evaluating samples.  Progress is kept.
    pub fn pause(&mut self) {
        if self.state.is_tracking() && !self.paused {
            self.paused = true;
            self.stopwatch.pause();
            log::info!("tracking {} paused at {}", self.trail.id, self.stopwatch);
        }
    }

    pub fn resume(&mut self) {
        if self.state.is_tracking() && self.paused {
            self.paused = false;
            self.stopwatch.resume();
            log::info!("tracking {} resumed", self.trail.id);
        }
    }

    pub fn toggle_pause(&mut self) {
        if self.paused {
            self.resume();
        } else {
            self.pause();
        }
    }

    /// Count one second of session time.  Ignored unless actively tracking.
    #[inline]
    pub fn advance_clock(&mut self) {
        self.stopwatch.advance();
    }

    /// End the session and report.
    pub fn stop(mut self) -> TrackingSummary {
        self.stopwatch.pause();
        let summary = self.summary();
        log::info!(
            "tracking {} stopped: {}/{} waypoints, completed={}, {}",
            summary.trail_id,
            summary.visited_waypoints,
            summary.total_waypoints,
            summary.completed,
            self.stopwatch,
        );
        summary
    }

    // ── Evaluation ────────────────────────────────────────────────────────────

    /// Evaluate one sample and return the events it triggers, in order:
    /// track transition, waypoints, completion.
    ///
    /// Returns nothing while inactive, paused, or completed.
    pub fn process(&mut self, sample: &LocationSample) -> Vec<TrackingEvent> {
        let mut events = Vec::new();
        if !self.state.is_tracking() || self.paused {
            return events;
        }

        self.check_track(sample, &mut events);
        self.check_waypoints(sample, &mut events);
        self.check_finish(sample, &mut events);
        events
    }

    fn check_track(&mut self, sample: &LocationSample, events: &mut Vec<TrackingEvent>) {
        if self.index.is_empty() {
            return;
        }
        let p = sample.coordinate;
        let threshold = self.config.on_track_threshold_m;
        let projection = self.config.projection;

        self.last_distance = self.index.min_distance_within(p, threshold, projection);
        let nearby = self.last_distance.filter(|&d| d < threshold);

        match nearby {
            Some(distance_m) => {
                if self.has_deviated {
                    log::info!("{}: back on track ({distance_m:.1} m)", self.trail.id);
                    events.push(TrackingEvent::BackOnTrack { distance_m });
                }
                self.has_deviated = false;
                self.state = TrackState::OnTrack;
            }
            None => {
                self.state = TrackState::OffTrack;
                if !self.has_deviated {
                    self.has_deviated = true;
                    let distance_m = self.index.min_distance(p, projection).unwrap_or(f64::INFINITY);
                    log::info!("{}: off track at {p} ({distance_m:.1} m)", self.trail.id);
                    events.push(TrackingEvent::OffTrack { distance_m });
                }
            }
        }
        log::debug!("{} sample {p}: {} ({:?} m)", self.trail.id, self.state, self.last_distance);
    }

    fn check_waypoints(&mut self, sample: &LocationSample, events: &mut Vec<TrackingEvent>) {
        let p = sample.coordinate;
        for waypoint in &self.trail.waypoints {
            if self.visited_set.contains(&waypoint.id) {
                continue;
            }
            if p.distance_m(waypoint.coordinate) < self.config.waypoint_threshold_m {
                self.visited_set.insert(waypoint.id.clone());
                self.visited.push(waypoint.id.clone());
                log::info!("{}: reached waypoint {:?}", self.trail.id, waypoint.name);
                events.push(TrackingEvent::WaypointReached {
                    id:    waypoint.id.clone(),
                    name:  waypoint.name.clone(),
                    order: waypoint.order,
                });
            }
        }
    }

    fn check_finish(&mut self, sample: &LocationSample, events: &mut Vec<TrackingEvent>) {
        let Some(finish) = self.trail.finish() else {
            return;
        };
        if sample.coordinate.distance_m(finish) < self.config.finish_threshold_m {
            self.state = TrackState::Completed;
            self.stopwatch.pause();
            log::info!("{}: trail completed in {}", self.trail.id, self.stopwatch);
            events.push(TrackingEvent::TrailCompleted {
                elapsed_secs: self.stopwatch.elapsed_secs(),
            });
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    #[inline]
    pub fn state(&self) -> TrackState {
        self.state
    }

    #[inline]
    pub fn is_started(&self) -> bool {
        self.state != TrackState::Inactive
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    #[inline]
    pub fn is_completed(&self) -> bool {
        self.state.is_terminal()
    }

    /// `true` unless the last evaluated sample was off the path.
    #[inline]
    pub fn is_on_track(&self) -> bool {
        self.state != TrackState::OffTrack
    }

    #[inline]
    pub fn has_deviated(&self) -> bool {
        self.has_deviated
    }

    /// Visited waypoint ids in the order they were reached.
    pub fn visited_waypoints(&self) -> &[WaypointId] {
        &self.visited
    }

    pub fn is_visited(&self, id: &WaypointId) -> bool {
        self.visited_set.contains(id)
    }

    /// Fraction of waypoints visited, in `[0, 1]`.  A trail without
    /// waypoints reports `1.0` once completed and `0.0` before.
    pub fn progress(&self) -> f64 {
        match self.trail.waypoints.len() {
            0 if self.is_completed() => 1.0,
            0 => 0.0,
            n => self.visited.len() as f64 / n as f64,
        }
    }

    /// Nearest-segment distance from the last evaluated sample, if a segment
    /// was within the search radius.
    #[inline]
    pub fn last_distance_m(&self) -> Option<f64> {
        self.last_distance
    }

    #[inline]
    pub fn elapsed_secs(&self) -> u64 {
        self.stopwatch.elapsed_secs()
    }

    #[inline]
    pub fn stopwatch(&self) -> &Stopwatch {
        &self.stopwatch
    }

    #[inline]
    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    #[inline]
    pub fn config(&self) -> &TrackingConfig {
        &self.config
    }

    pub fn summary(&self) -> TrackingSummary {
        TrackingSummary {
            trail_id:          self.trail.id.clone(),
            visited_waypoints: self.visited.len(),
            total_waypoints:   self.trail.waypoints.len(),
            completed:         self.is_completed(),
            elapsed_secs:      self.stopwatch.elapsed_secs(),
        }
    }
}
