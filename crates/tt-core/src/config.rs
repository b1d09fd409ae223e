//! Tracking thresholds.
//!
//! Typically left at [`TrackingConfig::default`]; applications with wider
//! tolerance needs (cycling or horse trails, poor GPS coverage) load an
//! override from JSON and pass it to the tracker per trail.

use crate::{CoreError, CoreResult, SegmentProjection};

/// Default on/off-track tolerance, metres.
pub const ON_TRACK_THRESHOLD_M: f64 = 10.0;

/// Default waypoint arrival radius, metres.
pub const WAYPOINT_THRESHOLD_M: f64 = 20.0;

/// Default finish radius around the trail's last coordinate, metres.
pub const FINISH_THRESHOLD_M: f64 = 20.0;

/// Distance thresholds and geometry model used by the trail tracker.
///
/// All comparisons are strict: a sample exactly `on_track_threshold_m` away
/// from the path is off-track.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct TrackingConfig {
    pub on_track_threshold_m: f64,
    pub waypoint_threshold_m: f64,
    pub finish_threshold_m:   f64,
    pub projection:           SegmentProjection,
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self {
            on_track_threshold_m: ON_TRACK_THRESHOLD_M,
            waypoint_threshold_m: WAYPOINT_THRESHOLD_M,
            finish_threshold_m:   FINISH_THRESHOLD_M,
            projection:           SegmentProjection::Planar,
        }
    }
}

impl TrackingConfig {
    /// Reject non-finite or non-positive thresholds.
    pub fn validate(&self) -> CoreResult<()> {
        let checks = [
            ("on_track_threshold_m", self.on_track_threshold_m),
            ("waypoint_threshold_m", self.waypoint_threshold_m),
            ("finish_threshold_m",   self.finish_threshold_m),
        ];
        for (name, value) in checks {
            if !value.is_finite() || value <= 0.0 {
                return Err(CoreError::Config(format!(
                    "{name} must be a positive number of metres, got {value}"
                )));
            }
        }
        Ok(())
    }
}
