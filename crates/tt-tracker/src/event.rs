use tt_core::WaypointId;

/// A notification produced by [`TrailTracker::process`][crate::TrailTracker::process].
///
/// Events are edge-triggered: each one marks a transition, never a level.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")
)]
pub enum TrackingEvent {
    /// The walker left the path.  `distance_m` is the distance to the
    /// nearest segment at the moment of leaving.
    OffTrack { distance_m: f64 },
    /// The walker returned to the path after an `OffTrack`.
    BackOnTrack { distance_m: f64 },
    WaypointReached { id: WaypointId, name: String, order: u32 },
    /// The trail's finish point was reached.  Emitted once per session.
    TrailCompleted { elapsed_secs: u64 },
}
