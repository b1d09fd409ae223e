use tt_core::Coordinate;

/// Notifications from a recording session.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")
)]
pub enum RecordingEvent {
    Started,
    Paused,
    Resumed,
    /// A sample was appended; `points` is the new path length.
    PointRecorded { coordinate: Coordinate, points: usize },
    /// `number` counts waypoints (1, 2, 3…); `order` is the marked path index.
    WaypointMarked { number: usize, order: usize },
    Discarded,
    Finished { points: usize, waypoints: usize, elapsed_secs: u64 },
}
