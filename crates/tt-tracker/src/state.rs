//! Tracker states.

use std::fmt;

/// Where a follow session stands relative to its trail.
///
/// ```text
/// Inactive ──start──▶ OnTrack ⇄ OffTrack
///                        │         │
///                        └────┬────┘
///                             ▼
///                         Completed
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum TrackState {
    #[default]
    Inactive,
    OnTrack,
    OffTrack,
    Completed,
}

impl TrackState {
    /// `true` while samples are being evaluated (pausing aside).
    #[inline]
    pub fn is_tracking(self) -> bool {
        matches!(self, TrackState::OnTrack | TrackState::OffTrack)
    }

    #[inline]
    pub fn is_terminal(self) -> bool {
        self == TrackState::Completed
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TrackState::Inactive  => "inactive",
            TrackState::OnTrack   => "on-track",
            TrackState::OffTrack  => "off-track",
            TrackState::Completed => "completed",
        }
    }
}

impl fmt::Display for TrackState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
