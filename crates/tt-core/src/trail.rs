//! Trail definitions and position samples.
//!
//! Trails are owned by the external trail store and are read-only here.  The
//! shapes mirror the trail API's JSON so that, with the `serde` feature,
//! responses deserialize straight into these types.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::{Coordinate, CoreError, CoreResult, TrailId, WaypointId};

// ── Waypoint ──────────────────────────────────────────────────────────────────

/// A named point of interest positioned along a trail.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Waypoint {
    pub id:          WaypointId,
    pub name:        String,
    pub description: String,
    pub coordinate:  Coordinate,
    /// Position of the waypoint in the trail's ordering (1-based).
    pub order:       u32,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub image_url:   Option<String>,
}

impl Waypoint {
    pub fn new(
        id:         impl Into<WaypointId>,
        name:       impl Into<String>,
        coordinate: Coordinate,
        order:      u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            coordinate,
            order,
            image_url: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

// ── Trail ─────────────────────────────────────────────────────────────────────

/// A predefined path plus its points of interest.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Trail {
    pub id:          TrailId,
    /// Ordered path vertices.  The last one is the finish point.
    pub coordinates: Vec<Coordinate>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub waypoints:   Vec<Waypoint>,
}

impl Trail {
    pub fn new(id: impl Into<TrailId>, coordinates: Vec<Coordinate>, waypoints: Vec<Waypoint>) -> Self {
        Self { id: id.into(), coordinates, waypoints }
    }

    /// First coordinate, if any.
    #[inline]
    pub fn start(&self) -> Option<Coordinate> {
        self.coordinates.first().copied()
    }

    /// Last coordinate, if any.  Reaching it completes the trail.
    #[inline]
    pub fn finish(&self) -> Option<Coordinate> {
        self.coordinates.last().copied()
    }

    /// Number of consecutive coordinate pairs.
    #[inline]
    pub fn segment_count(&self) -> usize {
        self.coordinates.len().saturating_sub(1)
    }

    /// Polyline length in metres.
    pub fn length_m(&self) -> f64 {
        self.coordinates
            .windows(2)
            .map(|w| w[0].distance_m(w[1]))
            .sum()
    }

    /// Waypoints sorted by their `order` field.
    pub fn waypoints_in_order(&self) -> Vec<&Waypoint> {
        let mut sorted: Vec<&Waypoint> = self.waypoints.iter().collect();
        sorted.sort_by_key(|w| w.order);
        sorted
    }

    /// Check that the trail has at least one coordinate and that every
    /// coordinate (path and waypoint) is in range.
    pub fn validate(&self) -> CoreResult<()> {
        if self.coordinates.is_empty() {
            return Err(CoreError::EmptyTrail(self.id.clone()));
        }
        let all = self
            .coordinates
            .iter()
            .chain(self.waypoints.iter().map(|w| &w.coordinate));
        for c in all {
            if !c.is_valid() {
                return Err(CoreError::InvalidCoordinate {
                    latitude:  c.latitude,
                    longitude: c.longitude,
                });
            }
        }
        Ok(())
    }
}

// ── LocationSample ────────────────────────────────────────────────────────────

/// One position fix emitted by a location source.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocationSample {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub coordinate:   Coordinate,
    /// Unix timestamp in milliseconds.
    #[cfg_attr(feature = "serde", serde(rename = "timestamp"))]
    pub timestamp_ms: u64,
}

impl LocationSample {
    #[inline]
    pub fn new(coordinate: Coordinate, timestamp_ms: u64) -> Self {
        Self { coordinate, timestamp_ms }
    }

    /// Sample stamped with the current wall-clock time.
    pub fn now(coordinate: Coordinate) -> Self {
        Self::new(coordinate, unix_millis())
    }
}

/// Milliseconds since the Unix epoch, or 0 if the system clock is earlier.
pub fn unix_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
