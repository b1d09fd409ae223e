//! The recording hand-off to trail authoring.
//!
//! With the `serde` feature a draft serializes as
//! `{coordinates: [{latitude, longitude, order}], waypointOrders, duration}`,
//! the payload the authoring form consumes.

use tt_core::{Coordinate, Waypoint};

/// A path coordinate tagged with its 1-based position.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OrderedCoordinate {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub coordinate: Coordinate,
    pub order:      usize,
}

/// A finished but unsaved trail.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TrailDraft {
    coordinates:     Vec<OrderedCoordinate>,
    /// 1-based indices into `coordinates`.
    waypoint_orders: Vec<usize>,
    #[cfg_attr(feature = "serde", serde(rename = "duration"))]
    duration_secs:   u64,
}

impl TrailDraft {
    pub fn from_path(path: &[Coordinate], marks: &[usize], duration_secs: u64) -> Self {
        let coordinates = path
            .iter()
            .enumerate()
            .map(|(i, &coordinate)| OrderedCoordinate { coordinate, order: i + 1 })
            .collect();
        Self {
            coordinates,
            waypoint_orders: marks.to_vec(),
            duration_secs,
        }
    }

    pub fn coordinates(&self) -> &[OrderedCoordinate] {
        &self.coordinates
    }

    /// Bare path, in order.
    pub fn path(&self) -> Vec<Coordinate> {
        self.coordinates.iter().map(|c| c.coordinate).collect()
    }

    pub fn waypoint_orders(&self) -> &[usize] {
        &self.waypoint_orders
    }

    #[inline]
    pub fn duration_secs(&self) -> u64 {
        self.duration_secs
    }

    /// Coordinates of the marked waypoints, resolved as `path[order - 1]`.
    /// Marks that no longer resolve are skipped.
    pub fn waypoint_coordinates(&self) -> Vec<(usize, Coordinate)> {
        self.waypoint_orders
            .iter()
            .filter_map(|&order| {
                let c = self.coordinates.get(order.checked_sub(1)?)?;
                Some((order, c.coordinate))
            })
            .collect()
    }

    /// Polyline length in metres.
    pub fn distance_m(&self) -> f64 {
        self.coordinates
            .windows(2)
            .map(|w| w[0].coordinate.distance_m(w[1].coordinate))
            .sum()
    }

    /// Remove the last point together with any waypoint mark on it.
    pub fn undo_last_point(&mut self) -> Option<Coordinate> {
        let last = self.coordinates.pop()?;
        self.waypoint_orders.retain(|&order| order != last.order);
        Some(last.coordinate)
    }

    /// Build waypoints from the marks, named by `name(n)` for the n-th mark.
    pub fn waypoints(&self, name: impl Fn(usize) -> String) -> Vec<Waypoint> {
        self.waypoint_coordinates()
            .into_iter()
            .enumerate()
            .map(|(i, (order, coordinate))| {
                Waypoint::new(format!("draft-{order}"), name(i + 1), coordinate, order as u32)
            })
            .collect()
    }
}
