//! Spatial index over a trail's segments.
//!
//! # Layout
//!
//! Every consecutive coordinate pair becomes an `rstar` line primitive in
//! `[lat, lon]` degree space, tagged with the index of its first vertex.
//! Queries convert a metre radius into a conservative degree radius,
//! collect the segments inside it, and then measure each candidate exactly
//! with the configured [`SegmentProjection`].
//!
//! The degree radius is inflated by [`SEARCH_MARGIN`] and scaled by
//! `1 / cos(latitude)`, so any segment whose geodesic distance is below the
//! requested radius is always among the candidates.  Near the poles the
//! scaling degenerates and queries fall back to the exhaustive scan.

use rstar::primitives::{GeomWithData, Line};
use rstar::RTree;

use crate::{Coordinate, SegmentProjection};

/// Metres per degree of latitude on the mean sphere.
const METRES_PER_DEGREE: f64 = 111_195.0;

/// Safety factor applied to the degree search radius.
const SEARCH_MARGIN: f64 = 2.0;

/// Below this `cos(latitude)` (≈ 89.4°) the index is bypassed.
const MIN_COS_LAT: f64 = 0.01;

type SegmentEntry = GeomWithData<Line<[f64; 2]>, usize>;

/// R-tree of trail segments plus the vertices they were built from.
pub struct SegmentIndex {
    tree:        RTree<SegmentEntry>,
    coordinates: Vec<Coordinate>,
}

impl SegmentIndex {
    /// Bulk-load the segments of `coordinates`.  Fewer than two coordinates
    /// produce an empty index.
    pub fn build(coordinates: &[Coordinate]) -> Self {
        let entries: Vec<SegmentEntry> = coordinates
            .windows(2)
            .enumerate()
            .map(|(i, w)| GeomWithData::new(Line::new(w[0].as_array(), w[1].as_array()), i))
            .collect();

        Self {
            tree:        RTree::bulk_load(entries),
            coordinates: coordinates.to_vec(),
        }
    }

    #[inline]
    pub fn segment_count(&self) -> usize {
        self.tree.size()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }

    /// Exact minimum distance in metres from `p` to any segment, scanning
    /// all of them.  `None` for an empty index.
    pub fn min_distance(&self, p: Coordinate, projection: SegmentProjection) -> Option<f64> {
        self.coordinates
            .windows(2)
            .map(|w| projection.distance_m(p, w[0], w[1]))
            .min_by(f64::total_cmp)
    }

    /// Exact minimum distance from `p` over the segments that could lie
    /// within `radius_m`.
    ///
    /// Returns `None` when no segment is close enough to be a candidate.  A
    /// returned distance may still exceed `radius_m`; callers compare it
    /// against their threshold.
    pub fn min_distance_within(
        &self,
        p:          Coordinate,
        radius_m:   f64,
        projection: SegmentProjection,
    ) -> Option<f64> {
        if self.is_empty() {
            return None;
        }

        let cos_lat = p.latitude.to_radians().cos();
        if cos_lat < MIN_COS_LAT {
            return self.min_distance(p, projection);
        }

        let radius_deg = SEARCH_MARGIN * radius_m / (METRES_PER_DEGREE * cos_lat);
        self.tree
            .locate_within_distance(p.as_array(), radius_deg * radius_deg)
            .map(|entry| {
                let i = entry.data;
                projection.distance_m(p, self.coordinates[i], self.coordinates[i + 1])
            })
            .min_by(f64::total_cmp)
    }
}
