//! Geographic coordinate type and geodesic utilities.
//!
//! `Coordinate` stores latitude/longitude as `f64`.  Trail thresholds are
//! 10–20 m, and single precision already costs about a metre at the equator,
//! so the engine stays in double precision throughout.

use std::fmt;

use crate::{CoreError, CoreResult};

/// Mean Earth radius, metres.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A WGS-84 geographic coordinate in decimal degrees.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub latitude:  f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Construct without range checks.  Use [`try_new`][Self::try_new] for
    /// untrusted input.
    #[inline]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Construct, rejecting anything outside `[-90, 90] × [-180, 180]`.
    pub fn try_new(latitude: f64, longitude: f64) -> CoreResult<Self> {
        let c = Self::new(latitude, longitude);
        if c.is_valid() {
            Ok(c)
        } else {
            Err(CoreError::InvalidCoordinate { latitude, longitude })
        }
    }

    /// `true` if both components are finite and within range.
    pub fn is_valid(self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Haversine great-circle distance in metres.
    pub fn distance_m(self, other: Coordinate) -> f64 {
        let d_lat = (other.latitude - self.latitude).to_radians();
        let d_lon = (other.longitude - self.longitude).to_radians();

        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        // Rounding can push `a` a hair past 1 for antipodal points.
        let a = a.clamp(0.0, 1.0);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_M * c
    }

    /// Distance in metres from `self` to the segment `[a, b]`, treating
    /// latitude/longitude as a local plane.
    ///
    /// The projection parameter `t` is computed in degree space and clamped
    /// to `[0, 1]`; only the final distance to the projected point is
    /// geodesic.  Valid for trail-scale segments; the error grows with
    /// segment length and latitude (see [`SegmentProjection::CrossTrack`]).
    pub fn distance_to_segment_m(self, a: Coordinate, b: Coordinate) -> f64 {
        let d_lat = b.latitude - a.latitude;
        let d_lon = b.longitude - a.longitude;
        let len2 = d_lat * d_lat + d_lon * d_lon;
        if len2 == 0.0 {
            return self.distance_m(a);
        }

        let t = ((self.latitude - a.latitude) * d_lat + (self.longitude - a.longitude) * d_lon)
            / len2;
        let t = t.clamp(0.0, 1.0);

        let projected = Coordinate::new(a.latitude + t * d_lat, a.longitude + t * d_lon);
        self.distance_m(projected)
    }

    /// Great-circle cross-track distance in metres from `self` to the arc
    /// `[a, b]`, clamped to the endpoints when the foot of the perpendicular
    /// falls outside the arc.
    pub fn cross_track_distance_m(self, a: Coordinate, b: Coordinate) -> f64 {
        let d_ab = a.distance_m(b);
        if d_ab == 0.0 {
            return self.distance_m(a);
        }

        let d_ap = a.distance_m(self);
        let delta_ap = d_ap / EARTH_RADIUS_M;
        let d_theta = a.bearing_rad(self) - a.bearing_rad(b);

        // Foot of the perpendicular lies behind `a`.
        if d_theta.cos() < 0.0 {
            return d_ap;
        }

        let xt = (delta_ap.sin() * d_theta.sin()).clamp(-1.0, 1.0).asin();
        let along = (delta_ap.cos() / xt.cos()).clamp(-1.0, 1.0).acos() * EARTH_RADIUS_M;
        if along > d_ab {
            return self.distance_m(b);
        }
        xt.abs() * EARTH_RADIUS_M
    }

    /// Initial great-circle bearing from `self` to `other`, radians.
    fn bearing_rad(self, other: Coordinate) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let d_lon = (other.longitude - self.longitude).to_radians();

        let y = d_lon.sin() * lat2.cos();
        let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();
        y.atan2(x)
    }

    /// `[lat, lon]` array, the point type of the segment R-tree.
    #[inline]
    pub(crate) fn as_array(self) -> [f64; 2] {
        [self.latitude, self.longitude]
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.latitude, self.longitude)
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

/// Haversine distance in metres between `a` and `b`.
#[inline]
pub fn distance(a: Coordinate, b: Coordinate) -> f64 {
    a.distance_m(b)
}

/// Planar-projection distance in metres from `p` to segment `[a, b]`.
#[inline]
pub fn distance_to_segment(p: Coordinate, a: Coordinate, b: Coordinate) -> f64 {
    p.distance_to_segment_m(a, b)
}

// ── SegmentProjection ─────────────────────────────────────────────────────────

/// How point-to-segment distance is measured.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum SegmentProjection {
    /// Project in degree space, measure the result with haversine.
    #[default]
    Planar,
    /// Great-circle cross-track distance with along-track clamping.
    CrossTrack,
}

impl SegmentProjection {
    /// Distance in metres from `p` to `[a, b]` under this model.
    #[inline]
    pub fn distance_m(self, p: Coordinate, a: Coordinate, b: Coordinate) -> f64 {
        match self {
            SegmentProjection::Planar     => p.distance_to_segment_m(a, b),
            SegmentProjection::CrossTrack => p.cross_track_distance_m(a, b),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SegmentProjection::Planar     => "planar",
            SegmentProjection::CrossTrack => "cross-track",
        }
    }
}

impl fmt::Display for SegmentProjection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
