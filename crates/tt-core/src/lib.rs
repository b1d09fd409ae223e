//! `tt-core`: foundational types for the `trailtrack` engine.
//!
//! This crate is a dependency of every other `tt-*` crate.  It has no `tt-*`
//! dependencies and performs no I/O: everything here is plain data and pure
//! geometry.
//!
//! # What lives here
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`geo`]     | `Coordinate`, haversine distance, segment projection        |
//! | [`index`]   | `SegmentIndex`: R-tree over a trail's segments              |
//! | [`ids`]     | `TrailId`, `WaypointId`                                     |
//! | [`trail`]   | `Trail`, `Waypoint`, `LocationSample`                       |
//! | [`time`]    | `Stopwatch`: whole-second session clock                     |
//! | [`config`]  | `TrackingConfig`: thresholds and projection model           |
//! | [`error`]   | `CoreError`, `CoreResult`                                   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types, with   |
//! |         | the camelCase field names used by the trail API.           |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod index;
pub mod time;
pub mod trail;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::TrackingConfig;
pub use error::{CoreError, CoreResult};
pub use geo::{distance, distance_to_segment, Coordinate, SegmentProjection, EARTH_RADIUS_M};
pub use ids::{TrailId, WaypointId};
pub use index::SegmentIndex;
pub use time::Stopwatch;
pub use trail::{LocationSample, Trail, Waypoint};
