//! Unit tests for tt-tracker.

#[cfg(test)]
mod fixtures {
    use tt_core::{Coordinate, LocationSample, Trail, Waypoint};

    /// A 111 m trail along the equator with one waypoint at its midpoint.
    pub fn short_trail() -> Trail {
        Trail::new(
            "equator",
            vec![Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 0.001)],
            vec![Waypoint::new("mid", "Midpoint", Coordinate::new(0.0, 0.0005), 1)],
        )
    }

    pub fn at(lat: f64, lon: f64) -> LocationSample {
        LocationSample::new(Coordinate::new(lat, lon), 0)
    }
}

#[cfg(test)]
mod lifecycle {
    use tt_core::{Trail, TrackingConfig};

    use super::fixtures::{at, short_trail};
    use crate::{TrackState, TrailTracker};

    #[test]
    fn inactive_until_started() {
        let mut t = TrailTracker::new(short_trail());
        assert_eq!(t.state(), TrackState::Inactive);
        assert!(t.process(&at(0.0, 0.001)).is_empty(), "samples before start are ignored");
        assert!(!t.is_completed());

        t.start();
        assert_eq!(t.state(), TrackState::OnTrack);
        assert!(t.is_on_track());
    }

    #[test]
    fn pause_freezes_evaluation() {
        let mut t = TrailTracker::new(short_trail());
        t.start();
        t.pause();
        assert!(t.is_paused());

        // Far off the path and on the waypoint: nothing may happen.
        assert!(t.process(&at(0.01, 0.0)).is_empty());
        assert!(t.process(&at(0.0, 0.0005)).is_empty());
        assert_eq!(t.state(), TrackState::OnTrack);
        assert!(t.visited_waypoints().is_empty());

        t.toggle_pause();
        assert!(!t.is_paused());
        assert_eq!(t.process(&at(0.0, 0.0005)).len(), 1);
    }

    #[test]
    fn clock_runs_only_while_tracking() {
        let mut t = TrailTracker::new(short_trail());
        t.advance_clock();
        assert_eq!(t.elapsed_secs(), 0);

        t.start();
        t.advance_clock();
        t.advance_clock();
        t.pause();
        t.advance_clock();
        assert_eq!(t.elapsed_secs(), 2);

        t.resume();
        t.advance_clock();
        t.process(&at(0.0, 0.001));
        assert!(t.is_completed());
        t.advance_clock();
        assert_eq!(t.elapsed_secs(), 3, "completion freezes the clock");
    }

    #[test]
    fn stop_reports_summary() {
        let mut t = TrailTracker::new(short_trail());
        t.start();
        t.advance_clock();
        t.process(&at(0.0, 0.0005));

        let summary = t.stop();
        assert_eq!(summary.trail_id.as_str(), "equator");
        assert_eq!(summary.visited_waypoints, 1);
        assert_eq!(summary.total_waypoints, 1);
        assert!(!summary.completed);
        assert_eq!(summary.elapsed_secs, 1);
    }

    #[test]
    fn with_config_validates() {
        let bad = TrackingConfig { waypoint_threshold_m: -1.0, ..TrackingConfig::default() };
        assert!(TrailTracker::with_config(short_trail(), bad).is_err());

        let wide = TrackingConfig { on_track_threshold_m: 50.0, ..TrackingConfig::default() };
        let mut t = TrailTracker::with_config(short_trail(), wide).unwrap();
        t.start();
        // ~33 m north: off with the default 10 m, on with 50 m.
        assert!(t.process(&at(0.0003, 0.0002)).is_empty());
        assert!(t.is_on_track());
    }

    #[test]
    fn empty_trail_is_harmless() {
        let mut t = TrailTracker::new(Trail::new("empty", vec![], vec![]));
        t.start();
        assert!(t.process(&at(1.0, 1.0)).is_empty());
        assert_eq!(t.state(), TrackState::OnTrack);
        assert_eq!(t.progress(), 0.0);
    }
}

#[cfg(test)]
mod deviation {
    use super::fixtures::{at, short_trail};
    use crate::{TrackState, TrackingEvent, TrailTracker};

    fn count(events: &[TrackingEvent], pred: fn(&TrackingEvent) -> bool) -> usize {
        events.iter().filter(|e| pred(e)).count()
    }

    #[test]
    fn one_off_track_and_one_recovery() {
        let mut t = TrailTracker::new(short_trail());
        t.start();

        let samples = [
            at(0.0, 0.0001),
            at(0.00002, 0.0002),
            at(0.0003, 0.0003), // ~33 m north
            at(0.0004, 0.0003),
            at(0.0003, 0.0004),
            at(0.00001, 0.0004),
            at(0.0, 0.0003),
        ];
        let mut events = Vec::new();
        let mut states = Vec::new();
        for s in &samples {
            events.extend(t.process(s));
            states.push(t.state());
        }

        assert_eq!(count(&events, |e| matches!(e, TrackingEvent::OffTrack { .. })), 1);
        assert_eq!(count(&events, |e| matches!(e, TrackingEvent::BackOnTrack { .. })), 1);
        assert_eq!(
            states,
            [
                TrackState::OnTrack,
                TrackState::OnTrack,
                TrackState::OffTrack,
                TrackState::OffTrack,
                TrackState::OffTrack,
                TrackState::OnTrack,
                TrackState::OnTrack,
            ]
        );
        assert!(!t.has_deviated());
    }

    #[test]
    fn off_track_reports_distance() {
        let mut t = TrailTracker::new(short_trail());
        t.start();
        let events = t.process(&at(0.0003, 0.0005));
        match events.as_slice() {
            [TrackingEvent::OffTrack { distance_m }] => {
                assert!((distance_m - 33.36).abs() < 0.1, "got {distance_m}");
            }
            other => panic!("unexpected events {other:?}"),
        }
        assert!(t.has_deviated());
        assert!(!t.is_on_track());
        assert_eq!(t.last_distance_m(), None, "beyond the search radius");
    }

    #[test]
    fn just_past_threshold_is_off_track() {
        let mut t = TrailTracker::new(short_trail());
        t.start();
        // 10 m north of the segment plus ~0.1 mm.
        let lat = (10.0 / tt_core::EARTH_RADIUS_M).to_degrees() + 1e-9;
        assert_eq!(t.process(&at(lat, 0.0002)).len(), 1);
        assert_eq!(t.state(), TrackState::OffTrack);
    }

    #[test]
    fn repeated_deviations_each_notify() {
        let mut t = TrailTracker::new(short_trail());
        t.start();
        let off = at(0.001, 0.0005);
        let on = at(0.0, 0.0002);

        let mut offs = 0;
        for _ in 0..3 {
            offs += count(&t.process(&off), |e| matches!(e, TrackingEvent::OffTrack { .. }));
            t.process(&on);
        }
        assert_eq!(offs, 3);
    }
}

#[cfg(test)]
mod waypoints {
    use tt_core::{Coordinate, Trail, Waypoint};

    use super::fixtures::{at, short_trail};
    use crate::{TrackingEvent, TrailTracker};

    #[test]
    fn visited_exactly_once() {
        let mut t = TrailTracker::new(short_trail());
        t.start();

        let mut reached = 0;
        for lon in [0.0004, 0.00045, 0.0005, 0.00055] {
            for e in t.process(&at(0.0, lon)) {
                if let TrackingEvent::WaypointReached { id, name, order } = e {
                    assert_eq!(id.as_str(), "mid");
                    assert_eq!(name, "Midpoint");
                    assert_eq!(order, 1);
                    reached += 1;
                }
            }
        }
        assert_eq!(reached, 1);
        assert_eq!(t.visited_waypoints().len(), 1);
        assert_eq!(t.progress(), 1.0);
    }

    #[test]
    fn reached_while_off_track() {
        let trail = Trail::new(
            "t",
            vec![Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 0.001)],
            vec![Waypoint::new("view", "Viewpoint", Coordinate::new(0.0003, 0.0005), 1)],
        );
        let mut t = TrailTracker::new(trail);
        t.start();
        let events = t.process(&at(0.0003, 0.0005));
        assert!(matches!(events[0], TrackingEvent::OffTrack { .. }));
        assert!(matches!(events[1], TrackingEvent::WaypointReached { .. }));
    }

    #[test]
    fn several_in_one_sample() {
        let c = Coordinate::new(0.0, 0.0005);
        let trail = Trail::new(
            "t",
            vec![Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 0.001)],
            vec![Waypoint::new("a", "A", c, 1), Waypoint::new("b", "B", c, 2)],
        );
        let mut t = TrailTracker::new(trail);
        t.start();
        assert_eq!(t.process(&at(0.0, 0.0005)).len(), 2);
        assert_eq!(t.visited_waypoints().iter().map(|id| id.as_str()).collect::<Vec<_>>(), ["a", "b"]);
    }

    #[test]
    fn single_coordinate_trail_still_checks_waypoints() {
        let c = Coordinate::new(0.0, 0.0);
        let trail = Trail::new("dot", vec![Coordinate::new(0.0, 0.01)], vec![Waypoint::new("w", "W", c, 1)]);
        let mut t = TrailTracker::new(trail);
        t.start();
        let events = t.process(&at(0.0, 0.0));
        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], TrackingEvent::WaypointReached { .. }));
        assert_eq!(t.last_distance_m(), None);
    }
}

#[cfg(test)]
mod completion {
    use super::fixtures::{at, short_trail};
    use crate::{TrackState, TrackingEvent, TrailTracker};

    #[test]
    fn completes_exactly_once() {
        let mut t = TrailTracker::new(short_trail());
        t.start();
        for _ in 0..5 {
            t.advance_clock();
        }

        let events = t.process(&at(0.0, 0.00095));
        assert_eq!(events, vec![TrackingEvent::TrailCompleted { elapsed_secs: 5 }]);
        assert_eq!(t.state(), TrackState::Completed);

        assert!(t.process(&at(0.0, 0.001)).is_empty());
        assert!(t.process(&at(0.0, 0.0005)).is_empty(), "completed tracker ignores waypoints");
        t.start();
        assert_eq!(t.state(), TrackState::Completed, "start cannot leave a terminal state");
    }

    #[test]
    fn single_coordinate_trail_completes() {
        let trail = tt_core::Trail::new("dot", vec![tt_core::Coordinate::new(0.0, 0.0)], vec![]);
        let mut t = TrailTracker::new(trail);
        t.start();
        assert_eq!(t.progress(), 0.0);
        assert_eq!(t.process(&at(0.0001, 0.0)).len(), 1);
        assert!(t.is_completed());
        assert_eq!(t.progress(), 1.0);
    }

    #[test]
    fn waypoint_and_finish_in_same_sample() {
        let trail = tt_core::Trail::new(
            "t",
            vec![tt_core::Coordinate::new(0.0, 0.0), tt_core::Coordinate::new(0.0, 0.001)],
            vec![tt_core::Waypoint::new("end", "End", tt_core::Coordinate::new(0.0, 0.001), 1)],
        );
        let mut t = TrailTracker::new(trail);
        t.start();
        let events = t.process(&at(0.0, 0.001));
        assert!(matches!(events[0], TrackingEvent::WaypointReached { .. }));
        assert!(matches!(events[1], TrackingEvent::TrailCompleted { .. }));
        assert!(t.stop().completed);
    }
}

#[cfg(test)]
mod index_agreement {
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};
    use tt_core::{Coordinate, LocationSample, SegmentProjection, TrackingConfig, Trail};

    use crate::{TrackState, TrailTracker};

    #[test]
    fn state_matches_exhaustive_scan() {
        let mut rng = SmallRng::seed_from_u64(99);
        let mut c = Coordinate::new(-22.76, -43.47);
        let mut path = vec![c];
        for _ in 0..300 {
            c = Coordinate::new(
                c.latitude + rng.gen_range(-0.0002..0.0002),
                c.longitude + rng.gen_range(-0.0002..0.0002),
            );
            path.push(c);
        }
        // Finish 5.5 km due south so completion never interferes.
        path.push(Coordinate::new(c.latitude - 0.05, c.longitude));

        for projection in [SegmentProjection::Planar, SegmentProjection::CrossTrack] {
            let config = TrackingConfig { projection, ..TrackingConfig::default() };
            let mut t = TrailTracker::with_config(Trail::new("rand", path.clone(), vec![]), config).unwrap();
            t.start();

            for _ in 0..1_000 {
                let anchor = path[rng.gen_range(0..path.len() - 1)];
                let p = Coordinate::new(
                    anchor.latitude + rng.gen_range(-0.0003..0.0003),
                    anchor.longitude + rng.gen_range(-0.0003..0.0003),
                );
                t.process(&LocationSample::new(p, 0));

                let exact = path
                    .windows(2)
                    .map(|w| projection.distance_m(p, w[0], w[1]))
                    .fold(f64::INFINITY, f64::min);
                let expected = if exact < 10.0 { TrackState::OnTrack } else { TrackState::OffTrack };
                assert_eq!(t.state(), expected, "{projection} at {p}: exact {exact}");
            }
        }
    }
}
