//! Unit tests for tt-recorder.

#[cfg(test)]
mod recorder {
    use tt_core::{Coordinate, LocationSample};

    use crate::{RecordError, TrailRecorder};

    fn sample(i: u32) -> LocationSample {
        LocationSample::new(Coordinate::new(-22.76 - f64::from(i) * 0.0001, -43.47), u64::from(i))
    }

    #[test]
    fn idle_recorder_ignores_samples() {
        let mut r = TrailRecorder::new();
        assert!(!r.record(&sample(0)));
        assert!(r.path().is_empty());
    }

    #[test]
    fn accepted_samples_are_kept_verbatim() {
        let mut r = TrailRecorder::new();
        r.start();
        for i in 0..3 {
            assert!(r.record(&sample(i)));
        }
        let expected: Vec<Coordinate> = (0..3).map(|i| sample(i).coordinate).collect();
        assert_eq!(r.path(), expected.as_slice());
    }

    #[test]
    fn toggle_pauses_without_clearing() {
        let mut r = TrailRecorder::new();
        r.start();
        r.record(&sample(0));
        r.advance_clock();

        r.toggle_recording();
        assert!(!r.is_recording());
        assert!(!r.record(&sample(1)));
        r.advance_clock();
        assert_eq!(r.elapsed_secs(), 1);

        r.toggle_recording();
        assert!(r.record(&sample(2)));
        r.advance_clock();
        assert_eq!(r.path().len(), 2);
        assert_eq!(r.elapsed_secs(), 2);
    }

    #[test]
    fn toggle_from_idle_starts_the_clock() {
        let mut r = TrailRecorder::new();
        r.toggle_recording();
        assert!(r.is_recording());
        assert!(r.stopwatch().is_running());
    }

    #[test]
    fn marks_are_one_based_and_numbered() {
        let mut r = TrailRecorder::new();
        r.start();
        r.record(&sample(0));
        r.record(&sample(1));
        assert_eq!(r.mark_waypoint(), Ok(1));
        r.record(&sample(2));
        assert_eq!(r.mark_waypoint(), Ok(2));
        assert_eq!(r.waypoint_marks(), &[2, 3]);
    }

    #[test]
    fn mark_rejected_without_points_or_while_paused() {
        let mut r = TrailRecorder::new();
        r.start();
        assert_eq!(
            r.mark_waypoint(),
            Err(RecordError::InvalidWaypointMark { recording: true, points: 0 })
        );

        r.record(&sample(0));
        r.toggle_recording();
        assert_eq!(
            r.mark_waypoint(),
            Err(RecordError::InvalidWaypointMark { recording: false, points: 1 })
        );
        assert!(r.waypoint_marks().is_empty());
    }

    #[test]
    fn finish_needs_two_points() {
        let mut r = TrailRecorder::new();
        r.start();
        r.record(&sample(0));

        assert_eq!(r.finish(), Err(RecordError::InsufficientPath { points: 1 }));
        assert_eq!(r.path(), &[sample(0).coordinate]);
        assert!(r.is_recording(), "a rejected finish changes nothing");
    }

    #[test]
    fn finish_hands_off_and_freezes_clock() {
        let mut r = TrailRecorder::new();
        r.start();
        r.record(&sample(0));
        r.record(&sample(1));
        r.mark_waypoint().unwrap();
        r.advance_clock();
        r.advance_clock();

        let draft = r.finish().unwrap();
        assert_eq!(draft.path(), r.path());
        assert_eq!(draft.waypoint_orders(), &[2]);
        assert_eq!(draft.duration_secs(), 2);

        assert!(!r.is_recording());
        r.advance_clock();
        assert_eq!(r.elapsed_secs(), 2);
    }

    #[test]
    fn discard_always_resets() {
        let mut r = TrailRecorder::new();
        r.discard();
        assert!(r.path().is_empty());

        r.start();
        r.record(&sample(0));
        r.mark_waypoint().unwrap();
        r.advance_clock();
        r.discard();

        assert!(r.path().is_empty());
        assert!(r.waypoint_marks().is_empty());
        assert!(!r.is_recording());
        assert_eq!(r.elapsed_secs(), 0);
        assert!(!r.stopwatch().is_active());
    }
}

#[cfg(test)]
mod draft {
    use tt_core::Coordinate;

    use crate::TrailDraft;

    fn three_point_draft() -> TrailDraft {
        TrailDraft::from_path(
            &[Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 0.001), Coordinate::new(0.0, 0.002)],
            &[1, 3],
            90,
        )
    }

    #[test]
    fn orders_are_one_based() {
        let orders: Vec<usize> = three_point_draft().coordinates().iter().map(|c| c.order).collect();
        assert_eq!(orders, [1, 2, 3]);
    }

    #[test]
    fn waypoint_coordinates_resolve_marks() {
        let d = three_point_draft();
        assert_eq!(
            d.waypoint_coordinates(),
            vec![(1, Coordinate::new(0.0, 0.0)), (3, Coordinate::new(0.0, 0.002))]
        );
        let names: Vec<String> = d.waypoints(|n| format!("Ponto {n}")).into_iter().map(|w| w.name).collect();
        assert_eq!(names, ["Ponto 1", "Ponto 2"]);
    }

    #[test]
    fn distance_sums_segments() {
        assert!((three_point_draft().distance_m() - 222.39).abs() < 0.1);
    }

    #[test]
    fn undo_drops_point_and_its_mark() {
        let mut d = three_point_draft();
        assert_eq!(d.undo_last_point(), Some(Coordinate::new(0.0, 0.002)));
        assert_eq!(d.coordinates().len(), 2);
        assert_eq!(d.waypoint_orders(), &[1]);

        d.undo_last_point();
        d.undo_last_point();
        assert_eq!(d.undo_last_point(), None);
        assert!(d.waypoint_orders().is_empty());
    }
}

#[cfg(all(test, feature = "serde"))]
mod hand_off_json {
    use tt_core::Coordinate;

    use crate::TrailDraft;

    #[test]
    fn authoring_payload_shape() {
        let d = TrailDraft::from_path(&[Coordinate::new(1.0, 2.0), Coordinate::new(3.0, 4.0)], &[2], 42);
        let v = serde_json::to_value(&d).unwrap();
        assert_eq!(
            v,
            serde_json::json!({
                "coordinates": [
                    {"latitude": 1.0, "longitude": 2.0, "order": 1},
                    {"latitude": 3.0, "longitude": 4.0, "order": 2}
                ],
                "waypointOrders": [2],
                "duration": 42
            })
        );
        let back: TrailDraft = serde_json::from_value(v).unwrap();
        assert_eq!(back, d);
    }
}
