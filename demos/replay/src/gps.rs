//! A simulated device that walks a route with GPS noise.

use std::time::Duration;

use async_trait::async_trait;
use futures::stream::{self, BoxStream, StreamExt};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tt_core::{Coordinate, LocationSample};
use tt_location::{DeviceLocation, LocationError, LocationResult, PermissionStatus, WatchOptions};

const METRES_PER_DEGREE: f64 = 111_195.0;

pub struct SimulatedGps {
    route:      Vec<Coordinate>,
    seed:       u64,
    jitter_m:   f64,
    step_m:     f64,
    background: PermissionStatus,
}

impl SimulatedGps {
    pub fn new(route: Vec<Coordinate>, seed: u64) -> Self {
        Self {
            route,
            seed,
            jitter_m:   0.0,
            step_m:     15.0,
            background: PermissionStatus::Granted,
        }
    }

    /// Uniform noise of up to `metres` on each axis.
    pub fn with_jitter_m(mut self, metres: f64) -> Self {
        self.jitter_m = metres;
        self
    }

    pub fn deny_background(mut self) -> Self {
        self.background = PermissionStatus::Denied;
        self
    }

    /// Route resampled so consecutive points are at most `step_m` apart.
    fn walk(&self) -> Vec<Coordinate> {
        let mut points = Vec::new();
        for w in self.route.windows(2) {
            let steps = (w[0].distance_m(w[1]) / self.step_m).ceil().max(1.0) as usize;
            for i in 0..steps {
                let t = i as f64 / steps as f64;
                points.push(Coordinate::new(
                    w[0].latitude + t * (w[1].latitude - w[0].latitude),
                    w[0].longitude + t * (w[1].longitude - w[0].longitude),
                ));
            }
        }
        points.extend(self.route.last().copied());
        points
    }
}

#[async_trait]
impl DeviceLocation for SimulatedGps {
    async fn request_foreground_permission(&mut self) -> PermissionStatus {
        PermissionStatus::Granted
    }

    async fn request_background_permission(&mut self) -> PermissionStatus {
        self.background
    }

    async fn current_position(&mut self) -> LocationResult<Coordinate> {
        self.route
            .first()
            .copied()
            .ok_or_else(|| LocationError::Unavailable("empty route".into()))
    }

    fn watch_position(
        &mut self,
        options: WatchOptions,
    ) -> LocationResult<BoxStream<'static, LocationSample>> {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let jitter_deg = self.jitter_m / METRES_PER_DEGREE;
        let period: Duration = options.time_interval;

        let samples = stream::iter(self.walk())
            .map(move |c| {
                if jitter_deg == 0.0 {
                    return c;
                }
                Coordinate::new(
                    c.latitude + rng.gen_range(-jitter_deg..=jitter_deg),
                    c.longitude + rng.gen_range(-jitter_deg..=jitter_deg),
                )
            })
            .then(move |c| async move {
                tokio::time::sleep(period).await;
                LocationSample::now(c)
            });
        Ok(samples.boxed())
    }
}
