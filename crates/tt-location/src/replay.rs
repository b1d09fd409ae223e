//! Replay sources: emit a fixed coordinate list on a timer, once.

use std::time::Duration;

use async_trait::async_trait;
use tokio::time::{self, Instant, Interval, MissedTickBehavior};
use tt_core::{Coordinate, LocationSample};

use crate::{Activation, LocationResult, LocationSource};

/// Default cadence between replayed samples, milliseconds.
pub const REPLAY_INTERVAL_MS: u64 = 1_500;

/// Demo path used when no trail is available: five points walking south-west
/// across the Nova Iguaçu municipal park.
pub const FIXED_DEMO_PATH: [Coordinate; 5] = [
    Coordinate::new(-22.760135, -43.47408),
    Coordinate::new(-22.7605,   -43.4745),
    Coordinate::new(-22.761,    -43.475),
    Coordinate::new(-22.7615,   -43.4748),
    Coordinate::new(-22.762,    -43.4746),
];

/// Plays a coordinate list back, one sample per interval, then stops.
///
/// The first sample arrives one full interval after [`enable`][LocationSource::enable].
/// After the last coordinate the source disables itself.
pub struct ReplaySource {
    path:     Vec<Coordinate>,
    interval: Duration,
    next:     usize,
    /// Present only while enabled.  Dropping it cancels the pending tick.
    timer:    Option<Interval>,
}

impl ReplaySource {
    pub fn new(path: Vec<Coordinate>) -> Self {
        Self {
            path,
            interval: Duration::from_millis(REPLAY_INTERVAL_MS),
            next:     0,
            timer:    None,
        }
    }

    /// The built-in [`FIXED_DEMO_PATH`].
    pub fn fixed_demo() -> Self {
        Self::new(FIXED_DEMO_PATH.to_vec())
    }

    /// Replay of a trail's own coordinate sequence.
    pub fn trail_replay(coordinates: Vec<Coordinate>) -> Self {
        Self::new(coordinates)
    }

    /// Override the cadence.  Zero is bumped to one millisecond.
    pub fn with_interval_ms(mut self, ms: u64) -> Self {
        self.interval = Duration::from_millis(ms.max(1));
        self
    }

    pub fn path(&self) -> &[Coordinate] {
        &self.path
    }

    /// Samples left in the current run.
    pub fn remaining(&self) -> usize {
        self.path.len().saturating_sub(self.next)
    }
}

#[async_trait]
impl LocationSource for ReplaySource {
    async fn enable(&mut self) -> LocationResult<Activation> {
        let mut timer = time::interval_at(Instant::now() + self.interval, self.interval);
        timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
        self.timer = Some(timer);
        self.next = 0;
        log::info!("replay enabled: {} samples every {:?}", self.path.len(), self.interval);
        Ok(Activation::Replay)
    }

    fn disable(&mut self) {
        if self.timer.take().is_some() {
            log::info!("replay disabled after {} of {} samples", self.next, self.path.len());
        }
        self.next = 0;
    }

    fn is_enabled(&self) -> bool {
        self.timer.is_some()
    }

    async fn next_sample(&mut self) -> Option<LocationSample> {
        if self.next >= self.path.len() {
            self.disable();
            return None;
        }
        // `Interval::tick` is cancel-safe; `next` only moves once it fires.
        self.timer.as_mut()?.tick().await;

        let coordinate = self.path[self.next];
        self.next += 1;
        log::debug!("replay sample {}/{} at {coordinate}", self.next, self.path.len());
        Some(LocationSample::now(coordinate))
    }

    async fn current_position(&mut self) -> LocationResult<Option<Coordinate>> {
        Ok(self.path.first().copied())
    }
}
