//! The `LocationSource` trait and configuration-driven source selection.

use async_trait::async_trait;
use tt_core::{Coordinate, LocationSample};

use crate::{DeviceLocation, LiveSource, LocationError, LocationResult, ReplaySource};
use crate::replay::REPLAY_INTERVAL_MS;

/// How a source came up after [`LocationSource::enable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// A replay source; no permissions involved.
    Replay,
    /// Live tracking with foreground permission.  Background was not asked.
    Foreground,
    /// Live tracking with foreground and background permission.
    Background,
    /// Background permission was requested and refused.  Tracking still
    /// runs while the app is in the foreground.
    ForegroundOnly,
}

/// A stream of position samples that can be switched on and off.
///
/// `next_sample` is cancel-safe: dropping its future before it resolves
/// loses no sample, which lets sessions race it against other events in
/// `tokio::select!`.
#[async_trait]
pub trait LocationSource: Send {
    /// Start emitting.  Restarts from the beginning if already enabled.
    async fn enable(&mut self) -> LocationResult<Activation>;

    /// Stop emitting immediately.  Idempotent.
    fn disable(&mut self);

    fn is_enabled(&self) -> bool;

    /// Wait for the next sample.  `None` once the source is disabled or has
    /// run out of samples; an exhausted source disables itself.
    async fn next_sample(&mut self) -> Option<LocationSample>;

    /// One-shot position for initial map centering.  `Ok(None)` when the
    /// source has nothing to report.
    async fn current_position(&mut self) -> LocationResult<Option<Coordinate>>;
}

#[async_trait]
impl<S: LocationSource + ?Sized> LocationSource for Box<S> {
    async fn enable(&mut self) -> LocationResult<Activation> {
        (**self).enable().await
    }

    fn disable(&mut self) {
        (**self).disable()
    }

    fn is_enabled(&self) -> bool {
        (**self).is_enabled()
    }

    async fn next_sample(&mut self) -> Option<LocationSample> {
        (**self).next_sample().await
    }

    async fn current_position(&mut self) -> LocationResult<Option<Coordinate>> {
        (**self).current_position().await
    }
}

// ── Configuration ─────────────────────────────────────────────────────────────

/// Which source a session should use.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")
)]
pub enum SourceConfig {
    /// Device GPS.
    Live {
        #[cfg_attr(feature = "serde", serde(default))]
        request_background: bool,
    },
    /// The built-in five-point demo path.
    FixedDemo {
        #[cfg_attr(feature = "serde", serde(default = "default_replay_interval_ms"))]
        replay_interval_ms: u64,
    },
    /// Replay a trail's own coordinates.
    TrailReplay {
        coordinates: Vec<Coordinate>,
        #[cfg_attr(feature = "serde", serde(default = "default_replay_interval_ms"))]
        replay_interval_ms: u64,
    },
}

#[cfg_attr(not(feature = "serde"), allow(dead_code))]
fn default_replay_interval_ms() -> u64 {
    REPLAY_INTERVAL_MS
}

impl SourceConfig {
    pub fn fixed_demo() -> Self {
        SourceConfig::FixedDemo { replay_interval_ms: REPLAY_INTERVAL_MS }
    }

    pub fn trail_replay(coordinates: Vec<Coordinate>) -> Self {
        SourceConfig::TrailReplay { coordinates, replay_interval_ms: REPLAY_INTERVAL_MS }
    }

    pub fn is_live(&self) -> bool {
        matches!(self, SourceConfig::Live { .. })
    }
}

// ── AnySource ─────────────────────────────────────────────────────────────────

/// Runtime-selected location source.
pub enum AnySource<D: DeviceLocation> {
    Live(LiveSource<D>),
    Replay(ReplaySource),
}

impl<D: DeviceLocation> AnySource<D> {
    /// Build the source described by `config`.
    ///
    /// `device` is only consulted for [`SourceConfig::Live`]; asking for a
    /// live source without one is [`LocationError::Unavailable`].
    pub fn from_config(config: &SourceConfig, device: Option<D>) -> LocationResult<Self> {
        match config {
            SourceConfig::Live { request_background } => {
                let device = device
                    .ok_or_else(|| LocationError::Unavailable("no location device".into()))?;
                Ok(AnySource::Live(
                    LiveSource::new(device).with_background(*request_background),
                ))
            }
            SourceConfig::FixedDemo { replay_interval_ms } => Ok(AnySource::Replay(
                ReplaySource::fixed_demo().with_interval_ms(*replay_interval_ms),
            )),
            SourceConfig::TrailReplay { coordinates, replay_interval_ms } => Ok(AnySource::Replay(
                ReplaySource::trail_replay(coordinates.clone()).with_interval_ms(*replay_interval_ms),
            )),
        }
    }
}

#[async_trait]
impl<D: DeviceLocation> LocationSource for AnySource<D> {
    async fn enable(&mut self) -> LocationResult<Activation> {
        match self {
            AnySource::Live(s)   => s.enable().await,
            AnySource::Replay(s) => s.enable().await,
        }
    }

    fn disable(&mut self) {
        match self {
            AnySource::Live(s)   => s.disable(),
            AnySource::Replay(s) => s.disable(),
        }
    }

    fn is_enabled(&self) -> bool {
        match self {
            AnySource::Live(s)   => s.is_enabled(),
            AnySource::Replay(s) => s.is_enabled(),
        }
    }

    async fn next_sample(&mut self) -> Option<LocationSample> {
        match self {
            AnySource::Live(s)   => s.next_sample().await,
            AnySource::Replay(s) => s.next_sample().await,
        }
    }

    async fn current_position(&mut self) -> LocationResult<Option<Coordinate>> {
        match self {
            AnySource::Live(s)   => s.current_position().await,
            AnySource::Replay(s) => s.current_position().await,
        }
    }
}
