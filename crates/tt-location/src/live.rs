//! Live device GPS.
//!
//! The platform location service is reached through the [`DeviceLocation`]
//! trait so the session code never depends on a particular OS binding.  A
//! watch is a `futures` stream; dropping the stream is the unsubscribe.

use std::time::Duration;

use async_trait::async_trait;
use futures::stream::{BoxStream, StreamExt};
use tt_core::{Coordinate, LocationSample};

use crate::{Activation, LocationError, LocationResult, LocationSource, PermissionScope};

/// Answer to a permission prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum PermissionStatus {
    Granted,
    Denied,
}

impl PermissionStatus {
    #[inline]
    pub fn is_granted(self) -> bool {
        self == PermissionStatus::Granted
    }
}

/// Requested fix quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Accuracy {
    Balanced,
    High,
    #[default]
    BestForNavigation,
}

/// Subscription parameters passed to [`DeviceLocation::watch_position`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct WatchOptions {
    pub accuracy:            Accuracy,
    /// Minimum time between updates.
    pub time_interval:       Duration,
    /// Minimum movement between updates, metres.
    pub distance_interval_m: f64,
}

impl Default for WatchOptions {
    fn default() -> Self {
        Self {
            accuracy:            Accuracy::BestForNavigation,
            time_interval:       Duration::from_secs(1),
            distance_interval_m: 1.0,
        }
    }
}

/// Platform location service.
#[async_trait]
pub trait DeviceLocation: Send {
    async fn request_foreground_permission(&mut self) -> PermissionStatus;

    async fn request_background_permission(&mut self) -> PermissionStatus;

    /// One-shot fix.
    async fn current_position(&mut self) -> LocationResult<Coordinate>;

    /// Subscribe to position updates.  The subscription lives exactly as
    /// long as the returned stream.
    fn watch_position(
        &mut self,
        options: WatchOptions,
    ) -> LocationResult<BoxStream<'static, LocationSample>>;
}

/// [`LocationSource`] over a [`DeviceLocation`].
pub struct LiveSource<D: DeviceLocation> {
    device:             D,
    options:            WatchOptions,
    request_background: bool,
    foreground_granted: bool,
    watch:              Option<BoxStream<'static, LocationSample>>,
}

impl<D: DeviceLocation> LiveSource<D> {
    pub fn new(device: D) -> Self {
        Self {
            device,
            options:            WatchOptions::default(),
            request_background: false,
            foreground_granted: false,
            watch:              None,
        }
    }

    /// Also ask for background permission on enable.
    pub fn with_background(mut self, request: bool) -> Self {
        self.request_background = request;
        self
    }

    pub fn with_options(mut self, options: WatchOptions) -> Self {
        self.options = options;
        self
    }

    pub fn device(&self) -> &D {
        &self.device
    }

    async fn ensure_foreground(&mut self) -> LocationResult<()> {
        if self.foreground_granted {
            return Ok(());
        }
        if !self.device.request_foreground_permission().await.is_granted() {
            log::warn!("foreground location permission denied");
            return Err(LocationError::PermissionDenied(PermissionScope::Foreground));
        }
        self.foreground_granted = true;
        Ok(())
    }
}

#[async_trait]
impl<D: DeviceLocation> LocationSource for LiveSource<D> {
    async fn enable(&mut self) -> LocationResult<Activation> {
        self.disable();
        self.ensure_foreground().await?;

        let activation = if !self.request_background {
            Activation::Foreground
        } else if self.device.request_background_permission().await.is_granted() {
            Activation::Background
        } else {
            log::warn!("background location permission denied; tracking in foreground only");
            Activation::ForegroundOnly
        };

        self.watch = Some(self.device.watch_position(self.options)?);
        log::info!("live location enabled ({activation:?}, {:?})", self.options.accuracy);
        Ok(activation)
    }

    fn disable(&mut self) {
        if self.watch.take().is_some() {
            log::info!("live location disabled");
        }
    }

    fn is_enabled(&self) -> bool {
        self.watch.is_some()
    }

    async fn next_sample(&mut self) -> Option<LocationSample> {
        let sample = self.watch.as_mut()?.next().await;
        if sample.is_none() {
            log::info!("device ended the location watch");
            self.watch = None;
        }
        sample
    }

    async fn current_position(&mut self) -> LocationResult<Option<Coordinate>> {
        self.ensure_foreground().await?;
        self.device.current_position().await.map(Some)
    }
}
