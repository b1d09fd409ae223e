//! Session observer trait: the user-facing notification channel.

use tt_core::LocationSample;
use tt_location::Activation;
use tt_recorder::RecordingEvent;
use tt_tracker::TrackingEvent;

use crate::SessionError;

/// Callbacks invoked by the session run loops.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Callbacks run inline on the session
/// task; keep them short.
///
/// # Example: toast notifier
///
/// ```rust,ignore
/// struct Toasts;
///
/// impl SessionObserver for Toasts {
///     fn on_tracking_event(&mut self, event: &TrackingEvent) {
///         if let TrackingEvent::WaypointReached { name, .. } = event {
///             toast(format!("Você chegou em {name}"));
///         }
///     }
/// }
/// ```
pub trait SessionObserver {
    /// The source came up, at session start or on resume.  Not called if
    /// enabling failed.  A [`Activation::ForegroundOnly`] activation is
    /// followed by an [`on_error`][Self::on_error] for the denied background
    /// permission.
    fn on_source_enabled(&mut self, _activation: Activation) {}

    /// Every sample the source delivered, before evaluation.
    fn on_sample(&mut self, _sample: &LocationSample) {}

    fn on_tracking_event(&mut self, _event: &TrackingEvent) {}

    fn on_recording_event(&mut self, _event: &RecordingEvent) {}

    /// Once per second while the session clock runs.
    fn on_tick(&mut self, _elapsed_secs: u64) {}

    /// A rejected operation or a failed source.  Rejections do not end the
    /// session.
    fn on_error(&mut self, _error: &SessionError) {}

    /// The source stopped on its own (replay exhausted, device watch ended).
    fn on_source_ended(&mut self) {}
}

/// A [`SessionObserver`] that does nothing.
pub struct NoopObserver;

impl SessionObserver for NoopObserver {}
