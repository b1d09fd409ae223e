//! Follow session: drive a [`TrailTracker`] from a location source.

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tt_core::{TrackingConfig, Trail};
use tt_location::LocationSource;
use tt_tracker::{TrackingSummary, TrailTracker};

use crate::clock::second_ticker;
use crate::source::enable_source;
use crate::{SessionHandle, SessionObserver, SessionResult};

/// User actions on a follow session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowCommand {
    Pause,
    Resume,
    TogglePause,
    /// Finish by hand, without reaching the end of the trail.
    Stop,
}

/// A tracker plus the source feeding it.
///
/// [`run`][Self::run] ends when the trail is completed, on
/// [`FollowCommand::Stop`], on cancellation, or when the source runs dry.
/// The source is always disabled on the way out.
///
/// Pausing disables the source, so nothing is delivered while paused.
/// Resuming enables it again; a replay source starts over from its first
/// point.  If the source cannot be re-enabled the error goes to
/// [`SessionObserver::on_error`] and the tracker stays paused.
pub struct FollowSession<S: LocationSource> {
    tracker:  TrailTracker,
    source:   S,
    commands: mpsc::Receiver<FollowCommand>,
    cancel:   CancellationToken,
}

impl<S: LocationSource> FollowSession<S> {
    pub fn new(tracker: TrailTracker, source: S) -> (Self, SessionHandle<FollowCommand>) {
        let (handle, commands, cancel) = SessionHandle::channel();
        (Self { tracker, source, commands, cancel }, handle)
    }

    /// Session over `trail` with per-trail thresholds.
    pub fn with_config(
        trail:  Trail,
        config: TrackingConfig,
        source: S,
    ) -> SessionResult<(Self, SessionHandle<FollowCommand>)> {
        Ok(Self::new(TrailTracker::with_config(trail, config)?, source))
    }

    pub fn tracker(&self) -> &TrailTracker {
        &self.tracker
    }

    /// Enable the source, start tracking, and process until the session ends.
    ///
    /// Fails only if the source cannot be enabled (e.g. permission denied),
    /// in which case no sample is ever processed.
    pub async fn run<O: SessionObserver>(self, observer: &mut O) -> SessionResult<TrackingSummary> {
        let Self { mut tracker, mut source, mut commands, cancel } = self;

        if let Err(err) = enable_source(&mut source, observer).await {
            log::warn!("follow session for {} not started: {err}", tracker.trail().id);
            return Err(err);
        }

        tracker.start();
        let mut ticker = second_ticker();
        let mut commands_open = true;

        loop {
            tokio::select! {
                biased;

                _ = cancel.cancelled() => {
                    log::info!("follow session for {} cancelled", tracker.trail().id);
                    break;
                }

                command = commands.recv(), if commands_open => match command {
                    Some(FollowCommand::Pause)  => pause(&mut tracker, &mut source),
                    Some(FollowCommand::Resume) => resume(&mut tracker, &mut source, observer).await,
                    Some(FollowCommand::TogglePause) if tracker.is_paused() => {
                        resume(&mut tracker, &mut source, observer).await
                    }
                    Some(FollowCommand::TogglePause) => pause(&mut tracker, &mut source),
                    Some(FollowCommand::Stop)   => break,
                    None                        => commands_open = false,
                },

                _ = ticker.tick() => {
                    if tracker.stopwatch().is_running() {
                        tracker.advance_clock();
                        observer.on_tick(tracker.elapsed_secs());
                    }
                }

                sample = source.next_sample(), if source.is_enabled() => match sample {
                    Some(sample) => {
                        observer.on_sample(&sample);
                        for event in tracker.process(&sample) {
                            observer.on_tracking_event(&event);
                        }
                        if tracker.is_completed() {
                            break;
                        }
                    }
                    None => {
                        log::info!("location source ended for {}", tracker.trail().id);
                        observer.on_source_ended();
                        break;
                    }
                },
            }
        }

        source.disable();
        Ok(tracker.stop())
    }
}

fn pause<S: LocationSource>(tracker: &mut TrailTracker, source: &mut S) {
    tracker.pause();
    if tracker.is_paused() {
        source.disable();
    }
}

async fn resume<S: LocationSource, O: SessionObserver>(
    tracker:  &mut TrailTracker,
    source:   &mut S,
    observer: &mut O,
) {
    if !tracker.is_paused() {
        return;
    }
    match enable_source(source, observer).await {
        Ok(_) => tracker.resume(),
        Err(err) => log::warn!("tracking {} stays paused: {err}", tracker.trail().id),
    }
}
