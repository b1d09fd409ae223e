//! Record session: build a [`TrailDraft`] from a location source.

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tt_location::LocationSource;
use tt_recorder::{RecordingEvent, TrailDraft, TrailRecorder};

use crate::clock::second_ticker;
use crate::source::enable_source;
use crate::{SessionHandle, SessionObserver, SessionResult};

/// User actions on a record session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordCommand {
    ToggleRecording,
    MarkWaypoint,
    /// Throw the recording away and end the session.
    Discard,
    /// Hand the recording off.  Rejected below two points.
    Finish,
}

/// A recorder plus the source feeding it.
///
/// Recording starts as soon as the source is up.  [`run`][Self::run] returns
/// `Some(draft)` on a successful finish and `None` on discard or
/// cancellation.
///
/// [`RecordCommand::ToggleRecording`] disables the source while paused and
/// enables it again on resume, so a replay source starts over from its first
/// point.  A source that runs dry does not end the session: the recording
/// can still be finished or discarded, and toggling off and on restarts the
/// source for more points.
pub struct RecordSession<S: LocationSource> {
    recorder: TrailRecorder,
    source:   S,
    commands: mpsc::Receiver<RecordCommand>,
    cancel:   CancellationToken,
}

impl<S: LocationSource> RecordSession<S> {
    pub fn new(source: S) -> (Self, SessionHandle<RecordCommand>) {
        let (handle, commands, cancel) = SessionHandle::channel();
        let session = Self { recorder: TrailRecorder::new(), source, commands, cancel };
        (session, handle)
    }

    pub async fn run<O: SessionObserver>(self, observer: &mut O) -> SessionResult<Option<TrailDraft>> {
        let Self { mut recorder, mut source, mut commands, cancel } = self;

        if let Err(err) = enable_source(&mut source, observer).await {
            log::warn!("record session not started: {err}");
            return Err(err);
        }

        recorder.start();
        observer.on_recording_event(&RecordingEvent::Started);
        let mut ticker = second_ticker();
        let mut draft = None;

        loop {
            tokio::select! {
                biased;

                _ = cancel.cancelled() => {
                    log::info!("record session cancelled with {} points", recorder.path().len());
                    break;
                }

                command = commands.recv() => match command {
                    Some(RecordCommand::ToggleRecording) if recorder.is_recording() => {
                        recorder.toggle_recording();
                        source.disable();
                        observer.on_recording_event(&RecordingEvent::Paused);
                    }
                    Some(RecordCommand::ToggleRecording) => {
                        match enable_source(&mut source, observer).await {
                            Ok(_) => {
                                recorder.toggle_recording();
                                observer.on_recording_event(&RecordingEvent::Resumed);
                            }
                            Err(err) => log::warn!("recording stays paused: {err}"),
                        }
                    }
                    Some(RecordCommand::MarkWaypoint) => match recorder.mark_waypoint() {
                        Ok(number) => observer.on_recording_event(&RecordingEvent::WaypointMarked {
                            number,
                            order: recorder.path().len(),
                        }),
                        Err(e) => observer.on_error(&e.into()),
                    },
                    Some(RecordCommand::Discard) => {
                        recorder.discard();
                        observer.on_recording_event(&RecordingEvent::Discarded);
                        break;
                    }
                    Some(RecordCommand::Finish) => match recorder.finish() {
                        Ok(finished) => {
                            observer.on_recording_event(&RecordingEvent::Finished {
                                points:       finished.coordinates().len(),
                                waypoints:    finished.waypoint_orders().len(),
                                elapsed_secs: finished.duration_secs(),
                            });
                            draft = Some(finished);
                            break;
                        }
                        Err(e) => observer.on_error(&e.into()),
                    },
                    // Nobody can finish or discard any more.
                    None => {
                        log::info!("record session abandoned with {} points", recorder.path().len());
                        break;
                    }
                },

                _ = ticker.tick() => {
                    if recorder.stopwatch().is_running() {
                        recorder.advance_clock();
                        observer.on_tick(recorder.elapsed_secs());
                    }
                }

                sample = source.next_sample(), if source.is_enabled() => match sample {
                    Some(sample) => {
                        observer.on_sample(&sample);
                        if recorder.record(&sample) {
                            observer.on_recording_event(&RecordingEvent::PointRecorded {
                                coordinate: sample.coordinate,
                                points:     recorder.path().len(),
                            });
                        }
                    }
                    // Toggling off and on again restarts the source.
                    None => {
                        log::info!("location source ended with {} points recorded", recorder.path().len());
                        observer.on_source_ended();
                    }
                },
            }
        }

        source.disable();
        Ok(draft)
    }
}
