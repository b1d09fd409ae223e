//! `tt-session`: async drivers that own a location source and a tracker or
//! recorder.
//!
//! # Run loop
//!
//! Both sessions run the same `tokio::select!` loop, polled in this order:
//!
//! ```text
//! loop:
//!   ① Cancel   CancellationToken fired → leave
//!   ② Command  user action from the SessionHandle
//!              pause → source.disable(), resume → source.enable()
//!   ③ Tick     one second elapsed → advance the stopwatch
//!   ④ Sample   next position from the source → tracker / recorder
//! on exit: source.disable()
//! ```
//!
//! Dropping the pending `next_sample()` future when another branch wins
//! loses nothing: sources are cancel-safe.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use tt_location::ReplaySource;
//! use tt_session::{FollowCommand, FollowSession, NoopObserver};
//! use tt_tracker::TrailTracker;
//!
//! let source = ReplaySource::trail_replay(trail.coordinates.clone());
//! let (session, handle) = FollowSession::new(TrailTracker::new(trail), source);
//! let summary = session.run(&mut NoopObserver).await?;
//! ```

mod clock;
pub mod error;
pub mod follow;
pub mod handle;
pub mod observer;
pub mod record;
mod source;


pub use error::{SessionError, SessionResult};
pub use follow::{FollowCommand, FollowSession};
pub use handle::{SessionHandle, COMMAND_BUFFER};
pub use observer::{NoopObserver, SessionObserver};
pub use record::{RecordCommand, RecordSession};
