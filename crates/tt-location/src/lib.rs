//! `tt-location`: where position samples come from.
//!
//! Every producer of [`LocationSample`][tt_core::LocationSample]s implements
//! [`LocationSource`].  Consumers (the tracker and recorder sessions) pull one
//! sample at a time with `next_sample().await` and never learn which variant
//! they are talking to.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                        |
//! |------------|-----------------------------------------------------------------|
//! | [`source`] | `LocationSource` trait, `Activation`, `SourceConfig`, `AnySource` |
//! | [`replay`] | `ReplaySource`: fixed demo path or a trail's own coordinates    |
//! | [`live`]   | `LiveSource<D>` over a platform `DeviceLocation` provider       |
//! | [`error`]  | `LocationError`, `PermissionScope`, `LocationResult<T>`          |
//!
//! # Emission contract
//!
//! A source emits only while enabled.  `disable()` is synchronous and final
//! for the current run: the replay timer or device subscription is dropped
//! on the spot, so no sample produced before the call can surface after it.
//! Enabling again starts a fresh run from the beginning.

pub mod error;
pub mod live;
pub mod replay;
pub mod source;


pub use error::{LocationError, LocationResult, PermissionScope};
pub use live::{Accuracy, DeviceLocation, LiveSource, PermissionStatus, WatchOptions};
pub use replay::{ReplaySource, FIXED_DEMO_PATH, REPLAY_INTERVAL_MS};
pub use source::{Activation, AnySource, LocationSource, SourceConfig};
