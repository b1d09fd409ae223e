use std::time::Duration;

use tokio::time::{self, Instant, Interval, MissedTickBehavior};

const ONE_SECOND: Duration = Duration::from_secs(1);

/// One tick per second, the first one a second from now.  Late ticks are
/// not bunched up: a stalled session just counts fewer seconds.
pub(crate) fn second_ticker() -> Interval {
    let mut ticker = time::interval_at(Instant::now() + ONE_SECOND, ONE_SECOND);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    ticker
}
