//! Session elapsed-time model.
//!
//! # Design
//!
//! Elapsed time is a whole-second counter advanced explicitly by the owner
//! (one [`Stopwatch::advance`] per second of wall time while running).  The
//! stopwatch never reads a clock itself, so tests drive it deterministically
//! and the session driver decides where the one-second cadence comes from.
//!
//! Lifecycle: `start → (pause ⇄ resume)* → reset`.  A paused stopwatch keeps
//! its count; only `reset` zeroes it.

use std::fmt;

/// Whole-second stopwatch for tracking and recording sessions.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stopwatch {
    elapsed_secs: u64,
    /// Started at least once since the last reset.
    active:       bool,
    /// Counting right now.
    running:      bool,
}

impl Stopwatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin counting.  Does not clear an existing count.
    pub fn start(&mut self) {
        self.active = true;
        self.running = true;
    }

    /// Stop counting, keeping the elapsed time.
    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Continue counting after [`pause`][Self::pause].  No-op if never started.
    pub fn resume(&mut self) {
        if self.active {
            self.running = true;
        }
    }

    /// Stop and zero the stopwatch.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Count one elapsed second if running.
    #[inline]
    pub fn advance(&mut self) {
        if self.running {
            self.elapsed_secs += 1;
        }
    }

    #[inline]
    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }

    /// `true` once started, until reset.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }
}

/// Render a second count as `HH:MM:SS`.  Hours are not wrapped at 24.
pub fn format_hms(total_secs: u64) -> String {
    let hours = total_secs / 3_600;
    let minutes = (total_secs % 3_600) / 60;
    let seconds = total_secs % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

impl fmt::Display for Stopwatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_hms(self.elapsed_secs))
    }
}
