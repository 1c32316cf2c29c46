//! Search limits and the wall-clock deadline.
//!
//! The search is single-threaded and polls the deadline at node entry, so a
//! plain `Instant` comparison is all the time control it needs.

use std::time::{Duration, Instant};

/// Deepest iteration an engine will attempt when only a time limit is given.
pub const MAX_DEPTH: u8 = 64;

/// Search limits that control when an engine should stop searching.
///
/// Engines respect both limits, stopping at whichever comes first. When the
/// time runs out the engine returns the best move of the deepest iteration
/// it completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    /// Maximum search depth in plies (half-moves)
    pub depth: u8,
    /// Maximum time allowed for this move (None = infinite)
    pub move_time: Option<Duration>,
}

impl SearchLimits {
    /// Create limits with only depth constraint (no time limit).
    pub fn depth(depth: u8) -> Self {
        Self {
            depth,
            move_time: None,
        }
    }

    /// Create limits with both depth and time constraints.
    pub fn depth_and_time(depth: u8, move_time: Duration) -> Self {
        Self {
            depth,
            move_time: Some(move_time),
        }
    }

    /// Create limits with only time constraint.
    pub fn time(move_time: Duration) -> Self {
        Self {
            depth: MAX_DEPTH,
            move_time: Some(move_time),
        }
    }

    /// Starts the clock: the deadline is `move_time` from now.
    pub fn start(&self) -> Deadline {
        Deadline::from_move_time(self.move_time)
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self::depth(4)
    }
}

/// Absolute point in time after which the search must wind down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Deadline(Option<Instant>);

impl Deadline {
    /// No deadline: only the depth limit applies.
    pub fn none() -> Self {
        Self(None)
    }

    pub fn at(instant: Instant) -> Self {
        Self(Some(instant))
    }

    pub fn after(duration: Duration) -> Self {
        Self::at(Instant::now() + duration)
    }

    pub fn from_move_time(move_time: Option<Duration>) -> Self {
        move_time.map_or_else(Self::none, Self::after)
    }

    pub fn is_set(&self) -> bool {
        self.0.is_some()
    }

    #[inline]
    pub fn is_expired(&self) -> bool {
        self.0.is_some_and(|at| Instant::now() >= at)
    }

    /// Remaining time (None if no limit).
    pub fn remaining(&self) -> Option<Duration> {
        self.0.map(|at| at.saturating_duration_since(Instant::now()))
    }
}

#[cfg(test)]
#[path = "time_control_tests.rs"]
mod time_control_tests;
