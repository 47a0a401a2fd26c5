// The tick-driven marker over the prompt columns.
//
// The marker is the time grid: it advances one column every
// `ticks_per_column` external clock ticks (default 2, i.e. half-rate motion
// when driven at 60 ticks/sec), and the column it sits on is the only one
// accepting input. Decoupling "tick" (fixed-rate clock) from "advance"
// (slower motion) gives a framerate-independent input window without
// wall-clock timestamps — correctness depends only on tick counting.
//
// Position is an `i8` in `{-1, 0, 1, 2, 3, 4}`: -1 means the marker has not
// entered the window yet, 4 means the window just completed. The position
// is monotonic within a window; the caller resets the marker when it begins
// a new window.
//
// At the default cadence the reset sequence over 11 ticks is:
//   -1, -1, 0, 0, 1, 1, 2, 2, 3, 3, 4
//
// See also: `game.rs`, which owns the reset-on-new-window rule and guards
// input against `live_column()`.

use crate::prompt::WINDOW_SIZE;
use serde::{Deserialize, Serialize};

/// Marker position: -1 before the window, 0..=3 on a live column, 4 after
/// the final column (window complete).
pub type MarkerPosition = i8;

/// Sentinel position before the marker enters the window.
pub const BEFORE_WINDOW: MarkerPosition = -1;

/// Sentinel position after the marker passes the final column.
pub const WINDOW_COMPLETE: MarkerPosition = WINDOW_SIZE as MarkerPosition;

/// Tick-driven cursor selecting the live column.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Marker {
    /// Clock ticks per one-column advance. Never zero.
    ticks_per_column: u32,
    /// Ticks consumed since the last reset.
    elapsed: u32,
    position: MarkerPosition,
}

impl Marker {
    pub fn new(ticks_per_column: u32) -> Marker {
        assert!(ticks_per_column > 0, "marker cadence must be non-zero");
        Marker {
            ticks_per_column,
            elapsed: 0,
            position: BEFORE_WINDOW,
        }
    }

    /// Consume one clock tick and return the (possibly advanced) position.
    /// The position saturates at `WINDOW_COMPLETE` until `reset()`.
    pub fn tick(&mut self) -> MarkerPosition {
        if self.elapsed > 0
            && self.elapsed % self.ticks_per_column == 0
            && self.position < WINDOW_COMPLETE
        {
            self.position += 1;
        }
        self.elapsed += 1;
        self.position
    }

    /// The current position without consuming a tick.
    pub fn position(&self) -> MarkerPosition {
        self.position
    }

    /// The live column index, while the marker is inside the window.
    /// `None` means no input should be evaluated this tick.
    pub fn live_column(&self) -> Option<usize> {
        if (0..WINDOW_COMPLETE).contains(&self.position) {
            Some(self.position as usize)
        } else {
            None
        }
    }

    /// Whether the marker has passed the final column.
    pub fn is_complete(&self) -> bool {
        self.position >= WINDOW_COMPLETE
    }

    /// Rewind to the pre-window position for the next window.
    pub fn reset(&mut self) {
        self.elapsed = 0;
        self.position = BEFORE_WINDOW;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_cadence_reset_sequence() {
        let mut marker = Marker::new(2);
        let positions: Vec<MarkerPosition> = (0..11).map(|_| marker.tick()).collect();
        assert_eq!(positions, [-1, -1, 0, 0, 1, 1, 2, 2, 3, 3, 4]);
        assert!(marker.is_complete());
    }

    #[test]
    fn position_saturates_at_window_complete() {
        let mut marker = Marker::new(1);
        for _ in 0..20 {
            marker.tick();
        }
        assert_eq!(marker.position(), WINDOW_COMPLETE);
        assert_eq!(marker.live_column(), None);
    }

    #[test]
    fn live_column_only_inside_window() {
        let mut marker = Marker::new(2);
        assert_eq!(marker.live_column(), None);
        marker.tick();
        marker.tick();
        marker.tick();
        assert_eq!(marker.position(), 0);
        assert_eq!(marker.live_column(), Some(0));
    }

    #[test]
    fn reset_restarts_the_sequence() {
        let mut marker = Marker::new(2);
        for _ in 0..11 {
            marker.tick();
        }
        marker.reset();
        assert_eq!(marker.position(), BEFORE_WINDOW);
        let positions: Vec<MarkerPosition> = (0..11).map(|_| marker.tick()).collect();
        assert_eq!(positions, [-1, -1, 0, 0, 1, 1, 2, 2, 3, 3, 4]);
    }

    #[test]
    fn faster_cadence_advances_every_tick() {
        let mut marker = Marker::new(1);
        let positions: Vec<MarkerPosition> = (0..6).map(|_| marker.tick()).collect();
        assert_eq!(positions, [-1, 0, 1, 2, 3, 4]);
    }

    #[test]
    #[should_panic(expected = "marker cadence must be non-zero")]
    fn zero_cadence_is_a_construction_error() {
        let _ = Marker::new(0);
    }
}
