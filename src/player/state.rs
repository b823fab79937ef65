//! Playback state machine
//!
//! Contains the central `PlaybackState` struct: a cursor over the immutable
//! trace, the auto-play flag and rate, and the pending-update flag that
//! gives the renderer exactly one notification per visible change.
//!
//! Every navigation operation is total: out-of-range moves clamp silently,
//! and an empty trace degrades them all to no-ops.

use std::time::Duration;

use crate::player::display::{build_update, DisplayUpdate};
use crate::trace::{Frame, Trace};

/// Minimum auto-play rate in steps per second.
pub const MIN_RATE: u16 = 1;
/// Maximum auto-play rate in steps per second.
pub const MAX_RATE: u16 = 100;

/// Increment applied by the rate-up/rate-down keys.
const RATE_STEP: u16 = 5;

/// Result of processing an input event.
///
/// Returned by input handlers to signal control flow decisions to the
/// event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Continue normal playback/rendering
    Continue,
    /// Exit the player
    Quit,
}

/// Central playback state for the viewer.
///
/// Two play states exist: paused (initial) and playing; `toggle_play` is
/// the only transition between them. Stepping and seeking are legal in
/// either state and do not change the play state, with one exception:
/// seeking to the end pauses, consistent with auto-play stopping at the
/// last frame.
#[derive(Debug)]
pub struct PlaybackState {
    /// The trace being replayed. Never mutated.
    trace: Trace,
    /// Index of the displayed frame, `0..frame_count`. Stays 0 for an
    /// empty trace, where `current_frame` is `None`.
    cursor: usize,
    /// Auto-play rate in steps per second, `MIN_RATE..=MAX_RATE`.
    rate: u16,
    /// Whether auto-play is active.
    playing: bool,
    /// Tick interval captured when auto-play started. `Some` exactly while
    /// playing; rate changes mid-play do not touch it until the next
    /// play toggle.
    tick: Option<Duration>,
    /// Whether the help overlay is visible.
    show_help: bool,
    /// True when a visible change is waiting to be rendered.
    needs_render: bool,
}

impl PlaybackState {
    /// Create a new playback state positioned at the first frame, paused.
    pub fn new(trace: Trace, rate: u16) -> Self {
        Self {
            trace,
            cursor: 0,
            rate: rate.clamp(MIN_RATE, MAX_RATE),
            playing: false,
            tick: None,
            show_help: false,
            needs_render: true,
        }
    }

    pub fn frame_count(&self) -> usize {
        self.trace.len()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn rate(&self) -> u16 {
        self.rate
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn show_help(&self) -> bool {
        self.show_help
    }

    /// The frame at the cursor, or `None` for an empty trace.
    pub fn current_frame(&self) -> Option<&Frame> {
        self.trace.get(self.cursor)
    }

    /// Advance the cursor by one frame, clamping at the last frame.
    ///
    /// Returns the frame at the resulting cursor (unchanged when already at
    /// the end), or `None` for an empty trace.
    pub fn step_forward(&mut self) -> Option<&Frame> {
        if self.cursor + 1 < self.trace.len() {
            self.cursor += 1;
            self.needs_render = true;
            tracing::trace!(cursor = self.cursor, "step forward");
        }
        self.trace.get(self.cursor)
    }

    /// Move the cursor back by one frame, clamping at frame 0.
    pub fn step_back(&mut self) -> Option<&Frame> {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.needs_render = true;
            tracing::trace!(cursor = self.cursor, "step back");
        }
        self.trace.get(self.cursor)
    }

    /// Seek to the first frame. Play state is preserved.
    pub fn jump_to_start(&mut self) {
        if self.cursor != 0 {
            self.cursor = 0;
            self.needs_render = true;
        }
    }

    /// Seek to the last frame and pause.
    pub fn jump_to_end(&mut self) {
        let Some(last) = self.trace.len().checked_sub(1) else {
            return;
        };
        if self.cursor != last {
            self.cursor = last;
            self.needs_render = true;
        }
        if self.playing {
            self.toggle_play();
        }
    }

    /// Flip between paused and playing.
    ///
    /// Starting play captures the tick interval from the current rate, so a
    /// rate change mid-play takes effect on the next toggle cycle, not on
    /// an in-flight wait. Pausing drops the interval before this returns;
    /// no tick fires afterwards.
    pub fn toggle_play(&mut self) {
        self.playing = !self.playing;
        self.tick = if self.playing {
            Some(Duration::from_secs_f64(1.0 / f64::from(self.rate)))
        } else {
            None
        };
        self.needs_render = true;
        tracing::debug!(playing = self.playing, rate = self.rate, "toggle play");
    }

    /// Handle one scheduled auto-play tick.
    ///
    /// Advances one frame, or stops playback when the cursor is already at
    /// the last frame (no wrap-around). Ignored while paused.
    pub fn on_tick(&mut self) {
        if !self.playing {
            return;
        }
        if self.cursor + 1 < self.trace.len() {
            self.step_forward();
        } else {
            self.toggle_play();
        }
    }

    /// Interval between ticks; `Some` exactly while playing.
    pub fn tick_interval(&self) -> Option<Duration> {
        self.tick
    }

    /// Set the auto-play rate, clamped to `MIN_RATE..=MAX_RATE`.
    ///
    /// Never reschedules an in-flight interval.
    pub fn set_rate(&mut self, rate: u16) {
        let rate = rate.clamp(MIN_RATE, MAX_RATE);
        if rate != self.rate {
            self.rate = rate;
            self.needs_render = true;
        }
    }

    /// Increase the rate by one step.
    pub fn rate_up(&mut self) {
        self.set_rate(self.rate.saturating_add(RATE_STEP));
    }

    /// Decrease the rate by one step.
    pub fn rate_down(&mut self) {
        self.set_rate(self.rate.saturating_sub(RATE_STEP));
    }

    /// Toggle the help overlay.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
        self.needs_render = true;
    }

    /// Force a redraw on the next loop iteration (terminal resize).
    pub fn request_render(&mut self) {
        self.needs_render = true;
    }

    /// The notify step: return the display model for the pending change,
    /// exactly once per change.
    ///
    /// Returns `Some` if a visible change happened since the last call,
    /// `None` otherwise.
    pub fn take_update(&mut self) -> Option<DisplayUpdate> {
        if !self.needs_render {
            return None;
        }
        self.needs_render = false;
        Some(build_update(&self.trace, self.cursor))
    }
}
