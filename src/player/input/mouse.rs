//! Mouse input handling for the viewer
//!
//! The scroll wheel steps through the trace: wheel down advances one
//! frame, wheel up goes back one.

use crossterm::event::{MouseEvent, MouseEventKind};

use crate::player::state::{InputResult, PlaybackState};

/// Handle a mouse event.
pub fn handle_mouse_event(mouse: MouseEvent, state: &mut PlaybackState) -> InputResult {
    match mouse.kind {
        MouseEventKind::ScrollDown => {
            state.step_forward();
        }
        MouseEventKind::ScrollUp => {
            state.step_back();
        }
        _ => {}
    }

    InputResult::Continue
}
