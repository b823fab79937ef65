//! Input handling for the viewer
//!
//! Maps keyboard and mouse events to playback operations, returning a
//! control flow signal to the event loop.

mod keyboard;
mod mouse;

pub use keyboard::handle_key_event;
pub use mouse::handle_mouse_event;

use crossterm::event::Event;

use crate::player::state::{InputResult, PlaybackState};

/// Handle any input event, dispatching to the appropriate handler.
pub fn handle_event(event: Event, state: &mut PlaybackState) -> InputResult {
    match event {
        Event::Key(key) => handle_key_event(key, state),
        Event::Mouse(mouse) => handle_mouse_event(mouse, state),
        Event::Resize(_, _) => {
            state.request_render();
            InputResult::Continue
        }
        _ => InputResult::Continue, // Ignore focus events, etc.
    }
}
