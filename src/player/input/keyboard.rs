//! Keyboard input handling for the viewer
//!
//! Reference bindings: right arrow steps forward, left arrow steps back,
//! space toggles play/pause. Plus/minus adjust the auto-play rate, Home/End
//! jump to the ends of the trace, and `?` opens the help overlay.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::player::state::{InputResult, PlaybackState};

/// Handle a keyboard event.
pub fn handle_key_event(key: KeyEvent, state: &mut PlaybackState) -> InputResult {
    // If help is showing, any key closes it
    if state.show_help() {
        state.toggle_help();
        return InputResult::Continue;
    }

    match key.code {
        // === Quit ===
        KeyCode::Char('q') | KeyCode::Esc => InputResult::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => InputResult::Quit,

        // === Help ===
        KeyCode::Char('?') => {
            state.toggle_help();
            InputResult::Continue
        }

        // === Playback controls ===
        KeyCode::Char(' ') => {
            state.toggle_play();
            InputResult::Continue
        }
        KeyCode::Char('+') | KeyCode::Char('=') => {
            state.rate_up();
            InputResult::Continue
        }
        KeyCode::Char('-') | KeyCode::Char('_') => {
            state.rate_down();
            InputResult::Continue
        }

        // === Stepping ===
        KeyCode::Right => {
            state.step_forward();
            InputResult::Continue
        }
        KeyCode::Left => {
            state.step_back();
            InputResult::Continue
        }

        // === Seeking ===
        KeyCode::Home => {
            state.jump_to_start();
            InputResult::Continue
        }
        KeyCode::End => {
            state.jump_to_end();
            InputResult::Continue
        }

        _ => InputResult::Continue,
    }
}
