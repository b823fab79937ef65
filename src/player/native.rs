//! Terminal setup and the player event loop
//!
//! Single-threaded and event-driven: every operation runs to completion in
//! response to either an input event or a tick timeout, so ticks and manual
//! navigation never interleave. The tick deadline exists only while
//! playing; pausing drops it before the toggle returns, so no tick fires
//! after a pause.

use std::io;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{event, execute};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::config::Config;
use crate::player::input;
use crate::player::state::{InputResult, PlaybackState};
use crate::trace::Trace;
use crate::tui::ui::{self, StatusInfo};
use crate::tui::Theme;

/// Poll timeout while paused, so resize events still get picked up promptly.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Play a trace in the terminal until the user quits.
///
/// `rate_override` takes precedence over the configured default rate.
#[cfg(not(tarpaulin_include))]
pub fn run_player(trace: Trace, config: &Config, rate_override: Option<u16>) -> Result<()> {
    let rate = rate_override.unwrap_or(config.default_rate);
    let theme = Theme::from_name(&config.theme);
    let mut state = PlaybackState::new(trace, rate);
    tracing::debug!(frames = state.frame_count(), rate, "starting player");

    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("failed to initialize terminal")?;

    let result = event_loop(&mut terminal, &mut state, &theme);

    // Restore the terminal even when the loop failed
    let _ = disable_raw_mode();
    let _ = execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    );
    let _ = terminal.show_cursor();

    result
}

#[cfg(not(tarpaulin_include))]
fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut PlaybackState,
    theme: &Theme,
) -> Result<()> {
    let mut next_tick: Option<Instant> = None;

    loop {
        if let Some(update) = state.take_update() {
            let status = StatusInfo {
                playing: state.is_playing(),
                rate: state.rate(),
                show_help: state.show_help(),
            };
            terminal
                .draw(|frame| ui::draw(frame, &update, &status, theme))
                .context("failed to draw frame")?;
        }

        let timeout = match state.tick_interval() {
            Some(interval) => {
                // The deadline is pinned when play starts; a rate change
                // mid-play does not move it
                let deadline = *next_tick.get_or_insert_with(|| Instant::now() + interval);
                deadline.saturating_duration_since(Instant::now())
            }
            None => {
                next_tick = None;
                IDLE_POLL
            }
        };

        if event::poll(timeout).context("failed to poll for input")? {
            let ev = event::read().context("failed to read input event")?;
            if input::handle_event(ev, state) == InputResult::Quit {
                break;
            }
            if state.tick_interval().is_none() {
                next_tick = None;
            }
        } else if state.tick_interval().is_some() {
            state.on_tick();
            next_tick = state.tick_interval().map(|interval| Instant::now() + interval);
        }
    }

    Ok(())
}
