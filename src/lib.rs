//! itv - Interpreter Trace Viewer
//!
//! Terminal step-through player for precomputed execution traces of an
//! interpreted program. A trace is an ordered sequence of frames, each one
//! a snapshot of interpreter state (current instruction, operand stack,
//! local variables) at a single recorded step.
//!
//! The crate is organized into:
//! - `trace`: trace/frame data model and JSON loading
//! - `player`: playback state machine, input handling, and the event loop
//! - `tui`: ratatui rendering of the player's display model
//! - `config`: TOML configuration (default rate, theme)

pub mod config;
pub mod player;
pub mod trace;
pub mod tui;

pub use config::Config;
pub use trace::{Frame, Trace};

/// Full version string for `--version` output.
///
/// Dev builds include the short git SHA and build date emitted by the build
/// script; `--features release` builds carry the build date only.
pub fn version() -> String {
    let base = env!("CARGO_PKG_VERSION");
    let date = option_env!("ITV_BUILD_DATE").unwrap_or("unknown");

    match option_env!("VERGEN_GIT_SHA") {
        Some(sha) => format!("{} ({}, built {})", base, sha, date),
        None => format!("{} (built {})", base, date),
    }
}
