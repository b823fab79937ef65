//! Trace playback module
//!
//! Drives the step-through display from an in-memory ordered sequence of
//! frames: manual stepping, seeking, and timed auto-play.
//!
//! # Architecture
//!
//! - `state`: the playback state machine (cursor, rate, play/pause, tick
//!   handling) - the one piece of real logic in the viewer
//! - `display`: the pure display model produced on every visible change;
//!   binding it to a concrete UI is the renderer's job
//! - `input/`: keyboard and mouse input handling
//! - `native`: terminal setup and the single-threaded event loop
//!
//! # Usage
//!
//! ```no_run
//! use itv::player::run_player;
//! use itv::{Config, Trace};
//!
//! let trace = Trace::load("trace.json").unwrap();
//! let config = Config::default();
//! run_player(trace, &config, None).unwrap();
//! ```

pub mod display;
pub(crate) mod input;
mod native;
pub mod state;

pub use display::{build_update, DisplayUpdate};
pub use native::run_player;
pub use state::{InputResult, PlaybackState, MAX_RATE, MIN_RATE};
