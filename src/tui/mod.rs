//! Terminal UI for the viewer
//!
//! Ratatui-based rendering of the player's display model, plus the theme
//! used by both the TUI and the CLI commands' colored output.

pub mod theme;
pub mod ui;

pub use theme::{current_theme, Theme};
