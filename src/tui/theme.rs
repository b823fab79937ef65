//! Theme configuration for TUI and CLI
//!
//! Centralizes all color and style definitions. Provides both ratatui
//! styles (for the player panes) and ANSI escape codes (for CLI output).

use ratatui::style::{Color, Modifier, Style};

/// Color roles for the viewer.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Primary text color (stack entries, local values)
    pub text: Color,
    /// Secondary/dimmed text (hints, placeholders, ip offsets)
    pub dim: Color,
    /// Accent color (current instruction, stack top, progress)
    pub accent: Color,
    /// Key names in the status bar and help overlay
    pub key_hint: Color,
    /// Pane borders
    pub border: Color,
    /// Error color for CLI output
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Default theme - light gray text with a green accent.
    /// Uses standard ANSI colors for consistent terminal rendering.
    pub fn dark() -> Self {
        Self {
            text: Color::Gray,
            dim: Color::DarkGray,
            accent: Color::Green,
            key_hint: Color::Cyan,
            border: Color::DarkGray,
            error: Color::Red,
        }
    }

    /// Classic terminal theme - white text, yellow accent.
    pub fn classic() -> Self {
        Self {
            text: Color::White,
            dim: Color::DarkGray,
            accent: Color::Yellow,
            key_hint: Color::Cyan,
            border: Color::Gray,
            error: Color::Red,
        }
    }

    /// Cyan/blue theme.
    pub fn ocean() -> Self {
        Self {
            text: Color::Cyan,
            dim: Color::DarkGray,
            accent: Color::LightCyan,
            key_hint: Color::LightBlue,
            border: Color::Blue,
            error: Color::Red,
        }
    }

    /// Look up a theme by its config name, falling back to the default.
    pub fn from_name(name: &str) -> Self {
        match name {
            "dark" => Self::dark(),
            "classic" => Self::classic(),
            "ocean" => Self::ocean(),
            other => {
                tracing::debug!(theme = other, "unknown theme name, using default");
                Self::default()
            }
        }
    }

    /// Whether `name` names a bundled theme.
    pub fn is_known(name: &str) -> bool {
        matches!(name, "dark" | "classic" | "ocean")
    }

    // Style helpers

    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    pub fn dim_style(&self) -> Style {
        Style::default().fg(self.dim)
    }

    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Bold accent, for the active function name and the stack top.
    pub fn accent_bold_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn key_hint_style(&self) -> Style {
        Style::default().fg(self.key_hint)
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    // ANSI color helpers for CLI output

    /// Format text with the primary color (for CLI output).
    pub fn primary_text(&self, text: &str) -> String {
        format!("{}{}{}", color_to_ansi(self.text), text, ANSI_RESET)
    }

    /// Format text with the accent color (for CLI output).
    pub fn accent_text(&self, text: &str) -> String {
        format!("{}{}{}", color_to_ansi(self.accent), text, ANSI_RESET)
    }

    /// Format text with the dim color (for CLI output).
    pub fn dim_text(&self, text: &str) -> String {
        format!("{}{}{}", color_to_ansi(self.dim), text, ANSI_RESET)
    }

    /// Format text with the error color (for CLI output).
    pub fn error_text(&self, text: &str) -> String {
        format!("{}{}{}", color_to_ansi(self.error), text, ANSI_RESET)
    }
}

/// ANSI reset sequence
const ANSI_RESET: &str = "\x1b[0m";

/// Convert a ratatui Color to an ANSI escape code.
fn color_to_ansi(color: Color) -> &'static str {
    match color {
        Color::Black => "\x1b[30m",
        Color::Red => "\x1b[31m",
        Color::Green => "\x1b[32m",
        Color::Yellow => "\x1b[33m",
        Color::Blue => "\x1b[34m",
        Color::Magenta => "\x1b[35m",
        Color::Cyan => "\x1b[36m",
        Color::Gray => "\x1b[37m",
        Color::DarkGray => "\x1b[90m",
        Color::LightRed => "\x1b[91m",
        Color::LightGreen => "\x1b[92m",
        Color::LightYellow => "\x1b[93m",
        Color::LightBlue => "\x1b[94m",
        Color::LightMagenta => "\x1b[95m",
        Color::LightCyan => "\x1b[96m",
        Color::White => "\x1b[97m",
        Color::Reset => "\x1b[0m",
        // For RGB and indexed colors, fall back to reset (no color)
        _ => "",
    }
}

/// Global theme instance used by CLI commands.
pub fn current_theme() -> Theme {
    Theme::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_is_dark() {
        let theme = Theme::default();
        assert_eq!(theme.text, Color::Gray);
        assert_eq!(theme.accent, Color::Green);
    }

    #[test]
    fn from_name_resolves_bundled_themes() {
        assert_eq!(Theme::from_name("classic").text, Color::White);
        assert_eq!(Theme::from_name("ocean").text, Color::Cyan);
        assert_eq!(Theme::from_name("dark").accent, Color::Green);
    }

    #[test]
    fn from_name_falls_back_to_default() {
        let theme = Theme::from_name("neon");
        assert_eq!(theme.text, Theme::default().text);
    }

    #[test]
    fn is_known_matches_bundled_names() {
        assert!(Theme::is_known("dark"));
        assert!(Theme::is_known("classic"));
        assert!(Theme::is_known("ocean"));
        assert!(!Theme::is_known("neon"));
    }

    #[test]
    fn style_helpers_return_correct_colors() {
        let theme = Theme::dark();
        assert_eq!(theme.text_style().fg, Some(Color::Gray));
        assert_eq!(theme.dim_style().fg, Some(Color::DarkGray));
        assert_eq!(theme.accent_style().fg, Some(Color::Green));
        assert_eq!(theme.key_hint_style().fg, Some(Color::Cyan));
    }

    #[test]
    fn ansi_text_helpers_wrap_with_color_codes() {
        let theme = Theme::dark();

        let accent = theme.accent_text("test");
        assert!(accent.starts_with("\x1b[32m")); // Green
        assert!(accent.ends_with("\x1b[0m")); // Reset
        assert!(accent.contains("test"));

        let primary = theme.primary_text("hello");
        assert!(primary.starts_with("\x1b[37m")); // Gray
        assert!(primary.contains("hello"));
    }

    #[test]
    fn color_to_ansi_maps_standard_colors() {
        assert_eq!(color_to_ansi(Color::Green), "\x1b[32m");
        assert_eq!(color_to_ansi(Color::Red), "\x1b[31m");
        assert_eq!(color_to_ansi(Color::DarkGray), "\x1b[90m");
        assert_eq!(color_to_ansi(Color::Reset), "\x1b[0m");
    }
}
