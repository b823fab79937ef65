//! Player screen rendering
//!
//! Draws the display model into four regions: the instruction header, the
//! stack and locals panes, a progress line, and the status bar, plus an
//! optional help overlay. All content comes from `DisplayUpdate`; nothing
//! here reaches back into playback state.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Gauge, List, ListItem, Paragraph};
use ratatui::Frame;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::player::DisplayUpdate;
use crate::tui::Theme;

/// Playback info shown in the status bar, separate from the frame data.
#[derive(Debug, Clone, Copy)]
pub struct StatusInfo {
    pub playing: bool,
    pub rate: u16,
    pub show_help: bool,
}

/// Draw one full screen.
pub fn draw(frame: &mut Frame, update: &DisplayUpdate, status: &StatusInfo, theme: &Theme) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // instruction header
            Constraint::Min(3),    // stack + locals
            Constraint::Length(1), // progress
            Constraint::Length(1), // status bar
        ])
        .split(area);

    render_instruction(frame, chunks[0], update, theme);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);
    render_stack(frame, panes[0], update, theme);
    render_locals(frame, panes[1], update, theme);

    render_progress(frame, chunks[2], update, theme);
    render_status(frame, chunks[3], status, theme);

    if status.show_help {
        render_help(frame, area, theme);
    }
}

fn render_instruction(frame: &mut Frame, area: Rect, update: &DisplayUpdate, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style())
        .title(Span::styled(update.position.clone(), theme.text_style()));

    let width = area.width.saturating_sub(2) as usize;
    let lines = if update.frame_number == 0 {
        vec![Line::from(Span::styled("(empty trace)", theme.dim_style()))]
    } else {
        vec![
            Line::from(vec![
                Span::styled(update.function_name.clone(), theme.accent_bold_style()),
                Span::styled(format!(" @ ip {}", update.ip), theme.dim_style()),
            ]),
            Line::from(Span::styled(
                clip(&update.instruction, width),
                theme.text_style(),
            )),
        ]
    };

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_stack(frame: &mut Frame, area: Rect, update: &DisplayUpdate, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style())
        .title(Span::styled("Stack", theme.text_style()));

    let width = area.width.saturating_sub(2) as usize;
    let items: Vec<ListItem> = if update.stack.is_empty() {
        vec![ListItem::new(Span::styled("(empty)", theme.dim_style()))]
    } else {
        update
            .stack
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                // Entries arrive top-first; highlight the top of the stack
                let style = if i == 0 {
                    theme.accent_bold_style()
                } else {
                    theme.text_style()
                };
                ListItem::new(Span::styled(clip(entry, width), style))
            })
            .collect()
    };

    frame.render_widget(List::new(items).block(block), area);
}

fn render_locals(frame: &mut Frame, area: Rect, update: &DisplayUpdate, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style())
        .title(Span::styled("Locals", theme.text_style()));

    let width = area.width.saturating_sub(2) as usize;
    let items: Vec<ListItem> = if update.locals.is_empty() {
        vec![ListItem::new(Span::styled("(none)", theme.dim_style()))]
    } else {
        update
            .locals
            .iter()
            .map(|(name, value)| {
                let value_width = width.saturating_sub(name.width() + 3);
                ListItem::new(Line::from(vec![
                    Span::styled(name.clone(), theme.accent_style()),
                    Span::styled(" = ", theme.dim_style()),
                    Span::styled(clip(value, value_width), theme.text_style()),
                ]))
            })
            .collect()
    };

    frame.render_widget(List::new(items).block(block), area);
}

fn render_progress(frame: &mut Frame, area: Rect, update: &DisplayUpdate, theme: &Theme) {
    let ratio = if update.frame_count == 0 {
        0.0
    } else {
        update.frame_number as f64 / update.frame_count as f64
    };

    let gauge = Gauge::default()
        .ratio(ratio)
        .label(Span::styled(update.position.clone(), theme.text_style()))
        .gauge_style(theme.accent_style());

    frame.render_widget(gauge, area);
}

fn render_status(frame: &mut Frame, area: Rect, status: &StatusInfo, theme: &Theme) {
    let icon = if status.playing { "\u{25b6}" } else { "\u{23f8}" };

    let mut spans = vec![
        Span::styled(format!(" {}  ", icon), theme.accent_style()),
        Span::styled("rate:", theme.dim_style()),
        Span::styled(format!("{}/s ", status.rate), theme.text_style()),
        Span::styled("\u{2502} ", theme.dim_style()),
    ];
    for (key, action) in [
        ("space", ":play/pause "),
        ("\u{2190}/\u{2192}", ":step "),
        ("home/end", ":jump "),
        ("+/-", ":rate "),
        ("?", ":help "),
        ("q", ":quit"),
    ] {
        spans.push(Span::styled(key, theme.key_hint_style()));
        spans.push(Span::styled(action, theme.dim_style()));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_help(frame: &mut Frame, area: Rect, theme: &Theme) {
    let popup = centered_rect(44, 12, area);

    let entry = |key: &str, action: &str| {
        Line::from(vec![
            Span::styled(format!("  {:<12}", key), theme.key_hint_style()),
            Span::styled(action.to_string(), theme.text_style()),
        ])
    };

    let lines = vec![
        entry("\u{2192}", "step forward one frame"),
        entry("\u{2190}", "step back one frame"),
        entry("space", "toggle auto-play"),
        entry("+ / -", "auto-play rate up/down (1-100)"),
        entry("home / end", "jump to first/last frame"),
        entry("wheel", "step forward/back"),
        entry("?", "toggle this help"),
        entry("q / esc", "quit"),
        Line::default(),
        Line::from(Span::styled("  press any key to close", theme.dim_style())),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style())
        .title(Span::styled("Keys", theme.text_style()));

    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

/// Center a fixed-size rectangle inside `area`, clamped to fit.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Truncate `text` to `max_width` display columns, ending with an ellipsis
/// when anything was cut.
fn clip(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if text.width() <= max_width {
        return text.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('\u{2026}');
    out
}
