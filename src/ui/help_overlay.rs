//! Help overlay: the command catalogue.

use crate::theme::colors::ThemeColors;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// The command catalogue shown in the overlay: key, what it does.
const COMMANDS: &[(&str, &str)] = &[
    ("h / Left", "move cursor one column left"),
    ("j / Down", "move cursor one line down"),
    ("k / Up", "move cursor one line up"),
    ("l / Right", "move cursor one column right"),
    ("R", "reset learned progress"),
    ("? / F1", "toggle this help"),
    ("q / Esc", "quit"),
];

/// Renders the help overlay centered over the given area.
///
/// Any key dismisses it; the input handler takes care of that.
pub fn render_help_overlay(f: &mut Frame, area: Rect, colors: &ThemeColors) {
    let width = 46.min(area.width);
    let height = (COMMANDS.len() as u16 + 4).min(area.height);
    let overlay = Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    };

    let mut lines: Vec<Line> = vec![Line::from("")];
    for (key, action) in COMMANDS {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:<10}", key),
                Style::default()
                    .fg(colors.hint)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(*action, Style::default().fg(colors.foreground)),
        ]));
    }
    lines.push(Line::from(""));

    let paragraph = Paragraph::new(lines)
        .style(Style::default().bg(colors.background).fg(colors.foreground))
        .block(Block::default().borders(Borders::ALL).title(" commands "));

    f.render_widget(Clear, overlay);
    f.render_widget(paragraph, overlay);
}
