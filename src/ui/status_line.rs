//! Status line widget for displaying session state information.
//!
//! The status line shows:
//! - The active challenge title, or DONE when the drill is complete
//! - Cursor position as 1-based line:column
//!
//! Example status line: `Move down with j                         2:5`

use crate::theme::colors::ThemeColors;
use crate::tutor::TutorState;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Renders the status line showing the active challenge and cursor position.
pub fn render_status_line(f: &mut Frame, area: Rect, state: &TutorState, colors: &ThemeColors) {
    let left = match state.current_challenge() {
        Some(challenge) => challenge.title.to_string(),
        None => "DONE - all motions learned (R to reset, q to quit)".to_string(),
    };

    let cursor = state.cursor();
    // Display as 1-based, matching what an editor would show.
    let right = format!("{}:{}", cursor.line + 1, cursor.column + 1);

    let padding = (area.width as usize)
        .saturating_sub(left.chars().count() + right.chars().count() + 2);

    let line = Line::from(vec![
        Span::raw(" "),
        Span::raw(left),
        Span::raw(" ".repeat(padding)),
        Span::raw(right),
        Span::raw(" "),
    ]);

    let paragraph = Paragraph::new(line).style(
        Style::default()
            .bg(colors.status_line_bg)
            .fg(colors.status_line_fg),
    );

    f.render_widget(paragraph, area);
}
