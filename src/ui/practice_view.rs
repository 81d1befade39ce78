//! Practice view: the text buffer with the cursor cell highlighted.

use crate::theme::colors::ThemeColors;
use crate::tutor::TutorState;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Renders the practice buffer with the cursor cell highlighted.
///
/// The cursor is drawn as a reversed-video cell at the session's current
/// position. When key hints are enabled and a challenge is active, its
/// hint is appended below the text.
pub fn render_practice_view(f: &mut Frame, area: Rect, state: &TutorState, colors: &ThemeColors) {
    let cursor = state.cursor();
    let mut lines: Vec<Line> = Vec::new();

    for (index, text) in state.buffer().lines().iter().enumerate() {
        if index as i32 == cursor.line {
            lines.push(cursor_line(text, cursor.column, colors));
        } else {
            lines.push(Line::from(Span::styled(
                text.clone(),
                Style::default().fg(colors.foreground),
            )));
        }
    }

    if state.show_key_hints() {
        if let Some(challenge) = state.current_challenge() {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                challenge.hint.to_string(),
                Style::default()
                    .fg(colors.hint)
                    .add_modifier(Modifier::ITALIC),
            )));
        }
    }

    let paragraph = Paragraph::new(lines)
        .style(Style::default().bg(colors.background).fg(colors.foreground))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" practice "),
        );

    f.render_widget(paragraph, area);
}

/// Builds the cursor's line with the cell at `column` highlighted.
fn cursor_line<'a>(text: &'a str, column: i32, colors: &ThemeColors) -> Line<'a> {
    let column = column.max(0) as usize;
    let chars: Vec<char> = text.chars().collect();
    let before: String = chars.iter().take(column).collect();
    // An empty line still shows a cursor cell.
    let cell: String = chars.get(column).map_or(" ".to_string(), |c| c.to_string());
    let after: String = chars.iter().skip(column + 1).collect();

    Line::from(vec![
        Span::styled(before, Style::default().fg(colors.foreground)),
        Span::styled(
            cell,
            Style::default()
                .bg(colors.cursor)
                .add_modifier(Modifier::REVERSED),
        ),
        Span::styled(after, Style::default().fg(colors.foreground)),
    ])
}
