//! Progress panel: score, learned motions, and completion gauge.

use crate::motion::Direction;
use crate::theme::colors::ThemeColors;
use crate::tutor::TutorState;
use ratatui::{
    layout::{Constraint, Direction as LayoutDirection, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Renders the progress panel below the practice view.
///
/// Shows each motion key (dimmed until learned), the score, and a gauge
/// that reaches 100% once all four motions have been practiced.
pub fn render_progress_panel(f: &mut Frame, area: Rect, state: &TutorState, colors: &ThemeColors) {
    let progress = state.progress();

    let block = Block::default().borders(Borders::ALL).title(" progress ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(LayoutDirection::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(inner);

    // Row 1: the four keys, bright when learned, plus the score.
    let mut spans: Vec<Span> = Vec::new();
    for direction in Direction::ALL {
        let learned = progress.completed_directions().contains(&direction);
        let style = if learned {
            Style::default()
                .fg(colors.success)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        };
        spans.push(Span::styled(format!(" {} ", direction.key()), style));
    }
    spans.push(Span::raw("   "));
    spans.push(Span::styled(
        format!("score: {}", progress.score()),
        Style::default().fg(colors.foreground),
    ));
    if progress.is_complete() {
        spans.push(Span::styled(
            "  (complete!)",
            Style::default().fg(colors.success),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), rows[0]);

    // Row 2: completion gauge.
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(colors.gauge))
        .percent(progress.completion_percent());
    f.render_widget(gauge, rows[1]);
}
