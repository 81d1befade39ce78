//! Message area rendering for transient feedback.

use crate::theme::colors::ThemeColors;
use crate::tutor::{MessageLevel, TutorState};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Renders the message area at the bottom of the screen.
///
/// Shows the pending message if there is one: boundary rejections in the
/// error color, learned-motion feedback in the success color. Empty when
/// no message is pending.
pub fn render_message_area(f: &mut Frame, area: Rect, state: &TutorState, colors: &ThemeColors) {
    let content = if let Some(message) = state.message() {
        let color = match message.level {
            MessageLevel::Error => colors.error,
            MessageLevel::Info => colors.info,
            MessageLevel::Success => colors.success,
        };
        Line::from(vec![Span::styled(
            message.text.clone(),
            Style::default().fg(color),
        )])
    } else {
        Line::from("")
    };

    let paragraph =
        Paragraph::new(content).style(Style::default().bg(colors.background).fg(colors.foreground));

    f.render_widget(paragraph, area);
}
