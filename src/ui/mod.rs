//! UI module for the vimdrill terminal interface.
//!
//! The screen is composed of four areas, top to bottom:
//!
//! - Practice view: the text buffer with the cursor cell highlighted
//! - Progress panel: score, learned motions, and a completion gauge
//! - Status line: active challenge and cursor position
//! - Message area: transient feedback ("Cannot move up: at top boundary")
//!
//! The help overlay (the command catalogue) draws on top of everything
//! when toggled.

pub mod help_overlay;
pub mod message_area;
pub mod practice_view;
pub mod progress_panel;
pub mod status_line;

use anyhow::Result;
use ratatui::backend::Backend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Terminal;

use crate::theme::Theme;
use crate::tutor::TutorState;

/// Main UI structure that manages the terminal interface rendering.
pub struct UI {
    theme: Theme,
}

impl UI {
    /// Creates a new UI instance with the specified theme.
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    /// Returns the current theme name.
    pub fn theme_name(&self) -> &str {
        &self.theme.name
    }

    /// Renders the UI to the terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal drawing fails.
    pub fn render<B: Backend>(
        &self,
        terminal: &mut Terminal<B>,
        state: &TutorState,
    ) -> Result<()> {
        terminal.draw(|f| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Min(1),    // Practice view
                    Constraint::Length(4), // Progress panel
                    Constraint::Length(1), // Status line
                    Constraint::Length(1), // Message area
                ])
                .split(f.area());

            practice_view::render_practice_view(f, chunks[0], state, &self.theme.colors);
            progress_panel::render_progress_panel(f, chunks[1], state, &self.theme.colors);
            status_line::render_status_line(f, chunks[2], state, &self.theme.colors);
            message_area::render_message_area(f, chunks[3], state, &self.theme.colors);

            if state.show_help() {
                help_overlay::render_help_overlay(f, f.area(), &self.theme.colors);
            }
        })?;

        Ok(())
    }
}
