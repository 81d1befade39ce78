//! Input event handler for polling and processing keyboard events.

use super::keys::{map_key_event, InputEvent};
use crate::tutor::TutorState;
use anyhow::Result;
use std::io::{self, Stdin};
use std::time::Duration;
use termion::event::Event;
use termion::input::{Events, TermRead};

/// Handles terminal input events and updates session state.
///
/// The InputHandler polls for termion events and converts them to
/// high-level InputEvents, then updates the tutor state accordingly.
/// The events iterator is stored so its position in the input buffer
/// survives across polls, preventing character loss during rapid input.
pub struct InputHandler {
    events: Events<Stdin>,
}

impl InputHandler {
    /// Creates a new InputHandler that reads from stdin.
    pub fn new() -> Self {
        Self {
            events: io::stdin().events(),
        }
    }

    /// Polls for a terminal event.
    ///
    /// Returns Some(Event) if an event occurred, None otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the event system fails
    pub fn poll_event(&mut self, _timeout: Duration) -> Result<Option<Event>> {
        if let Some(event_result) = self.events.next() {
            return Ok(Some(event_result?));
        }
        Ok(None)
    }

    /// Handles a terminal event and updates session state.
    ///
    /// Returns Ok(true) if the application should quit, Ok(false)
    /// otherwise.
    pub fn handle_event(&mut self, event: Event, state: &mut TutorState) -> Result<bool> {
        let input_event = map_key_event(event);

        // While the help overlay is up, any mapped key just dismisses it.
        if state.show_help() {
            match input_event {
                InputEvent::Quit => return Ok(true),
                InputEvent::Unknown => return Ok(false),
                _ => {
                    state.toggle_help();
                    return Ok(false);
                }
            }
        }

        match input_event {
            InputEvent::Quit => return Ok(true),
            InputEvent::Move(direction) => {
                state.attempt_move(direction);
            }
            InputEvent::Help => state.toggle_help(),
            InputEvent::ResetProgress => state.reset_progress(),
            InputEvent::Unknown => {}
        }

        Ok(false)
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
