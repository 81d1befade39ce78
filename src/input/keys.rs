//! Keyboard event mapping and input event types.

use crate::motion::Direction;
use termion::event::{Event, Key};

/// High-level input events abstracted from raw keyboard input.
///
/// These events represent user intentions (quit, move the cursor, open
/// help) rather than specific key presses, so the handler and tests can
/// work without touching termion types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// User wants to quit the trainer
    Quit,
    /// Move the cursor one step in a direction
    Move(Direction),
    /// Toggle the help overlay (command catalogue)
    Help,
    /// Reset all learned progress
    ResetProgress,
    /// Unknown or unmapped key
    Unknown,
}

/// Maps a termion Event to an InputEvent.
///
/// The drill is modeless: `hjkl` and the arrow keys move, `?` and F1
/// show the command catalogue, `R` resets progress, and `q`, Esc, or
/// Ctrl-c quit.
///
/// # Example
///
/// ```
/// use termion::event::{Event, Key};
/// use vimdrill::input::keys::{map_key_event, InputEvent};
/// use vimdrill::motion::Direction;
///
/// let event = Event::Key(Key::Char('j'));
/// assert_eq!(map_key_event(event), InputEvent::Move(Direction::Down));
/// ```
pub fn map_key_event(event: Event) -> InputEvent {
    // We only care about key events
    let key = match event {
        Event::Key(k) => k,
        _ => return InputEvent::Unknown,
    };

    match key {
        Key::Char('q') | Key::Esc | Key::Ctrl('c') => InputEvent::Quit,
        Key::Char('h') | Key::Left => InputEvent::Move(Direction::Left),
        Key::Char('j') | Key::Down => InputEvent::Move(Direction::Down),
        Key::Char('k') | Key::Up => InputEvent::Move(Direction::Up),
        Key::Char('l') | Key::Right => InputEvent::Move(Direction::Right),
        Key::Char('?') | Key::F(1) => InputEvent::Help,
        Key::Char('R') => InputEvent::ResetProgress,
        _ => InputEvent::Unknown,
    }
}
