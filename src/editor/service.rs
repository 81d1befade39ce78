//! Movement service bridging the pure model and a live editor backend.

use crate::motion::{compute_movement, Direction, EditorBounds, MovementResult, Position};

/// The capability set vimdrill requires from an editor collaborator.
///
/// The contract follows the external editor convention: lines and columns
/// are 1-based on this boundary. [`MovementService`] is the sole
/// translator between this convention and the movement model's 0-based
/// coordinates; nothing else in the crate should convert.
///
/// Backends are injected explicitly (constructor argument), never looked
/// up ambiently.
pub trait EditorBackend {
    /// Returns the cursor as a 1-based `(line, column)` pair.
    fn cursor_position(&self) -> (i32, i32);

    /// Moves the cursor to a 1-based `(line, column)` coordinate.
    fn set_cursor_position(&mut self, line: i32, column: i32);

    /// Returns the number of lines in the buffer (0 when empty).
    fn line_count(&self) -> i32;

    /// Returns the number of columns in the given 1-based line.
    fn max_column(&self, line: i32) -> i32;
}

/// Executes movement attempts against an editor backend.
///
/// Each attempt is one synchronous read-compute-write sequence: read the
/// cursor and bounds fresh from the backend, run the movement model, and
/// write the new cursor back only when the model accepted the move. The
/// model's result is returned unchanged, so callers see 0-based
/// coordinates and the model's boundary messages.
///
/// # Example
///
/// ```
/// use vimdrill::editor::{MovementService, TextBuffer};
/// use vimdrill::motion::{Direction, Position};
///
/// let mut service = MovementService::new(TextBuffer::from_text("abc\ndef"));
/// assert_eq!(service.current_position(), Position::new(0, 0));
///
/// let result = service.execute_movement(Direction::Right);
/// assert!(result.success);
/// assert_eq!(service.current_position(), Position::new(0, 1));
///
/// // At the left edge the move is rejected and the cursor stays put.
/// let blocked = service.execute_movement(Direction::Up);
/// assert!(!blocked.success);
/// assert_eq!(service.current_position(), Position::new(0, 1));
/// ```
pub struct MovementService<E: EditorBackend> {
    editor: E,
}

impl<E: EditorBackend> MovementService<E> {
    /// Creates a service driving the given backend.
    pub fn new(editor: E) -> Self {
        Self { editor }
    }

    /// Returns a reference to the underlying backend.
    pub fn editor(&self) -> &E {
        &self.editor
    }

    /// Returns the cursor translated to the model's 0-based coordinates.
    pub fn current_position(&self) -> Position {
        let (line, column) = self.editor.cursor_position();
        Position::new(line - 1, column - 1)
    }

    /// Reads the backend's dimensions as 0-based inclusive bounds.
    ///
    /// The bounds are a fresh snapshot on every call, never cached. When
    /// the backend reports no buffer at all, the degenerate `(0, 0)`
    /// bound is returned so movement is rejected rather than crashing.
    pub fn current_bounds(&self) -> EditorBounds {
        let line_count = self.editor.line_count();
        if line_count <= 0 {
            return EditorBounds::new(0, 0);
        }
        // Column bound follows the last line's content. An empty line still
        // holds one valid cursor cell, hence the clamp to 0.
        let last_line_width = self.editor.max_column(line_count);
        EditorBounds::new(line_count - 1, (last_line_width - 1).max(0))
    }

    /// Attempts to move the cursor one step in `direction`.
    ///
    /// Boundary collisions are not errors: they come back as
    /// `success == false` results with the cursor untouched, and the
    /// caller renders the message as transient feedback. This method
    /// never fails for any [`Direction`].
    pub fn execute_movement(&mut self, direction: Direction) -> MovementResult {
        let position = self.current_position();
        let bounds = self.current_bounds();
        let result = compute_movement(position, direction, bounds);
        if result.success {
            self.editor.set_cursor_position(
                result.new_position.line + 1,
                result.new_position.column + 1,
            );
        }
        result
    }
}
