//! Positions, bounds, and the movement computation.
//!
//! All coordinates in this module are zero-based. Positions are signed so
//! that applying a vector at the buffer edge produces an out-of-range
//! candidate (line or column −1) that the bounds check can reject, instead
//! of wrapping or panicking.
//!
//! # Example
//!
//! ```
//! use vimdrill::motion::{compute_movement, Direction, EditorBounds, Position};
//!
//! let bounds = EditorBounds::new(3, 10);
//!
//! // In-bounds movement succeeds and lands one cell over.
//! let moved = compute_movement(Position::new(2, 5), Direction::Right, bounds);
//! assert!(moved.success);
//! assert_eq!(moved.new_position, Position::new(2, 6));
//!
//! // Moving up from the top line is rejected; the position is unchanged.
//! let blocked = compute_movement(Position::new(0, 5), Direction::Up, bounds);
//! assert!(!blocked.success);
//! assert_eq!(blocked.new_position, Position::new(0, 5));
//! ```

use super::direction::Direction;

/// A cursor location in a text buffer: zero-based `(line, column)`.
///
/// Positions are plain immutable values; movement never mutates one in
/// place, it constructs a fresh candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// Zero-based line index.
    pub line: i32,
    /// Zero-based column index.
    pub column: i32,
}

impl Position {
    /// Creates a position at the given zero-based coordinates.
    pub fn new(line: i32, column: i32) -> Self {
        Self { line, column }
    }

    /// Applies a `(Δline, Δcolumn)` vector, returning the candidate position.
    ///
    /// Pure addition with no bounds checking; the result may be outside any
    /// buffer (including negative coordinates) and must be validated with
    /// [`EditorBounds::contains`] before use.
    pub fn apply(self, vector: (i32, i32)) -> Position {
        Position {
            line: self.line + vector.0,
            column: self.column + vector.1,
        }
    }
}

/// Inclusive zero-based upper bounds of the current buffer.
///
/// A snapshot of the collaborating editor's dimensions, read fresh before
/// every movement attempt. In this minimal model the column bound applies
/// to every line uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorBounds {
    /// Highest valid line index.
    pub max_line: i32,
    /// Highest valid column index.
    pub max_column: i32,
}

impl EditorBounds {
    /// Creates bounds with the given inclusive maxima.
    pub fn new(max_line: i32, max_column: i32) -> Self {
        Self {
            max_line,
            max_column,
        }
    }

    /// Returns true if `position` lies inside these bounds.
    ///
    /// Both maxima are inclusive; negative coordinates are always outside.
    ///
    /// # Examples
    ///
    /// ```
    /// use vimdrill::motion::{EditorBounds, Position};
    ///
    /// let bounds = EditorBounds::new(3, 10);
    /// assert!(bounds.contains(Position::new(0, 0)));
    /// assert!(bounds.contains(Position::new(3, 10)));
    /// assert!(!bounds.contains(Position::new(4, 0)));
    /// assert!(!bounds.contains(Position::new(0, -1)));
    /// ```
    pub fn contains(self, position: Position) -> bool {
        position.line >= 0
            && position.line <= self.max_line
            && position.column >= 0
            && position.column <= self.max_column
    }
}

/// The outcome of one movement attempt.
///
/// Boundary collisions are data, not errors: a rejected movement comes back
/// as `success == false` with `new_position` equal to the input position
/// and a human-readable message naming the boundary that was hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovementResult {
    /// Whether the cursor actually moved.
    pub success: bool,
    /// Where the cursor now is; equals the input position on failure.
    pub new_position: Position,
    /// Populated only on failure, naming the boundary that blocked the move.
    pub error: Option<String>,
}

impl MovementResult {
    /// A successful movement landing at `new_position`.
    pub fn moved(new_position: Position) -> Self {
        Self {
            success: true,
            new_position,
            error: None,
        }
    }

    /// A rejected movement: the cursor stays at `position`.
    pub fn blocked(position: Position, direction: Direction) -> Self {
        Self {
            success: false,
            new_position: position,
            error: Some(format!(
                "Cannot move {}: at {} boundary",
                direction,
                direction.boundary_name()
            )),
        }
    }
}

/// Computes the result of moving one step from `position` in `direction`.
///
/// The candidate position is the pure vector application; it is accepted
/// only if it lies within `bounds`. On rejection the result carries the
/// original position untouched and a message such as
/// `"Cannot move up: at top boundary"`.
///
/// # Examples
///
/// ```
/// use vimdrill::motion::{compute_movement, Direction, EditorBounds, Position};
///
/// let bounds = EditorBounds::new(3, 10);
/// let result = compute_movement(Position::new(0, 5), Direction::Up, bounds);
/// assert!(!result.success);
/// assert_eq!(result.new_position, Position::new(0, 5));
/// assert_eq!(
///     result.error.as_deref(),
///     Some("Cannot move up: at top boundary")
/// );
/// ```
pub fn compute_movement(
    position: Position,
    direction: Direction,
    bounds: EditorBounds,
) -> MovementResult {
    let candidate = position.apply(direction.vector());
    if bounds.contains(candidate) {
        MovementResult::moved(candidate)
    } else {
        MovementResult::blocked(position, direction)
    }
}
