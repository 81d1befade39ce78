//! Movement directions and their unit vectors.
//!
//! vimdrill teaches the four basic vim motions, one direction each:
//! `h` (left), `j` (down), `k` (up), and `l` (right). Each direction maps
//! to exactly one orthogonal unit vector on the `(line, column)` grid.
//!
//! Directions are a closed enum rather than raw key strings, so an
//! unrecognized direction cannot reach the movement model at all; the
//! "unknown key" case is handled where keys are parsed, via
//! [`Direction::from_key`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four cursor movement directions.
///
/// Each direction carries a fixed `(Δline, Δcolumn)` unit vector:
/// left and right move along the column axis, up and down along the
/// line axis.
///
/// # Examples
///
/// ```
/// use vimdrill::motion::Direction;
///
/// assert_eq!(Direction::Left.vector(), (0, -1));
/// assert_eq!(Direction::Down.vector(), (1, 0));
/// assert_eq!(Direction::Up.vector(), (-1, 0));
/// assert_eq!(Direction::Right.vector(), (0, 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Move one column left (`h`).
    Left,
    /// Move one line down (`j`).
    Down,
    /// Move one line up (`k`).
    Up,
    /// Move one column right (`l`).
    Right,
}

impl Direction {
    /// All four directions, in the vim `hjkl` order.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Down,
        Direction::Up,
        Direction::Right,
    ];

    /// Returns the `(Δline, Δcolumn)` unit vector for this direction.
    pub fn vector(self) -> (i32, i32) {
        match self {
            Direction::Left => (0, -1),
            Direction::Down => (1, 0),
            Direction::Up => (-1, 0),
            Direction::Right => (0, 1),
        }
    }

    /// Maps a vim motion key to its direction.
    ///
    /// Returns `None` for any key outside `hjkl`; callers decide whether
    /// that is an ignorable keystroke or a reportable mistake.
    ///
    /// # Examples
    ///
    /// ```
    /// use vimdrill::motion::Direction;
    ///
    /// assert_eq!(Direction::from_key('h'), Some(Direction::Left));
    /// assert_eq!(Direction::from_key('j'), Some(Direction::Down));
    /// assert_eq!(Direction::from_key('x'), None);
    /// ```
    pub fn from_key(key: char) -> Option<Direction> {
        match key {
            'h' => Some(Direction::Left),
            'j' => Some(Direction::Down),
            'k' => Some(Direction::Up),
            'l' => Some(Direction::Right),
            _ => None,
        }
    }

    /// Returns the vim key that triggers this direction.
    pub fn key(self) -> char {
        match self {
            Direction::Left => 'h',
            Direction::Down => 'j',
            Direction::Up => 'k',
            Direction::Right => 'l',
        }
    }

    /// Names the buffer boundary this direction runs into.
    ///
    /// Used to build the "Cannot move left: at left boundary" style
    /// messages shown when a movement is rejected.
    pub fn boundary_name(self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Down => "bottom",
            Direction::Up => "top",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    /// Formats the direction as the lowercase word used in messages.
    ///
    /// # Examples
    ///
    /// ```
    /// use vimdrill::motion::Direction;
    ///
    /// assert_eq!(format!("{}", Direction::Left), "left");
    /// assert_eq!(format!("{}", Direction::Up), "up");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Left => "left",
            Direction::Down => "down",
            Direction::Up => "up",
            Direction::Right => "right",
        };
        write!(f, "{}", name)
    }
}
