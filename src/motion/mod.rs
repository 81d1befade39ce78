//! Bounded 2D cursor movement model.
//!
//! This module contains the pure movement calculator at the heart of vimdrill:
//! given a cursor position, a direction, and the bounds of the current buffer,
//! it computes where the cursor would land and whether that landing spot is
//! legal. Nothing in here touches the terminal, the buffer, or any other
//! mutable state; every input is passed explicitly and every output is a
//! fresh value, so these functions are safe to call from anywhere.
//!
//! # Modules
//!
//! - `direction`: The four movement directions and their unit vectors
//! - `model`: Positions, bounds, and the movement computation itself
//!
//! # Example
//!
//! ```
//! use vimdrill::motion::{compute_movement, Direction, EditorBounds, Position};
//!
//! let bounds = EditorBounds::new(3, 10);
//! let result = compute_movement(Position::new(2, 5), Direction::Right, bounds);
//! assert!(result.success);
//! assert_eq!(result.new_position, Position::new(2, 6));
//! ```

pub mod direction;
pub mod model;

pub use direction::Direction;
pub use model::{compute_movement, EditorBounds, MovementResult, Position};
