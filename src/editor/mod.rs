//! The editor collaborator and the movement service that drives it.
//!
//! The movement model in [`crate::motion`] is pure; this module supplies
//! the mutable side. [`EditorBackend`] is the capability set vimdrill
//! needs from whatever component owns the text being navigated: read the
//! cursor, write the cursor, report buffer dimensions. [`TextBuffer`] is
//! the built-in backend the practice pane renders, and
//! [`MovementService`] bridges between the backend's 1-based coordinate
//! convention and the model's 0-based one.
//!
//! # Example
//!
//! ```
//! use vimdrill::editor::{MovementService, TextBuffer};
//! use vimdrill::motion::Direction;
//!
//! let buffer = TextBuffer::from_text("hello\nworld");
//! let mut service = MovementService::new(buffer);
//! let result = service.execute_movement(Direction::Down);
//! assert!(result.success);
//! ```

pub mod buffer;
pub mod service;

pub use buffer::TextBuffer;
pub use service::{EditorBackend, MovementService};
