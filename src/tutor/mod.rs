//! Drill session state.
//!
//! This module owns everything that changes during a session: the
//! practice buffer and its cursor (through the movement service), the
//! learning progress, and the transient UI state (messages, help
//! overlay). The UI renders from it; the input handler updates it.

pub mod state;

pub use state::{Message, MessageLevel, TutorState};
