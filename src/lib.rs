//! vimdrill - A terminal trainer for vim-style cursor motions.
//!
//! vimdrill shows a practice text buffer and drills the four basic vim
//! motions (`h`, `j`, `k`, `l`). Each successfully practiced direction
//! scores points; progress persists between sessions.
//!
//! The crate is layered so the interesting parts are usable without a
//! terminal:
//!
//! - [`motion`]: the pure, bounded 2D movement model
//! - [`editor`]: the editor-backend seam and the movement service
//! - [`progress`]: the progress reducer and its key-value persistence
//! - [`challenge`]: the built-in drill catalogue
//! - [`tutor`]: session state tying the above together
//! - [`config`], [`theme`], [`input`], [`ui`]: the application chrome

pub mod challenge;
pub mod config;
pub mod editor;
pub mod input;
pub mod motion;
pub mod progress;
pub mod theme;
pub mod tutor;
pub mod ui;
