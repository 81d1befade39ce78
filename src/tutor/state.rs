//! Session state: buffer, progress, and transient UI state.

use crate::challenge::{builtin_challenges, find_challenge, Challenge};
use crate::editor::{MovementService, TextBuffer};
use crate::motion::{Direction, MovementResult, Position};
use crate::progress::{KeyValueStore, LearningProgress, ProgressStore};

/// Severity of a transient message shown in the message area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    /// A rejected movement or other mistake.
    Error,
    /// Neutral feedback.
    Info,
    /// A newly learned motion or the completed drill.
    Success,
}

/// A transient message for the message area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// The message text.
    pub text: String,
    /// Severity, which selects the display color.
    pub level: MessageLevel,
}

impl Message {
    fn new(text: impl Into<String>, level: MessageLevel) -> Self {
        Self {
            text: text.into(),
            level,
        }
    }
}

/// The state of one drill session.
///
/// Owns the movement service (and through it the practice buffer), the
/// learning progress, and the persistence handle. All mutation happens
/// through methods here; the UI only reads.
///
/// The store is a trait object so a session can run against the file
/// store or, with `--no-persist`, an in-memory one.
pub struct TutorState {
    service: MovementService<TextBuffer>,
    progress: LearningProgress,
    store: ProgressStore<Box<dyn KeyValueStore>>,
    message: Option<Message>,
    show_help: bool,
    show_key_hints: bool,
}

impl TutorState {
    /// Creates a session over the given buffer and store.
    ///
    /// Saved progress is loaded immediately (defaults when absent or
    /// malformed) and the active challenge is pointed at the first
    /// unfinished catalogue entry.
    pub fn new(buffer: TextBuffer, store: ProgressStore<Box<dyn KeyValueStore>>) -> Self {
        let progress = store.load().advance_challenge(builtin_challenges());
        Self {
            service: MovementService::new(buffer),
            progress,
            store,
            message: None,
            show_help: false,
            show_key_hints: true,
        }
    }

    /// The practice buffer, for rendering.
    pub fn buffer(&self) -> &TextBuffer {
        self.service.editor()
    }

    /// The cursor in the movement model's 0-based coordinates.
    pub fn cursor(&self) -> Position {
        self.service.current_position()
    }

    /// The current progress snapshot.
    pub fn progress(&self) -> &LearningProgress {
        &self.progress
    }

    /// The catalogue entry for the active challenge, if any remain.
    pub fn current_challenge(&self) -> Option<&'static Challenge> {
        self.progress.current_challenge().and_then(find_challenge)
    }

    /// The pending transient message, if any.
    pub fn message(&self) -> Option<&Message> {
        self.message.as_ref()
    }

    /// Clears the pending message.
    pub fn clear_message(&mut self) {
        self.message = None;
    }

    /// Whether the help overlay is visible.
    pub fn show_help(&self) -> bool {
        self.show_help
    }

    /// Toggles the help overlay.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Whether the challenge hint line is shown.
    pub fn show_key_hints(&self) -> bool {
        self.show_key_hints
    }

    /// Enables or disables the challenge hint line.
    pub fn set_show_key_hints(&mut self, show: bool) {
        self.show_key_hints = show;
    }

    /// Executes one movement attempt and folds the outcome into progress.
    ///
    /// The movement result drives three things: the cursor (already moved
    /// by the service on success), the progress snapshot (saved whenever
    /// it changes), and the message area. A rejected movement shows the
    /// model's boundary message and changes no progress.
    pub fn attempt_move(&mut self, direction: Direction) -> MovementResult {
        let result = self.service.execute_movement(direction);

        if result.success {
            let newly_learned = !self.progress.completed_directions().contains(&direction);
            if newly_learned {
                self.progress = self
                    .progress
                    .record_attempt(direction, true)
                    .advance_challenge(builtin_challenges());
                self.store.save(&self.progress);

                if self.progress.is_complete() {
                    self.message = Some(Message::new(
                        format!(
                            "All four motions learned! Final score: {}",
                            self.progress.score()
                        ),
                        MessageLevel::Success,
                    ));
                } else {
                    self.message = Some(Message::new(
                        format!(
                            "Learned {} ({}): +{} points",
                            direction,
                            direction.key(),
                            crate::progress::POINTS_PER_DIRECTION
                        ),
                        MessageLevel::Success,
                    ));
                }
            } else {
                self.message = None;
            }
        } else if let Some(text) = &result.error {
            self.message = Some(Message::new(text.clone(), MessageLevel::Error));
        }

        result
    }

    /// Clears all learned progress, in memory and in the store.
    pub fn reset_progress(&mut self) {
        self.store.clear();
        self.progress = LearningProgress::new().advance_challenge(builtin_challenges());
        self.message = Some(Message::new("Progress reset", MessageLevel::Info));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::MemoryStore;

    fn test_state() -> TutorState {
        let store: Box<dyn KeyValueStore> = Box::new(MemoryStore::new());
        TutorState::new(TextBuffer::from_text("abc\ndef\nghi"), ProgressStore::new(store))
    }

    #[test]
    fn test_new_session_starts_on_first_challenge() {
        let state = test_state();
        assert_eq!(state.current_challenge().map(|c| c.id), Some("move-left"));
        assert_eq!(state.progress().score(), 0);
    }

    #[test]
    fn test_blocked_move_sets_error_message() {
        let mut state = test_state();
        let result = state.attempt_move(Direction::Up);
        assert!(!result.success);
        assert_eq!(
            state.message().map(|m| m.level),
            Some(MessageLevel::Error)
        );
        assert_eq!(state.progress().score(), 0);
    }

    #[test]
    fn test_successful_move_scores_once() {
        let mut state = test_state();
        state.attempt_move(Direction::Down);
        state.attempt_move(Direction::Down);
        assert_eq!(
            state.progress().score(),
            crate::progress::POINTS_PER_DIRECTION
        );
        assert_eq!(state.cursor(), Position::new(2, 0));
    }

    #[test]
    fn test_reset_clears_progress() {
        let mut state = test_state();
        state.attempt_move(Direction::Down);
        state.reset_progress();
        assert_eq!(state.progress().score(), 0);
        assert_eq!(state.current_challenge().map(|c| c.id), Some("move-left"));
    }
}
