//! Learning progress tracking.
//!
//! A [`LearningProgress`] snapshot records which directions the user has
//! successfully practiced, which challenge is currently active, and the
//! derived score. Snapshots are immutable: every state change goes
//! through [`LearningProgress::record_attempt`], which returns a new
//! snapshot and leaves the old one untouched. That makes the reducer
//! trivially testable and lets the persistence layer treat every write
//! as a full-snapshot replace.
//!
//! Completed directions live in an [`IndexSet`], so set membership is
//! structural: repeating an already-learned motion can never add a
//! duplicate entry or inflate the score, while first-seen order is still
//! preserved for display.
//!
//! # Example
//!
//! ```
//! use vimdrill::motion::Direction;
//! use vimdrill::progress::{LearningProgress, POINTS_PER_DIRECTION};
//!
//! let progress = LearningProgress::default();
//! let progress = progress.record_attempt(Direction::Left, true);
//! assert_eq!(progress.score(), POINTS_PER_DIRECTION);
//!
//! // Repeating the same motion changes nothing.
//! let again = progress.record_attempt(Direction::Left, true);
//! assert_eq!(again.score(), POINTS_PER_DIRECTION);
//! ```

pub mod store;

pub use store::{FileStore, KeyValueStore, MemoryStore, ProgressStore};

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::challenge::Challenge;
use crate::motion::Direction;

/// Points awarded for each unique direction learned.
pub const POINTS_PER_DIRECTION: u32 = 10;

/// A snapshot of the user's learning state.
///
/// Invariant: `score` is always `completed_directions.len()` times
/// [`POINTS_PER_DIRECTION`]; a failed movement attempt never changes
/// either.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningProgress {
    #[serde(default)]
    completed_directions: IndexSet<Direction>,
    #[serde(default)]
    current_challenge: Option<String>,
    #[serde(default)]
    score: u32,
}

impl LearningProgress {
    /// Creates an empty snapshot: no directions learned, score zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// The directions learned so far, in first-seen order.
    pub fn completed_directions(&self) -> &IndexSet<Direction> {
        &self.completed_directions
    }

    /// The id of the currently active challenge, if any.
    pub fn current_challenge(&self) -> Option<&str> {
        self.current_challenge.as_deref()
    }

    /// The current score.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// True once every direction has been learned.
    pub fn is_complete(&self) -> bool {
        Direction::ALL
            .iter()
            .all(|d| self.completed_directions.contains(d))
    }

    /// Completion as a 0-100 percentage, for the progress gauge.
    pub fn completion_percent(&self) -> u16 {
        (self.completed_directions.len() * 100 / Direction::ALL.len()) as u16
    }

    /// Folds one movement attempt into a new snapshot.
    ///
    /// A failed attempt is a no-op: the returned snapshot equals `self`.
    /// A successful attempt on an already-learned direction is likewise
    /// unchanged. Only the first success per direction inserts it and
    /// recomputes the score.
    pub fn record_attempt(&self, direction: Direction, success: bool) -> LearningProgress {
        if !success || self.completed_directions.contains(&direction) {
            return self.clone();
        }
        let mut completed = self.completed_directions.clone();
        completed.insert(direction);
        let score = completed.len() as u32 * POINTS_PER_DIRECTION;
        LearningProgress {
            completed_directions: completed,
            current_challenge: self.current_challenge.clone(),
            score,
        }
    }

    /// Points `current_challenge` at the first unfinished catalogue entry.
    ///
    /// Returns a snapshot whose `current_challenge` is the id of the first
    /// challenge whose direction has not been learned yet, or `None` once
    /// the catalogue is exhausted. Completed directions and score are
    /// untouched.
    pub fn advance_challenge(&self, catalogue: &[Challenge]) -> LearningProgress {
        let next = catalogue
            .iter()
            .find(|c| !self.completed_directions.contains(&c.direction))
            .map(|c| c.id.to_string());
        LearningProgress {
            completed_directions: self.completed_directions.clone(),
            current_challenge: next,
            score: self.score,
        }
    }
}
