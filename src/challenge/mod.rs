//! The built-in drill catalogue.
//!
//! vimdrill ships one challenge per basic motion. Each challenge names the
//! direction it trains, the key that triggers it, and a short hint shown
//! in the practice pane. The catalogue is static; progress against it
//! lives in [`crate::progress::LearningProgress`].
//!
//! # Example
//!
//! ```
//! use vimdrill::challenge::{builtin_challenges, Challenge};
//! use vimdrill::motion::Direction;
//!
//! let catalogue = builtin_challenges();
//! assert_eq!(catalogue.len(), 4);
//! assert_eq!(catalogue[0].direction, Direction::Left);
//! ```

use crate::motion::Direction;

/// One entry in the drill catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Challenge {
    /// Stable identifier, stored in progress snapshots.
    pub id: &'static str,
    /// Title shown in the status line and progress panel.
    pub title: &'static str,
    /// The direction this challenge trains.
    pub direction: Direction,
    /// Hint shown while the challenge is active.
    pub hint: &'static str,
}

/// The four basic-motion challenges, in the vim `hjkl` order.
pub fn builtin_challenges() -> &'static [Challenge] {
    const CHALLENGES: [Challenge; 4] = [
        Challenge {
            id: "move-left",
            title: "Move left with h",
            direction: Direction::Left,
            hint: "Press h to move the cursor one column left",
        },
        Challenge {
            id: "move-down",
            title: "Move down with j",
            direction: Direction::Down,
            hint: "Press j to move the cursor one line down",
        },
        Challenge {
            id: "move-up",
            title: "Move up with k",
            direction: Direction::Up,
            hint: "Press k to move the cursor one line up",
        },
        Challenge {
            id: "move-right",
            title: "Move right with l",
            direction: Direction::Right,
            hint: "Press l to move the cursor one column right",
        },
    ];
    &CHALLENGES
}

/// Finds a challenge by its stable identifier.
pub fn find_challenge(id: &str) -> Option<&'static Challenge> {
    builtin_challenges().iter().find(|c| c.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_challenge_per_direction() {
        let catalogue = builtin_challenges();
        for direction in Direction::ALL {
            assert_eq!(
                catalogue.iter().filter(|c| c.direction == direction).count(),
                1
            );
        }
    }

    #[test]
    fn test_find_challenge_by_id() {
        assert_eq!(
            find_challenge("move-up").map(|c| c.direction),
            Some(Direction::Up)
        );
        assert!(find_challenge("move-sideways").is_none());
    }
}
