use vimdrill::challenge::builtin_challenges;
use vimdrill::motion::Direction;
use vimdrill::progress::{LearningProgress, POINTS_PER_DIRECTION};

#[test]
fn test_empty_progress_defaults() {
    let progress = LearningProgress::new();
    assert!(progress.completed_directions().is_empty());
    assert_eq!(progress.current_challenge(), None);
    assert_eq!(progress.score(), 0);
    assert!(!progress.is_complete());
    assert_eq!(progress.completion_percent(), 0);
}

#[test]
fn test_failed_attempt_is_structurally_equal() {
    let progress = LearningProgress::new().record_attempt(Direction::Up, true);
    for direction in Direction::ALL {
        assert_eq!(progress.record_attempt(direction, false), progress);
    }
}

#[test]
fn test_repeating_a_direction_scores_once() {
    // Two successful lefts in a row: one entry, one helping of points.
    let progress = LearningProgress::new()
        .record_attempt(Direction::Left, true)
        .record_attempt(Direction::Left, true);
    assert_eq!(progress.completed_directions().len(), 1);
    assert!(progress.completed_directions().contains(&Direction::Left));
    assert_eq!(progress.score(), POINTS_PER_DIRECTION);
}

#[test]
fn test_score_is_monotonic_over_distinct_directions() {
    let mut progress = LearningProgress::new();
    let mut last_score = 0;
    for direction in Direction::ALL {
        progress = progress.record_attempt(direction, true);
        assert!(progress.score() >= last_score);
        last_score = progress.score();

        // Repeats never move the score.
        let repeated = progress.record_attempt(direction, true);
        assert_eq!(repeated.score(), last_score);
        assert_eq!(
            repeated.completed_directions().len(),
            progress.completed_directions().len()
        );
    }
}

#[test]
fn test_four_distinct_successes_reach_complete() {
    let mut progress = LearningProgress::new();
    for direction in Direction::ALL {
        progress = progress.record_attempt(direction, true);
    }
    assert_eq!(progress.completed_directions().len(), 4);
    assert_eq!(progress.score(), 4 * POINTS_PER_DIRECTION);
    assert!(progress.is_complete());
    assert_eq!(progress.completion_percent(), 100);
}

#[test]
fn test_first_seen_order_is_preserved() {
    let progress = LearningProgress::new()
        .record_attempt(Direction::Right, true)
        .record_attempt(Direction::Left, true)
        .record_attempt(Direction::Right, true);
    let order: Vec<Direction> = progress.completed_directions().iter().copied().collect();
    assert_eq!(order, vec![Direction::Right, Direction::Left]);
}

#[test]
fn test_challenge_advances_past_learned_directions() {
    let catalogue = builtin_challenges();
    let progress = LearningProgress::new()
        .record_attempt(Direction::Left, true)
        .record_attempt(Direction::Down, true)
        .advance_challenge(catalogue);
    assert_eq!(progress.current_challenge(), Some("move-up"));
}

#[test]
fn test_snapshot_serializes_and_restores() {
    let progress = LearningProgress::new()
        .record_attempt(Direction::Down, true)
        .record_attempt(Direction::Up, true)
        .advance_challenge(builtin_challenges());

    let json = serde_json::to_string(&progress).unwrap();
    let restored: LearningProgress = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, progress);
}

#[test]
fn test_snapshot_with_missing_fields_deserializes() {
    // Older or partial snapshots fall back to field defaults.
    let restored: LearningProgress = serde_json::from_str("{}").unwrap();
    assert_eq!(restored, LearningProgress::default());
}
