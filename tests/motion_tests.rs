use vimdrill::motion::{compute_movement, Direction, EditorBounds, Position};

#[test]
fn test_up_blocked_on_top_line_regardless_of_bounds() {
    for max_line in 0..5 {
        for max_column in 0..5 {
            let bounds = EditorBounds::new(max_line, max_column);
            for column in 0..=max_column {
                let result = compute_movement(Position::new(0, column), Direction::Up, bounds);
                assert!(!result.success);
            }
        }
    }
}

#[test]
fn test_down_blocked_on_last_line() {
    let bounds = EditorBounds::new(3, 10);
    let result = compute_movement(Position::new(3, 4), Direction::Down, bounds);
    assert!(!result.success);
    assert_eq!(result.new_position, Position::new(3, 4));
}

#[test]
fn test_left_blocked_in_first_column() {
    let bounds = EditorBounds::new(3, 10);
    let result = compute_movement(Position::new(1, 0), Direction::Left, bounds);
    assert!(!result.success);
    assert_eq!(
        result.error.as_deref(),
        Some("Cannot move left: at left boundary")
    );
}

#[test]
fn test_right_blocked_in_last_column() {
    let bounds = EditorBounds::new(3, 10);
    let result = compute_movement(Position::new(1, 10), Direction::Right, bounds);
    assert!(!result.success);
    assert_eq!(
        result.error.as_deref(),
        Some("Cannot move right: at right boundary")
    );
}

#[test]
fn test_position_unchanged_on_every_failure() {
    let bounds = EditorBounds::new(2, 2);
    for line in 0..=2 {
        for column in 0..=2 {
            let position = Position::new(line, column);
            for direction in Direction::ALL {
                let result = compute_movement(position, direction, bounds);
                if !result.success {
                    assert_eq!(result.new_position, position);
                    assert!(result.error.is_some());
                }
            }
        }
    }
}

#[test]
fn test_in_bounds_moves_are_exact_unit_steps() {
    let bounds = EditorBounds::new(4, 4);
    let position = Position::new(2, 2);

    let cases = [
        (Direction::Left, Position::new(2, 1)),
        (Direction::Down, Position::new(3, 2)),
        (Direction::Up, Position::new(1, 2)),
        (Direction::Right, Position::new(2, 3)),
    ];
    for (direction, expected) in cases {
        let result = compute_movement(position, direction, bounds);
        assert!(result.success);
        assert_eq!(result.new_position, expected);
        assert_eq!(result.error, None);
    }
}

#[test]
fn test_scenario_right_from_middle() {
    // bounds (3,10), position (2,5), right -> success at (2,6)
    let result = compute_movement(
        Position::new(2, 5),
        Direction::Right,
        EditorBounds::new(3, 10),
    );
    assert!(result.success);
    assert_eq!(result.new_position, Position::new(2, 6));
    assert_eq!(result.error, None);
}

#[test]
fn test_scenario_up_from_top_line() {
    // bounds (3,10), position (0,5), up -> blocked at top
    let result = compute_movement(Position::new(0, 5), Direction::Up, EditorBounds::new(3, 10));
    assert!(!result.success);
    assert_eq!(result.new_position, Position::new(0, 5));
    assert_eq!(
        result.error.as_deref(),
        Some("Cannot move up: at top boundary")
    );
}
