// Cleaner action definitions and default key bindings

use crate::socd::{CleaningPolicy, Direction};

/// Platform key-code identifier
pub type KeyCode = evdev::Key;

/// Something a physical key can be bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Directional input that goes through SOCD resolution
    Move(Direction),
    /// Operator key that selects a cleaning policy
    SwitchPolicy(CleaningPolicy),
}

/// Default input bindings: WASD for movement, N/L/P/T for policy switching
pub fn default_bindings() -> Vec<(KeyCode, Action)> {
    vec![
        // Movement (WASD - standard gaming layout)
        (KeyCode::KEY_A, Action::Move(Direction::Left)),
        (KeyCode::KEY_D, Action::Move(Direction::Right)),
        (KeyCode::KEY_W, Action::Move(Direction::Up)),
        (KeyCode::KEY_S, Action::Move(Direction::Down)),
        // Policy switches, checked in this order each tick
        (KeyCode::KEY_N, Action::SwitchPolicy(CleaningPolicy::Neutral)),
        (
            KeyCode::KEY_L,
            Action::SwitchPolicy(CleaningPolicy::LastInputPriority),
        ),
        (
            KeyCode::KEY_P,
            Action::SwitchPolicy(CleaningPolicy::PriorityDirection),
        ),
        (KeyCode::KEY_T, Action::SwitchPolicy(CleaningPolicy::Alternating)),
    ]
}

/// Synthetic key emitted for each cleaned direction
pub fn output_key(direction: Direction) -> KeyCode {
    match direction {
        Direction::Left => KeyCode::KEY_LEFT,
        Direction::Right => KeyCode::KEY_RIGHT,
        Direction::Up => KeyCode::KEY_UP,
        Direction::Down => KeyCode::KEY_DOWN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_default_bindings_cover_every_direction_and_policy() {
        let bindings = default_bindings();
        for direction in Direction::ALL {
            assert!(bindings
                .iter()
                .any(|(_, action)| *action == Action::Move(direction)));
        }
        for policy in CleaningPolicy::ALL {
            assert!(bindings
                .iter()
                .any(|(_, action)| *action == Action::SwitchPolicy(policy)));
        }
    }

    #[test]
    fn test_no_duplicate_keys_in_defaults() {
        let mut seen = HashSet::new();
        for (key, _) in default_bindings() {
            assert!(seen.insert(key), "Duplicate key {:?} in default bindings", key);
        }
    }

    #[test]
    fn test_output_keys_are_arrows() {
        assert_eq!(output_key(Direction::Left), KeyCode::KEY_LEFT);
        assert_eq!(output_key(Direction::Right), KeyCode::KEY_RIGHT);
        assert_eq!(output_key(Direction::Up), KeyCode::KEY_UP);
        assert_eq!(output_key(Direction::Down), KeyCode::KEY_DOWN);
    }

    #[test]
    fn test_output_keys_not_sampled() {
        let sampled: HashSet<KeyCode> = default_bindings().into_iter().map(|(k, _)| k).collect();
        for direction in Direction::ALL {
            assert!(!sampled.contains(&output_key(direction)));
        }
    }
}
