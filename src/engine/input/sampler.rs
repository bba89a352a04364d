// Level sampling of bound keys into direction state and policy requests

use super::action::KeyCode;
use super::config::KeyBindings;
use crate::socd::{CleaningPolicy, Direction, DirectionState};

/// Read-only query of physical key state
pub trait KeySampler {
    /// Take a fresh snapshot of key state. Called once at the start of every tick.
    fn refresh(&mut self) {}

    /// True iff the key is physically held. Read failures count as not held.
    fn is_down(&self, key: KeyCode) -> bool;
}

/// Turns raw key state into cleaner input using the active bindings
#[derive(Debug, Clone, Default)]
pub struct Sampler {
    bindings: KeyBindings,
}

impl Sampler {
    /// Create a sampler for a set of bindings
    pub fn new(bindings: KeyBindings) -> Self {
        Self { bindings }
    }

    /// Get the bindings
    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    /// Policies whose switch key is held, in check order.
    ///
    /// Every held switch is reported; the caller applies them in order so
    /// the last one checked wins.
    pub fn held_switches(&self, keys: &impl KeySampler) -> Vec<CleaningPolicy> {
        CleaningPolicy::ALL
            .into_iter()
            .filter(|policy| self.any_down(keys, self.bindings.switch_keys(*policy)))
            .collect()
    }

    /// Sample the four directions. A direction is held if any of its keys is down.
    pub fn sample_directions(&self, keys: &impl KeySampler) -> DirectionState {
        let mut state = DirectionState::default();
        for direction in Direction::ALL {
            if self.any_down(keys, self.bindings.direction_keys(direction)) {
                state.set(direction, true);
            }
        }
        state
    }

    fn any_down(&self, keys: &impl KeySampler, bound: &[KeyCode]) -> bool {
        bound.iter().any(|key| keys.is_down(*key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::input::action::Action;
    use crate::engine::testing::FakeKeyboard;

    #[test]
    fn test_nothing_held() {
        let sampler = Sampler::default();
        let keys = FakeKeyboard::new();
        assert_eq!(sampler.sample_directions(&keys), DirectionState::NEUTRAL);
        assert!(sampler.held_switches(&keys).is_empty());
    }

    #[test]
    fn test_sample_directions() {
        let sampler = Sampler::default();
        let keys = FakeKeyboard::holding(&[KeyCode::KEY_A, KeyCode::KEY_D, KeyCode::KEY_S]);

        let state = sampler.sample_directions(&keys);
        assert_eq!(
            state,
            DirectionState::from_held(&[Direction::Left, Direction::Right, Direction::Down])
        );
    }

    #[test]
    fn test_unbound_keys_ignored() {
        let sampler = Sampler::default();
        let keys = FakeKeyboard::holding(&[KeyCode::KEY_LEFT, KeyCode::KEY_Q]);
        assert!(sampler.sample_directions(&keys).is_neutral());
    }

    #[test]
    fn test_any_bound_key_holds_direction() {
        let mut bindings = KeyBindings::default();
        bindings.bind(KeyCode::KEY_H, Action::Move(Direction::Left));
        let sampler = Sampler::new(bindings);

        let keys = FakeKeyboard::holding(&[KeyCode::KEY_H]);
        assert!(sampler.sample_directions(&keys).left);
    }

    #[test]
    fn test_held_switches_in_check_order() {
        let sampler = Sampler::default();
        let keys = FakeKeyboard::holding(&[KeyCode::KEY_T, KeyCode::KEY_N, KeyCode::KEY_P]);

        assert_eq!(
            sampler.held_switches(&keys),
            vec![
                CleaningPolicy::Neutral,
                CleaningPolicy::PriorityDirection,
                CleaningPolicy::Alternating,
            ]
        );
    }
}
