// Test doubles for the platform seams

use super::input::{KeyCode, KeySampler};
use super::output::KeyInjector;
use std::collections::HashSet;

/// Keyboard whose held keys are set directly by the test
#[derive(Debug, Default)]
pub struct FakeKeyboard {
    held: HashSet<KeyCode>,
    pub refreshes: usize,
}

impl FakeKeyboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn holding(keys: &[KeyCode]) -> Self {
        Self {
            held: keys.iter().copied().collect(),
            refreshes: 0,
        }
    }

    pub fn press(&mut self, key: KeyCode) {
        self.held.insert(key);
    }

    pub fn release(&mut self, key: KeyCode) {
        self.held.remove(&key);
    }

    pub fn release_all(&mut self) {
        self.held.clear();
    }
}

impl KeySampler for FakeKeyboard {
    fn refresh(&mut self) {
        self.refreshes += 1;
    }

    fn is_down(&self, key: KeyCode) -> bool {
        self.held.contains(&key)
    }
}

/// One call made on a `KeyInjector`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyEvent {
    Press(Vec<KeyCode>),
    Release(Vec<KeyCode>),
}

/// Injector that records every call
#[derive(Debug, Default)]
pub struct RecordingInjector {
    pub events: Vec<KeyEvent>,
}

impl RecordingInjector {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyInjector for RecordingInjector {
    fn press(&mut self, keys: &[KeyCode]) {
        self.events.push(KeyEvent::Press(keys.to_vec()));
    }

    fn release(&mut self, keys: &[KeyCode]) {
        self.events.push(KeyEvent::Release(keys.to_vec()));
    }
}
