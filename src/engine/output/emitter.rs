// Emission of cleaned direction state as synthetic key events
//
// Every tick re-presses from scratch: press every held direction, wait, then
// release everything. A direction held across ticks therefore reaches
// downstream consumers as a rapid press/release flutter, not one sustained hold.

use crate::engine::input::{output_key, KeyCode};
use crate::socd::DirectionState;
use std::thread;
use std::time::Duration;

/// How long a tapped key stays down so downstream consumers register it
pub const DEFAULT_HOLD: Duration = Duration::from_millis(10);

/// Injection of synthetic key events. Infallible by contract.
pub trait KeyInjector {
    /// Assert key-down for every key
    fn press(&mut self, keys: &[KeyCode]);

    /// Assert key-up for every key
    fn release(&mut self, keys: &[KeyCode]);
}

/// Converts cleaned state into key taps on a `KeyInjector`
#[derive(Debug)]
pub struct Emitter {
    /// How long tapped keys stay down
    hold: Duration,
}

impl Emitter {
    /// Create an emitter
    pub fn new(hold: Duration) -> Self {
        Self { hold }
    }

    /// Get the hold duration
    pub fn hold(&self) -> Duration {
        self.hold
    }

    /// Emit one tick worth of cleaned state. Nothing stays asserted afterwards.
    pub fn emit(&self, cleaned: DirectionState, out: &mut impl KeyInjector) {
        let keys: Vec<KeyCode> = cleaned.held().map(output_key).collect();

        if !keys.is_empty() {
            out.press(&keys);
        }
        // The wait runs even for neutral state so tick timing stays constant
        thread::sleep(self.hold);
        if !keys.is_empty() {
            out.release(&keys);
        }
    }
}

impl Default for Emitter {
    fn default() -> Self {
        Self::new(DEFAULT_HOLD)
    }
}
