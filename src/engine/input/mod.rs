// Input handling
//
// Reads physical key state at a fixed rate and turns it into cleaner input.
//
// ## Architecture
//
// - `action`: cleaner actions, default bindings and output key mapping
// - `config`: key binding configuration and remapping
// - `sampler`: the `KeySampler` seam and per-tick sampling
// - `evdev_keys`: Linux `KeySampler` backed by `/dev/input/event*`
//
// ## Usage Example
//
// ```rust
// use engine::input::{EvdevKeyboard, KeyBindings, Sampler};
//
// let sampler = Sampler::new(KeyBindings::default());
// let mut keys = EvdevKeyboard::open(sampler.bindings())?;
//
// // Once per tick
// keys.refresh();
// let raw = sampler.sample_directions(&keys);
// ```

pub mod action;
pub mod config;
pub mod evdev_keys;
pub mod sampler;

// Re-export commonly used types
pub use action::{output_key, KeyCode};
pub use config::KeyBindings;
pub use evdev_keys::EvdevKeyboard;
pub use sampler::{KeySampler, Sampler};
