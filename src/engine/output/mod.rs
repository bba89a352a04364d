// Synthetic key output
//
// - `emitter`: turns cleaned direction state into press/release calls
// - `uinput`: Linux `KeyInjector` backed by a uinput virtual keyboard

pub mod emitter;
pub mod uinput;

pub use emitter::{Emitter, KeyInjector, DEFAULT_HOLD};
pub use uinput::{UinputKeyboard, VIRTUAL_DEVICE_NAME};
