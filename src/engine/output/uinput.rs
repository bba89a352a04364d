// Linux synthetic key injection through a uinput virtual keyboard

use super::emitter::KeyInjector;
use crate::engine::input::{output_key, KeyCode};
use crate::error::{CleanerError, Result};
use crate::socd::Direction;
use evdev::uinput::{VirtualDevice, VirtualDeviceBuilder};
use evdev::{AttributeSet, EventType, InputEvent};
use log::info;

/// Name of the virtual device; the sampler skips devices with this name
pub const VIRTUAL_DEVICE_NAME: &str = "socd-cleaner virtual keyboard";

const KEY_DOWN: i32 = 1;
const KEY_UP: i32 = 0;

/// Virtual keyboard that exposes only the four output keys
pub struct UinputKeyboard {
    device: VirtualDevice,
}

impl UinputKeyboard {
    /// Create the virtual keyboard. Requires write access to `/dev/uinput`.
    pub fn create() -> Result<Self> {
        let mut keys = AttributeSet::<KeyCode>::new();
        for direction in Direction::ALL {
            keys.insert(output_key(direction));
        }

        let device = VirtualDeviceBuilder::new()
            .map_err(|e| CleanerError::virtual_device("cannot open /dev/uinput", e))?
            .name(VIRTUAL_DEVICE_NAME)
            .with_keys(&keys)
            .map_err(|e| CleanerError::virtual_device("cannot register output keys", e))?
            .build()
            .map_err(|e| CleanerError::virtual_device("cannot create device", e))?;

        info!("Created virtual keyboard \"{}\"", VIRTUAL_DEVICE_NAME);
        Ok(Self { device })
    }

    fn write(&mut self, keys: &[KeyCode], value: i32) {
        let events: Vec<InputEvent> = keys
            .iter()
            .map(|key| InputEvent::new(EventType::KEY, key.code(), value))
            .collect();
        // emit() appends the SYN_REPORT; a failed write only loses this tick
        let _ = self.device.emit(&events);
    }
}

impl KeyInjector for UinputKeyboard {
    fn press(&mut self, keys: &[KeyCode]) {
        self.write(keys, KEY_DOWN);
    }

    fn release(&mut self, keys: &[KeyCode]) {
        self.write(keys, KEY_UP);
    }
}
