// Linux key-state sampling through evdev
//
// Devices are opened read-only and never grabbed, so the physical keys keep
// reaching applications. Key state is a level query (EVIOCGKEY), which matches
// the fixed-rate sampling model: no event queue is drained.

use super::action::KeyCode;
use super::config::KeyBindings;
use super::sampler::KeySampler;
use crate::engine::output::VIRTUAL_DEVICE_NAME;
use crate::error::{CleanerError, Result};
use evdev::Device;
use log::{debug, info};
use std::collections::HashSet;
use std::path::PathBuf;

/// Every keyboard that exposes all bound keys, polled as one
pub struct EvdevKeyboard {
    devices: Vec<(PathBuf, Device)>,

    /// Keys found down during the last `refresh`
    held: HashSet<KeyCode>,
}

impl EvdevKeyboard {
    /// Open every qualifying keyboard under `/dev/input`.
    ///
    /// Fails if none qualifies or if a qualifying device cannot be read.
    pub fn open(bindings: &KeyBindings) -> Result<Self> {
        let required = bindings.all_keys();
        let mut checked = 0;
        let mut devices = Vec::new();

        for (path, device) in evdev::enumerate() {
            checked += 1;
            let supports = |key: KeyCode| {
                device
                    .supported_keys()
                    .map_or(false, |keys| keys.contains(key))
            };
            if !qualifies(device.name(), supports, &required) {
                debug!("Skipping input device {}", path.display());
                continue;
            }

            device
                .get_key_state()
                .map_err(|source| CleanerError::DeviceUnreadable {
                    path: path.clone(),
                    source,
                })?;

            info!(
                "Sampling keys from {} ({})",
                path.display(),
                device.name().unwrap_or("unnamed")
            );
            devices.push((path, device));
        }

        if devices.is_empty() {
            return Err(CleanerError::NoKeyboard { checked });
        }

        Ok(Self {
            devices,
            held: HashSet::new(),
        })
    }

    /// Number of keyboards being sampled
    pub fn device_count(&self) -> usize {
        self.devices.len()
    }
}

impl KeySampler for EvdevKeyboard {
    fn refresh(&mut self) {
        self.held.clear();
        for (_, device) in &self.devices {
            // A device that vanished mid-run just stops contributing keys
            if let Ok(state) = device.get_key_state() {
                self.held.extend(state.iter());
            }
        }
    }

    fn is_down(&self, key: KeyCode) -> bool {
        self.held.contains(&key)
    }
}

/// A device is sampled if it supports every required key and is not the
/// cleaner's own virtual keyboard (which would feed output back into input).
fn qualifies(name: Option<&str>, supports: impl Fn(KeyCode) -> bool, required: &[KeyCode]) -> bool {
    if name == Some(VIRTUAL_DEVICE_NAME) {
        return false;
    }
    !required.is_empty() && required.iter().all(|key| supports(*key))
}
