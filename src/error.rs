// Startup error types
//
// Only backend initialization can fail. Once the tick loop is running every
// operation is infallible, so nothing past `Cleaner::new` returns these.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while bringing up the platform input/output services
#[derive(Error, Debug)]
pub enum CleanerError {
    /// No device exposes every key the cleaner needs to sample
    #[error("No keyboard found that supports all bound keys (checked {checked} devices)")]
    NoKeyboard { checked: usize },

    /// A matching device exists but could not be read
    #[error("Cannot read key state from {path}")]
    DeviceUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The uinput virtual keyboard could not be created
    #[error("Failed to create virtual keyboard: {message}")]
    VirtualDevice {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Bindings are missing a direction key
    #[error("Invalid key bindings: {message}")]
    InvalidBindings { message: String },
}

/// Result alias for cleaner startup
pub type Result<T> = std::result::Result<T, CleanerError>;

impl CleanerError {
    /// Wrap a uinput creation failure
    pub fn virtual_device(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::VirtualDevice {
            message: message.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_no_keyboard_message() {
        let err = CleanerError::NoKeyboard { checked: 3 };
        assert_eq!(
            err.to_string(),
            "No keyboard found that supports all bound keys (checked 3 devices)"
        );
    }

    #[test]
    fn test_virtual_device_keeps_source() {
        let err = CleanerError::virtual_device(
            "open /dev/uinput",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.to_string().contains("open /dev/uinput"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
