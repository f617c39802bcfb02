//! Device mode — the three-state operating cycle.

use serde::{Deserialize, Serialize};

/// Operating mode of a device.
///
/// Modes form a closed cycle driven by manual toggling:
/// `Off → On → Eco → Off`. There is no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeviceMode {
    On,
    #[default]
    Off,
    Eco,
}

impl DeviceMode {
    /// The next mode in the toggle cycle.
    ///
    /// Total over the enumeration — the exhaustive match guarantees at
    /// compile time that every mode has a successor.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Off => Self::On,
            Self::On => Self::Eco,
            Self::Eco => Self::Off,
        }
    }

    /// Whether the device is drawing power in this mode.
    #[must_use]
    pub fn is_running(self) -> bool {
        !matches!(self, Self::Off)
    }
}

impl std::fmt::Display for DeviceMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::On => f.write_str("ON"),
            Self::Off => f.write_str("OFF"),
            Self::Eco => f.write_str("ECO"),
        }
    }
}
