//! Device — an appliance with a three-state operating mode.
//!
//! A device's `status_details` is derived state: it must always equal
//! [`status_label`]`(kind, mode)`. The struct keeps that invariant by routing
//! every mode change through [`Device::set_mode`].

pub mod mode;
pub mod status;

use serde::{Deserialize, Serialize};

use crate::error::{HearthError, ValidationError};
use crate::id::DeviceId;

pub use mode::DeviceMode;
pub use status::status_label;

/// Kind of appliance. Closed enumeration — adding a kind requires extending
/// the status table, which the compiler enforces through exhaustive matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeviceKind {
    Ac,
    Washer,
    Fridge,
    Tv,
}

impl std::fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ac => f.write_str("AC"),
            Self::Washer => f.write_str("WASHER"),
            Self::Fridge => f.write_str("FRIDGE"),
            Self::Tv => f.write_str("TV"),
        }
    }
}

/// A registered appliance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Device {
    pub id: DeviceId,
    pub name: String,
    pub kind: DeviceKind,
    pub mode: DeviceMode,
    /// Derived display label, always consistent with `(kind, mode)`.
    pub status_details: String,
    /// Display-only consumption figure; never recomputed by the engines.
    pub energy: String,
}

impl Device {
    /// Create a builder for constructing a [`Device`].
    #[must_use]
    pub fn builder() -> DeviceBuilder {
        DeviceBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`HearthError::Validation`] when `name` is empty.
    pub fn validate(&self) -> Result<(), HearthError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        Ok(())
    }

    /// Switch the device into `mode`, re-deriving `status_details` in the
    /// same step so the invariant holds at every observable point.
    pub fn set_mode(&mut self, mode: DeviceMode) {
        self.mode = mode;
        self.status_details = status_label(self.kind, mode).to_string();
    }

    /// Advance the device one step along the toggle cycle.
    pub fn toggle(&mut self) {
        self.set_mode(self.mode.next());
    }
}

/// Step-by-step builder for [`Device`].
#[derive(Debug, Default)]
pub struct DeviceBuilder {
    id: Option<DeviceId>,
    name: Option<String>,
    kind: Option<DeviceKind>,
    mode: DeviceMode,
    energy: Option<String>,
}

impl DeviceBuilder {
    #[must_use]
    pub fn id(mut self, id: DeviceId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn kind(mut self, kind: DeviceKind) -> Self {
        self.kind = Some(kind);
        self
    }

    #[must_use]
    pub fn mode(mut self, mode: DeviceMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn energy(mut self, energy: impl Into<String>) -> Self {
        self.energy = Some(energy.into());
        self
    }

    /// Consume the builder, validate, and return a [`Device`] whose
    /// `status_details` is derived from the chosen kind and mode.
    ///
    /// # Errors
    ///
    /// Returns [`HearthError::Validation`] if `name` is missing or empty,
    /// or if no kind was chosen.
    pub fn build(self) -> Result<Device, HearthError> {
        let kind = self.kind.ok_or(ValidationError::MissingKind)?;
        let device = Device {
            id: self.id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            kind,
            mode: self.mode,
            status_details: status_label(kind, self.mode).to_string(),
            energy: self.energy.unwrap_or_else(|| "0.0 kWh".to_string()),
        };
        device.validate()?;
        Ok(device)
    }
}
