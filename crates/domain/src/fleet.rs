//! Fleet — the session-owned device registry and active-scene marker.
//!
//! The fleet is explicit, passed-in state (never a global), so multiple
//! sessions and tests run in isolation. It is mutated only through the three
//! engine operations below; each one runs to completion synchronously and
//! leaves every device's `status_details` consistent with its `(kind, mode)`.

use serde::{Deserialize, Serialize};

use crate::device::{Device, DeviceMode};
use crate::id::DeviceId;
use crate::scene::{GlobalAction, SceneTable};

/// The device registry plus the active-scene marker.
///
/// The marker is a pure consistency signal ("is the fleet currently in scene
/// X"); it never influences device state on its own. Any manual toggle or
/// global broadcast clears it, because manual intervention invalidates the
/// scene framing.
#[derive(Debug, Clone)]
pub struct Fleet {
    devices: Vec<Device>,
    scenes: SceneTable,
    active_scene: Option<String>,
}

/// Read-only view of the fleet handed to callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FleetSnapshot {
    pub devices: Vec<Device>,
    pub active_scene: Option<String>,
}

impl Fleet {
    /// Create a fleet from seed devices and a scene table.
    #[must_use]
    pub fn new(devices: Vec<Device>, scenes: SceneTable) -> Self {
        Self {
            devices,
            scenes,
            active_scene: None,
        }
    }

    /// Cycle one device's mode (`Off → On → Eco → Off`) and clear the
    /// active-scene marker.
    ///
    /// Unknown ids are tolerated as a no-op — devices are never removed
    /// mid-session, so a miss indicates a stale caller, not a fault. The
    /// marker is still cleared: the caller expressed a manual intent.
    ///
    /// Returns the device's new state, or `None` when the id missed.
    pub fn toggle(&mut self, id: DeviceId) -> Option<&Device> {
        self.active_scene = None;
        let device = self.devices.iter_mut().find(|d| d.id == id)?;
        device.toggle();
        Some(device)
    }

    /// Broadcast one mode to every device and clear the active-scene marker.
    ///
    /// A pure map over the registry — no per-kind variation, no ordering
    /// dependency between devices.
    pub fn apply_global(&mut self, action: GlobalAction) {
        self.active_scene = None;
        let mode = action.target_mode();
        for device in &mut self.devices {
            device.set_mode(mode);
        }
    }

    /// Apply a named scene: set the marker and assign each device the mode
    /// from the scene's per-kind table.
    ///
    /// Unknown scene names degrade silently — every device falls back to the
    /// default-Off branch and the marker is still set to the requested name.
    pub fn apply_scene(&mut self, name: &str) {
        self.active_scene = Some(name.to_string());
        match self.scenes.get(name) {
            Some(scene) => {
                let scene = scene.clone();
                for device in &mut self.devices {
                    device.set_mode(scene.mode_for(device.kind));
                }
            }
            None => {
                for device in &mut self.devices {
                    device.set_mode(DeviceMode::Off);
                }
            }
        }
    }

    /// Snapshot of all devices and the active-scene marker.
    #[must_use]
    pub fn snapshot(&self) -> FleetSnapshot {
        FleetSnapshot {
            devices: self.devices.clone(),
            active_scene: self.active_scene.clone(),
        }
    }

    /// Look up a device by id.
    #[must_use]
    pub fn device(&self, id: DeviceId) -> Option<&Device> {
        self.devices.iter().find(|d| d.id == id)
    }

    /// All registered devices, in seed order.
    #[must_use]
    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    /// The currently applied scene, if any.
    #[must_use]
    pub fn active_scene(&self) -> Option<&str> {
        self.active_scene.as_deref()
    }

    /// The scene table this fleet consults.
    #[must_use]
    pub fn scenes(&self) -> &SceneTable {
        &self.scenes
    }
}
