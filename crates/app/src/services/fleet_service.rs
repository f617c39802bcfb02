//! Fleet service — use-cases for device control, global actions, and scenes.

use std::sync::{Mutex, PoisonError};

use hearth_domain::error::HearthError;
use hearth_domain::event::{Event, EventType};
use hearth_domain::fleet::{Fleet, FleetSnapshot};
use hearth_domain::id::DeviceId;
use hearth_domain::scene::GlobalAction;

use crate::ports::EventPublisher;

/// Application service owning the session's [`Fleet`].
///
/// The fleet sits behind a `std::sync::Mutex` so each engine operation runs
/// to completion before the next begins; the lock is never held across an
/// await point.
pub struct FleetService<P> {
    fleet: Mutex<Fleet>,
    events: P,
}

impl<P: EventPublisher> FleetService<P> {
    /// Create a new service owning the given fleet.
    pub fn new(fleet: Fleet, events: P) -> Self {
        Self {
            fleet: Mutex::new(fleet),
            events,
        }
    }

    // A poisoned lock only means another caller panicked mid-request; the
    // fleet data itself is never left in a half-mutated state.
    fn fleet(&self) -> std::sync::MutexGuard<'_, Fleet> {
        self.fleet.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Cycle one device's mode and clear the active-scene marker.
    ///
    /// Unknown device ids are tolerated as a no-op, per the engine contract.
    ///
    /// # Errors
    ///
    /// Returns an error only if event publication fails.
    #[tracing::instrument(skip(self))]
    pub async fn toggle_device(&self, id: DeviceId) -> Result<FleetSnapshot, HearthError> {
        let (event, snapshot) = {
            let mut fleet = self.fleet();
            let event = fleet.toggle(id).map(|device| {
                Event::new(
                    EventType::ModeChanged,
                    serde_json::json!({
                        "device_id": device.id,
                        "mode": device.mode,
                        "status_details": device.status_details,
                    }),
                )
            });
            (event, fleet.snapshot())
        };

        match event {
            Some(event) => self.events.publish(event).await?,
            None => tracing::debug!(%id, "toggle ignored for unknown device id"),
        }
        Ok(snapshot)
    }

    /// Broadcast one mode to every device and clear the active-scene marker.
    ///
    /// # Errors
    ///
    /// Returns an error only if event publication fails.
    #[tracing::instrument(skip(self))]
    pub async fn apply_global(&self, action: GlobalAction) -> Result<FleetSnapshot, HearthError> {
        let snapshot = {
            let mut fleet = self.fleet();
            fleet.apply_global(action);
            fleet.snapshot()
        };

        self.events
            .publish(Event::new(
                EventType::GlobalActionApplied,
                serde_json::json!({"action": action}),
            ))
            .await?;
        Ok(snapshot)
    }

    /// Apply a named scene across the fleet and set the active-scene marker.
    ///
    /// Unknown scene names degrade silently to the all-Off default; the
    /// degradation is logged but not surfaced to the caller.
    ///
    /// # Errors
    ///
    /// Returns an error only if event publication fails.
    #[tracing::instrument(skip(self))]
    pub async fn apply_scene(&self, name: &str) -> Result<FleetSnapshot, HearthError> {
        let snapshot = {
            let mut fleet = self.fleet();
            if fleet.scenes().get(name).is_none() {
                tracing::debug!(scene = name, "unknown scene, every device falls back to off");
            }
            fleet.apply_scene(name);
            fleet.snapshot()
        };

        self.events
            .publish(Event::new(
                EventType::SceneApplied,
                serde_json::json!({"scene": name}),
            ))
            .await?;
        Ok(snapshot)
    }

    /// Read-only snapshot of the fleet.
    #[must_use]
    pub fn snapshot(&self) -> FleetSnapshot {
        self.fleet().snapshot()
    }
}
