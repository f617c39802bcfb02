//! Event — an immutable record of something that happened.
//!
//! Events are produced when the fleet changes mode, a scene or global action
//! is applied, or a ticket is filed. They carry a free-form JSON payload so
//! subscribers can evolve independently of producers.

use serde::{Deserialize, Serialize};

use crate::id::EventId;
use crate::time::{Timestamp, now};

/// What kind of thing happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    ModeChanged,
    GlobalActionApplied,
    SceneApplied,
    TicketFiled,
}

/// An immutable activity record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub event_type: EventType,
    pub data: serde_json::Value,
    pub timestamp: Timestamp,
}

impl Event {
    /// Create a new event timestamped now.
    #[must_use]
    pub fn new(event_type: EventType, data: serde_json::Value) -> Self {
        Self {
            id: EventId::new(),
            event_type,
            data,
            timestamp: now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_assign_unique_ids_to_events() {
        let a = Event::new(EventType::ModeChanged, serde_json::json!({}));
        let b = Event::new(EventType::ModeChanged, serde_json::json!({}));
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn should_serialize_event_type_snake_case() {
        let json = serde_json::to_string(&EventType::SceneApplied).unwrap();
        assert_eq!(json, "\"scene_applied\"");
    }

    #[test]
    fn should_carry_payload_through_serde() {
        let event = Event::new(
            EventType::ModeChanged,
            serde_json::json!({"from": "OFF", "to": "ON"}),
        );
        let json = serde_json::to_string(&event).unwrap();
        let parsed: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.data["to"], "ON");
    }
}
