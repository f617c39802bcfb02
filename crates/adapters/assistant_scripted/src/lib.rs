//! # hearth-adapter-assistant-scripted
//!
//! Scripted conversational assistant behind the [`ChatClient`] port.
//!
//! Instead of calling a hosted text-generation service, replies come from an
//! explicit dialogue script: each user message is matched to a recognized
//! intent keyword and answered with a fixed node. A node may embed the reveal
//! delimiter, which the application layer turns into a delayed follow-up.
//!
//! Two scenarios are scripted: routine appliance maintenance (the default
//! entry point) and a humidity alert that walks the user from a washer tip
//! toward an air-purifier recommendation.
//!
//! ## Dependency rule
//! Depends on `hearth-app` (port traits) and `hearth-domain` only.

mod script;

use std::future::Future;

use hearth_app::ports::{ChatClient, ChatTurn};
use hearth_domain::error::HearthError;

pub use script::HUMIDITY_TRIGGER;

use script::{Intent, recognize, respond};

/// Dialogue-script implementation of [`ChatClient`]. Stateless: the script
/// position is carried by the conversation itself (the keywords the UI's
/// quick-reply buttons send back).
#[derive(Default)]
pub struct ScriptedAssistant;

impl ScriptedAssistant {
    /// Create a new scripted assistant.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ChatClient for ScriptedAssistant {
    fn reply(
        &self,
        _history: &[ChatTurn],
        message: &str,
    ) -> impl Future<Output = Result<String, HearthError>> + Send {
        let intent = recognize(message);
        let text = respond(intent).to_string();
        async { Ok(text) }
    }
}
