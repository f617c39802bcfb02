//! Assistant service — turns raw assistant replies into timed reveals.
//!
//! A reply may contain [`REVEAL_DELIMITER`], splitting it into an immediate
//! part and a follow-up the caller should reveal after a fixed pause. The
//! pause is data on the reply, not a sleep here — presentation layers own
//! their own scheduling (and can cancel it).

use std::time::Duration;

use hearth_domain::error::{HearthError, ValidationError};

use crate::ports::{ChatClient, ChatTurn, REVEAL_DELIMITER};

/// How long the UI should wait before revealing a delayed follow-up.
pub const REVEAL_DELAY: Duration = Duration::from_secs(4);

/// Shown when the chat transport fails; the conversation degrades rather
/// than erroring out.
const FALLBACK_REPLY: &str = "I'm having trouble connecting to the network. Please try again later.";

/// A processed assistant reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantReply {
    /// Shown immediately.
    pub text: String,
    /// Revealed after [`DelayedReveal::delay`], if present.
    pub followup: Option<DelayedReveal>,
}

/// The second half of a split reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelayedReveal {
    pub text: String,
    pub delay: Duration,
}

/// Application service in front of a [`ChatClient`].
pub struct AssistantService<C> {
    client: C,
}

impl<C: ChatClient> AssistantService<C> {
    /// Create a new service over the given chat transport.
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Send one user message with its prior-turn history and process the reply.
    ///
    /// Transport failures are not surfaced: the reply degrades to a canned
    /// connectivity apology, matching the product behavior.
    ///
    /// # Errors
    ///
    /// Returns [`HearthError::Validation`] when the message is blank.
    #[tracing::instrument(skip(self, history, message))]
    pub async fn send(
        &self,
        history: &[ChatTurn],
        message: &str,
    ) -> Result<AssistantReply, HearthError> {
        if message.trim().is_empty() {
            return Err(ValidationError::EmptyMessage.into());
        }

        let raw = match self.client.reply(history, message).await {
            Ok(raw) => raw,
            Err(err) => {
                tracing::warn!(error = %err, "chat client failed, degrading to canned reply");
                FALLBACK_REPLY.to_string()
            }
        };

        Ok(split_reply(&raw))
    }
}

/// Split a raw reply on the reveal delimiter.
///
/// Only the first delimiter is honored; anything after a second one stays in
/// the follow-up text.
fn split_reply(raw: &str) -> AssistantReply {
    match raw.split_once(REVEAL_DELIMITER) {
        Some((first, second)) => AssistantReply {
            text: first.trim().to_string(),
            followup: Some(DelayedReveal {
                text: second.trim().to_string(),
                delay: REVEAL_DELAY,
            }),
        },
        None => AssistantReply {
            text: raw.trim().to_string(),
            followup: None,
        },
    }
}
