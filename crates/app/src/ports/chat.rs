//! Chat port — transport to the conversational assistant.

use std::future::Future;

use serde::{Deserialize, Serialize};

use hearth_domain::error::HearthError;

/// Delimiter an assistant reply may contain to split it into an immediate
/// part and a delayed follow-up. Script authors and the reply processor must
/// agree on this token.
pub const REVEAL_DELIMITER: &str = "[DELAY]";

/// Who spoke a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// One prior turn of the conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub text: String,
}

/// Outbound port for obtaining an assistant reply.
///
/// Implementations may be a scripted dialogue tree or a hosted text-generation
/// service; the application layer only sees the raw reply text.
pub trait ChatClient {
    fn reply(
        &self,
        history: &[ChatTurn],
        message: &str,
    ) -> impl Future<Output = Result<String, HearthError>> + Send;
}
