//! JSON handlers for the conversational assistant.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use hearth_app::ports::{ChatClient, ChatTurn, EventPublisher, NotificationRepository, TicketRepository};
use hearth_app::services::assistant_service::AssistantReply;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for one chat exchange. The client carries the conversation,
/// so every request replays the prior turns.
#[derive(Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub history: Vec<ChatTurn>,
    pub message: String,
}

/// Response body for one chat exchange.
#[derive(Serialize)]
pub struct ChatResponse {
    /// Shown immediately.
    pub reply: String,
    /// Revealed after `delay_ms`, if present.
    pub followup: Option<String>,
    pub delay_ms: Option<u64>,
}

impl From<AssistantReply> for ChatResponse {
    fn from(reply: AssistantReply) -> Self {
        match reply.followup {
            Some(followup) => Self {
                reply: reply.text,
                delay_ms: Some(u64::try_from(followup.delay.as_millis()).unwrap_or(u64::MAX)),
                followup: Some(followup.text),
            },
            None => Self {
                reply: reply.text,
                followup: None,
                delay_ms: None,
            },
        }
    }
}

/// Possible responses from the chat endpoint.
pub enum ChatApiResponse {
    Ok(Json<ChatResponse>),
}

impl IntoResponse for ChatApiResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `POST /api/assistant/chat`
pub async fn chat<EP, TR, NR, CC>(
    State(state): State<AppState<EP, TR, NR, CC>>,
    Json(req): Json<ChatRequest>,
) -> Result<ChatApiResponse, ApiError>
where
    EP: EventPublisher + Send + Sync + 'static,
    TR: TicketRepository + Send + Sync + 'static,
    NR: NotificationRepository + Send + Sync + 'static,
    CC: ChatClient + Send + Sync + 'static,
{
    let reply = state
        .assistant_service
        .send(&req.history, &req.message)
        .await?;
    Ok(ChatApiResponse::Ok(Json(reply.into())))
}
