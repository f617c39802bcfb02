//! JSON handlers for inbox notifications.

use std::str::FromStr;

use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use hearth_app::ports::{ChatClient, EventPublisher, NotificationRepository, TicketRepository};
use hearth_domain::id::NotificationId;
use hearth_domain::notification::Notification;

use crate::error::ApiError;
use crate::state::AppState;

/// Response body for the inbox: the notifications plus the badge count.
#[derive(Serialize)]
pub struct InboxResponse {
    pub notifications: Vec<Notification>,
    pub unread: usize,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<InboxResponse>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the mark-read endpoint.
pub enum MarkReadResponse {
    Ok(Json<Notification>),
}

impl IntoResponse for MarkReadResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/notifications`
pub async fn list<EP, TR, NR, CC>(
    State(state): State<AppState<EP, TR, NR, CC>>,
) -> Result<ListResponse, ApiError>
where
    EP: EventPublisher + Send + Sync + 'static,
    TR: TicketRepository + Send + Sync + 'static,
    NR: NotificationRepository + Send + Sync + 'static,
    CC: ChatClient + Send + Sync + 'static,
{
    let notifications = state.notification_service.list_notifications().await?;
    let unread = state.notification_service.unread_count().await?;
    Ok(ListResponse::Ok(Json(InboxResponse {
        notifications,
        unread,
    })))
}

/// `POST /api/notifications/{id}/read`
pub async fn mark_read<EP, TR, NR, CC>(
    State(state): State<AppState<EP, TR, NR, CC>>,
    Path(id): Path<String>,
) -> Result<MarkReadResponse, ApiError>
where
    EP: EventPublisher + Send + Sync + 'static,
    TR: TicketRepository + Send + Sync + 'static,
    NR: NotificationRepository + Send + Sync + 'static,
    CC: ChatClient + Send + Sync + 'static,
{
    let notification_id = NotificationId::from_str(&id).map_err(|_| ApiError::invalid_id(id))?;
    let notification = state.notification_service.mark_read(notification_id).await?;
    Ok(MarkReadResponse::Ok(Json(notification)))
}
