//! JSON handlers for the device fleet.

use std::str::FromStr;

use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use hearth_app::ports::{ChatClient, EventPublisher, NotificationRepository, TicketRepository};
use hearth_domain::fleet::FleetSnapshot;
use hearth_domain::id::DeviceId;
use hearth_domain::scene::GlobalAction;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for applying a global action.
#[derive(Deserialize)]
pub struct GlobalActionRequest {
    pub action: GlobalAction,
}

/// Request body for applying a scene by name.
#[derive(Deserialize)]
pub struct SceneRequest {
    pub scene: String,
}

/// Possible responses from the fleet endpoints. Every mutation returns the
/// full snapshot so the client never has to guess the new state.
pub enum SnapshotResponse {
    Ok(Json<FleetSnapshot>),
}

impl IntoResponse for SnapshotResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/fleet`
pub async fn snapshot<EP, TR, NR, CC>(
    State(state): State<AppState<EP, TR, NR, CC>>,
) -> Result<SnapshotResponse, ApiError>
where
    EP: EventPublisher + Send + Sync + 'static,
    TR: TicketRepository + Send + Sync + 'static,
    NR: NotificationRepository + Send + Sync + 'static,
    CC: ChatClient + Send + Sync + 'static,
{
    Ok(SnapshotResponse::Ok(Json(state.fleet_service.snapshot())))
}

/// `POST /api/fleet/devices/{id}/toggle`
pub async fn toggle<EP, TR, NR, CC>(
    State(state): State<AppState<EP, TR, NR, CC>>,
    Path(id): Path<String>,
) -> Result<SnapshotResponse, ApiError>
where
    EP: EventPublisher + Send + Sync + 'static,
    TR: TicketRepository + Send + Sync + 'static,
    NR: NotificationRepository + Send + Sync + 'static,
    CC: ChatClient + Send + Sync + 'static,
{
    let device_id = DeviceId::from_str(&id).map_err(|_| ApiError::invalid_id(id))?;
    let snapshot = state.fleet_service.toggle_device(device_id).await?;
    Ok(SnapshotResponse::Ok(Json(snapshot)))
}

/// `POST /api/fleet/global`
pub async fn global<EP, TR, NR, CC>(
    State(state): State<AppState<EP, TR, NR, CC>>,
    Json(req): Json<GlobalActionRequest>,
) -> Result<SnapshotResponse, ApiError>
where
    EP: EventPublisher + Send + Sync + 'static,
    TR: TicketRepository + Send + Sync + 'static,
    NR: NotificationRepository + Send + Sync + 'static,
    CC: ChatClient + Send + Sync + 'static,
{
    let snapshot = state.fleet_service.apply_global(req.action).await?;
    Ok(SnapshotResponse::Ok(Json(snapshot)))
}

/// `POST /api/fleet/scene`
pub async fn scene<EP, TR, NR, CC>(
    State(state): State<AppState<EP, TR, NR, CC>>,
    Json(req): Json<SceneRequest>,
) -> Result<SnapshotResponse, ApiError>
where
    EP: EventPublisher + Send + Sync + 'static,
    TR: TicketRepository + Send + Sync + 'static,
    NR: NotificationRepository + Send + Sync + 'static,
    CC: ChatClient + Send + Sync + 'static,
{
    let snapshot = state.fleet_service.apply_scene(&req.scene).await?;
    Ok(SnapshotResponse::Ok(Json(snapshot)))
}
