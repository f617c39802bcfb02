//! JSON handlers for support tickets.

use std::str::FromStr;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use hearth_app::ports::{ChatClient, EventPublisher, NotificationRepository, TicketRepository};
use hearth_domain::id::TicketId;
use hearth_domain::ticket::{Complaint, Ticket, TriageOutcome};

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for closing a ticket.
#[derive(Deserialize)]
pub struct CompleteTicketRequest {
    pub response: String,
}

/// Response body for a filed complaint: the stored ticket plus the triage
/// outcome the client shows immediately.
#[derive(Serialize)]
pub struct SubmitComplaintResponse {
    pub ticket: Ticket,
    pub triage: TriageOutcome,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Ticket>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get and complete endpoints.
pub enum GetResponse {
    Ok(Json<Ticket>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<SubmitComplaintResponse>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// `GET /api/tickets`
pub async fn list<EP, TR, NR, CC>(
    State(state): State<AppState<EP, TR, NR, CC>>,
) -> Result<ListResponse, ApiError>
where
    EP: EventPublisher + Send + Sync + 'static,
    TR: TicketRepository + Send + Sync + 'static,
    NR: NotificationRepository + Send + Sync + 'static,
    CC: ChatClient + Send + Sync + 'static,
{
    let tickets = state.ticket_service.list_tickets().await?;
    Ok(ListResponse::Ok(Json(tickets)))
}

/// `GET /api/tickets/{id}`
pub async fn get<EP, TR, NR, CC>(
    State(state): State<AppState<EP, TR, NR, CC>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    EP: EventPublisher + Send + Sync + 'static,
    TR: TicketRepository + Send + Sync + 'static,
    NR: NotificationRepository + Send + Sync + 'static,
    CC: ChatClient + Send + Sync + 'static,
{
    let ticket_id = TicketId::from_str(&id).map_err(|_| ApiError::invalid_id(id))?;
    let ticket = state.ticket_service.get_ticket(ticket_id).await?;
    Ok(GetResponse::Ok(Json(ticket)))
}

/// `POST /api/tickets`
pub async fn create<EP, TR, NR, CC>(
    State(state): State<AppState<EP, TR, NR, CC>>,
    Json(complaint): Json<Complaint>,
) -> Result<CreateResponse, ApiError>
where
    EP: EventPublisher + Send + Sync + 'static,
    TR: TicketRepository + Send + Sync + 'static,
    NR: NotificationRepository + Send + Sync + 'static,
    CC: ChatClient + Send + Sync + 'static,
{
    let (ticket, triage) = state.ticket_service.submit_complaint(complaint).await?;
    Ok(CreateResponse::Created(Json(SubmitComplaintResponse {
        ticket,
        triage,
    })))
}

/// `POST /api/tickets/{id}/complete`
pub async fn complete<EP, TR, NR, CC>(
    State(state): State<AppState<EP, TR, NR, CC>>,
    Path(id): Path<String>,
    Json(req): Json<CompleteTicketRequest>,
) -> Result<GetResponse, ApiError>
where
    EP: EventPublisher + Send + Sync + 'static,
    TR: TicketRepository + Send + Sync + 'static,
    NR: NotificationRepository + Send + Sync + 'static,
    CC: ChatClient + Send + Sync + 'static,
{
    let ticket_id = TicketId::from_str(&id).map_err(|_| ApiError::invalid_id(id))?;
    let ticket = state
        .ticket_service
        .complete_ticket(ticket_id, req.response)
        .await?;
    Ok(GetResponse::Ok(Json(ticket)))
}
