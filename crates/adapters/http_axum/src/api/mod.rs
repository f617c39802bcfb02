//! JSON API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod assistant;
#[allow(clippy::missing_errors_doc)]
pub mod fleet;
#[allow(clippy::missing_errors_doc)]
pub mod notifications;
#[allow(clippy::missing_errors_doc)]
pub mod tickets;

use axum::Router;
use axum::routing::{get, post};

use hearth_app::ports::{ChatClient, EventPublisher, NotificationRepository, TicketRepository};

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<EP, TR, NR, CC>() -> Router<AppState<EP, TR, NR, CC>>
where
    EP: EventPublisher + Send + Sync + 'static,
    TR: TicketRepository + Send + Sync + 'static,
    NR: NotificationRepository + Send + Sync + 'static,
    CC: ChatClient + Send + Sync + 'static,
{
    Router::new()
        // Fleet
        .route("/fleet", get(fleet::snapshot::<EP, TR, NR, CC>))
        .route(
            "/fleet/devices/{id}/toggle",
            post(fleet::toggle::<EP, TR, NR, CC>),
        )
        .route("/fleet/global", post(fleet::global::<EP, TR, NR, CC>))
        .route("/fleet/scene", post(fleet::scene::<EP, TR, NR, CC>))
        // Tickets
        .route(
            "/tickets",
            get(tickets::list::<EP, TR, NR, CC>).post(tickets::create::<EP, TR, NR, CC>),
        )
        .route("/tickets/{id}", get(tickets::get::<EP, TR, NR, CC>))
        .route(
            "/tickets/{id}/complete",
            post(tickets::complete::<EP, TR, NR, CC>),
        )
        // Notifications
        .route(
            "/notifications",
            get(notifications::list::<EP, TR, NR, CC>),
        )
        .route(
            "/notifications/{id}/read",
            post(notifications::mark_read::<EP, TR, NR, CC>),
        )
        // Assistant
        .route("/assistant/chat", post(assistant::chat::<EP, TR, NR, CC>))
}
