//! Shared application state for axum handlers.

use std::sync::Arc;

use hearth_app::ports::{ChatClient, EventPublisher, NotificationRepository, TicketRepository};
use hearth_app::services::assistant_service::AssistantService;
use hearth_app::services::fleet_service::FleetService;
use hearth_app::services::notification_service::NotificationService;
use hearth_app::services::ticket_service::TicketService;

/// Application state shared across all axum handlers.
///
/// Generic over the event publisher, repository, and chat client types to
/// avoid dynamic dispatch. `Clone` is implemented manually so the underlying
/// types themselves do not need to be `Clone` — only the `Arc` wrappers are
/// cloned.
pub struct AppState<EP, TR, NR, CC> {
    /// Device control, global actions, and scenes.
    pub fleet_service: Arc<FleetService<EP>>,
    /// Complaint triage and ticket tracking.
    pub ticket_service: Arc<TicketService<TR, EP>>,
    /// Inbox notifications.
    pub notification_service: Arc<NotificationService<NR>>,
    /// Conversational assistant.
    pub assistant_service: Arc<AssistantService<CC>>,
}

impl<EP, TR, NR, CC> Clone for AppState<EP, TR, NR, CC> {
    fn clone(&self) -> Self {
        Self {
            fleet_service: Arc::clone(&self.fleet_service),
            ticket_service: Arc::clone(&self.ticket_service),
            notification_service: Arc::clone(&self.notification_service),
            assistant_service: Arc::clone(&self.assistant_service),
        }
    }
}

impl<EP, TR, NR, CC> AppState<EP, TR, NR, CC>
where
    EP: EventPublisher + Send + Sync + 'static,
    TR: TicketRepository + Send + Sync + 'static,
    NR: NotificationRepository + Send + Sync + 'static,
    CC: ChatClient + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        fleet_service: FleetService<EP>,
        ticket_service: TicketService<TR, EP>,
        notification_service: NotificationService<NR>,
        assistant_service: AssistantService<CC>,
    ) -> Self {
        Self {
            fleet_service: Arc::new(fleet_service),
            ticket_service: Arc::new(ticket_service),
            notification_service: Arc::new(notification_service),
            assistant_service: Arc::new(assistant_service),
        }
    }

    /// Create a new application state from pre-wrapped `Arc` services.
    ///
    /// Use this when services need to be shared with background tasks
    /// before constructing the HTTP state.
    pub fn from_arcs(
        fleet_service: Arc<FleetService<EP>>,
        ticket_service: Arc<TicketService<TR, EP>>,
        notification_service: Arc<NotificationService<NR>>,
        assistant_service: Arc<AssistantService<CC>>,
    ) -> Self {
        Self {
            fleet_service,
            ticket_service,
            notification_service,
            assistant_service,
        }
    }
}
