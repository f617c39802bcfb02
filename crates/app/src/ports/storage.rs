//! Storage ports — repository traits for persistence.

use std::future::Future;

use hearth_domain::error::HearthError;
use hearth_domain::id::{NotificationId, TicketId};
use hearth_domain::notification::Notification;
use hearth_domain::ticket::Ticket;

/// Repository for support tickets.
pub trait TicketRepository {
    fn create(&self, ticket: Ticket) -> impl Future<Output = Result<Ticket, HearthError>> + Send;

    fn get_by_id(
        &self,
        id: TicketId,
    ) -> impl Future<Output = Result<Option<Ticket>, HearthError>> + Send;

    fn get_all(&self) -> impl Future<Output = Result<Vec<Ticket>, HearthError>> + Send;

    fn update(&self, ticket: Ticket) -> impl Future<Output = Result<Ticket, HearthError>> + Send;
}

/// Repository for inbox notifications.
pub trait NotificationRepository {
    fn create(
        &self,
        notification: Notification,
    ) -> impl Future<Output = Result<Notification, HearthError>> + Send;

    fn get_by_id(
        &self,
        id: NotificationId,
    ) -> impl Future<Output = Result<Option<Notification>, HearthError>> + Send;

    fn get_all(&self) -> impl Future<Output = Result<Vec<Notification>, HearthError>> + Send;

    fn update(
        &self,
        notification: Notification,
    ) -> impl Future<Output = Result<Notification, HearthError>> + Send;
}
