//! Ticket service — use-cases for the support flow.

use hearth_domain::error::{HearthError, NotFoundError};
use hearth_domain::event::{Event, EventType};
use hearth_domain::id::TicketId;
use hearth_domain::ticket::{Complaint, Ticket, TriageOutcome, triage};

use crate::ports::{EventPublisher, TicketRepository};

/// Application service for complaint triage and ticket tracking.
pub struct TicketService<R, P> {
    repo: R,
    events: P,
}

impl<R: TicketRepository, P: EventPublisher> TicketService<R, P> {
    /// Create a new service backed by the given repository and event bus.
    pub fn new(repo: R, events: P) -> Self {
        Self { repo, events }
    }

    /// Triage a complaint and file the resulting ticket.
    ///
    /// # Errors
    ///
    /// Returns [`HearthError::Validation`] if the complaint is empty, or a
    /// storage error propagated from the repository.
    #[tracing::instrument(skip(self, complaint), fields(device = %complaint.device))]
    pub async fn submit_complaint(
        &self,
        complaint: Complaint,
    ) -> Result<(Ticket, TriageOutcome), HearthError> {
        complaint.validate()?;
        let outcome = triage(&complaint);
        let ticket = self.repo.create(Ticket::file(&complaint, &outcome)).await?;

        self.events
            .publish(Event::new(
                EventType::TicketFiled,
                serde_json::json!({
                    "ticket_id": ticket.id,
                    "priority": ticket.priority,
                }),
            ))
            .await?;

        Ok((ticket, outcome))
    }

    /// Look up a ticket by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`HearthError::NotFound`] when no ticket with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_ticket(&self, id: TicketId) -> Result<Ticket, HearthError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Ticket",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// List all tickets, newest first.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_tickets(&self) -> Result<Vec<Ticket>, HearthError> {
        let mut tickets = self.repo.get_all().await?;
        tickets.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(tickets)
    }

    /// Close a ticket with a final response to the customer.
    ///
    /// # Errors
    ///
    /// Returns [`HearthError::NotFound`] if the ticket does not exist,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self, response))]
    pub async fn complete_ticket(
        &self,
        id: TicketId,
        response: String,
    ) -> Result<Ticket, HearthError> {
        let mut ticket = self.get_ticket(id).await?;
        ticket.complete(response);
        self.repo.update(ticket).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::future::Future;
    use std::sync::Mutex;

    use hearth_domain::error::ValidationError;
    use hearth_domain::ticket::{TicketPriority, TicketStatus};

    struct InMemoryTicketRepo {
        store: Mutex<HashMap<TicketId, Ticket>>,
    }

    impl Default for InMemoryTicketRepo {
        fn default() -> Self {
            Self {
                store: Mutex::new(HashMap::new()),
            }
        }
    }

    impl TicketRepository for InMemoryTicketRepo {
        fn create(&self, ticket: Ticket) -> impl Future<Output = Result<Ticket, HearthError>> + Send {
            let mut store = self.store.lock().unwrap();
            store.insert(ticket.id, ticket.clone());
            async { Ok(ticket) }
        }

        fn get_by_id(
            &self,
            id: TicketId,
        ) -> impl Future<Output = Result<Option<Ticket>, HearthError>> + Send {
            let store = self.store.lock().unwrap();
            let result = store.get(&id).cloned();
            async { Ok(result) }
        }

        fn get_all(&self) -> impl Future<Output = Result<Vec<Ticket>, HearthError>> + Send {
            let store = self.store.lock().unwrap();
            let result: Vec<Ticket> = store.values().cloned().collect();
            async { Ok(result) }
        }

        fn update(&self, ticket: Ticket) -> impl Future<Output = Result<Ticket, HearthError>> + Send {
            let mut store = self.store.lock().unwrap();
            store.insert(ticket.id, ticket.clone());
            async { Ok(ticket) }
        }
    }

    struct NullPublisher;

    impl EventPublisher for NullPublisher {
        fn publish(&self, _event: Event) -> impl Future<Output = Result<(), HearthError>> + Send {
            async { Ok(()) }
        }
    }

    fn make_service() -> TicketService<InMemoryTicketRepo, NullPublisher> {
        TicketService::new(InMemoryTicketRepo::default(), NullPublisher)
    }

    fn washer_complaint(description: &str) -> Complaint {
        Complaint {
            device: "Smart Washer".to_string(),
            issues: vec![],
            description: description.to_string(),
        }
    }

    #[tokio::test]
    async fn should_file_ticket_for_valid_complaint() {
        let svc = make_service();
        let (ticket, outcome) = svc
            .submit_complaint(washer_complaint("Loud noise during spin"))
            .await
            .unwrap();

        assert_eq!(ticket.status, TicketStatus::Received);
        assert_eq!(outcome.priority, TicketPriority::Medium);

        let fetched = svc.get_ticket(ticket.id).await.unwrap();
        assert_eq!(fetched.issue, "Loud noise during spin");
    }

    #[tokio::test]
    async fn should_mark_leaks_severe_on_submission() {
        let svc = make_service();
        let (ticket, _) = svc
            .submit_complaint(washer_complaint("Water leaking everywhere"))
            .await
            .unwrap();
        assert_eq!(ticket.priority, TicketPriority::Severe);
    }

    #[tokio::test]
    async fn should_reject_empty_complaint() {
        let svc = make_service();
        let result = svc.submit_complaint(washer_complaint("  ")).await;
        assert!(matches!(
            result,
            Err(HearthError::Validation(ValidationError::EmptyComplaint))
        ));
    }

    #[tokio::test]
    async fn should_return_not_found_for_missing_ticket() {
        let svc = make_service();
        let result = svc.get_ticket(TicketId::new()).await;
        assert!(matches!(result, Err(HearthError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_list_tickets_newest_first() {
        let svc = make_service();
        let (first, _) = svc
            .submit_complaint(washer_complaint("Loud noise"))
            .await
            .unwrap();
        let (second, _) = svc
            .submit_complaint(washer_complaint("Door stuck"))
            .await
            .unwrap();

        let all = svc.list_tickets().await.unwrap();
        assert_eq!(all.len(), 2);
        assert!(all[0].created_at >= all[1].created_at);
        assert!(all.iter().any(|t| t.id == first.id));
        assert!(all.iter().any(|t| t.id == second.id));
    }

    #[tokio::test]
    async fn should_complete_ticket_with_response() {
        let svc = make_service();
        let (ticket, _) = svc
            .submit_complaint(washer_complaint("Loud noise"))
            .await
            .unwrap();

        let closed = svc
            .complete_ticket(ticket.id, "Bearing replaced.".to_string())
            .await
            .unwrap();
        assert_eq!(closed.status, TicketStatus::Completed);
        assert_eq!(closed.response.as_deref(), Some("Bearing replaced."));
    }

    #[tokio::test]
    async fn should_publish_ticket_filed_event() {
        let bus = std::sync::Arc::new(crate::event_bus::InProcessEventBus::new(16));
        let mut rx = bus.subscribe();
        let svc = TicketService::new(InMemoryTicketRepo::default(), std::sync::Arc::clone(&bus));

        let (ticket, _) = svc
            .submit_complaint(washer_complaint("Loud noise"))
            .await
            .unwrap();

        let event = rx.recv().await.unwrap();
        assert_eq!(event.event_type, EventType::TicketFiled);
        assert_eq!(event.data["ticket_id"], serde_json::json!(ticket.id));
    }
}
