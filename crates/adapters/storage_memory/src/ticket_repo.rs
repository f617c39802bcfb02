//! In-memory ticket repository.

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Mutex, PoisonError};

use hearth_app::ports::TicketRepository;
use hearth_domain::error::HearthError;
use hearth_domain::id::TicketId;
use hearth_domain::ticket::Ticket;

/// Ticket repository backed by a mutex-guarded map.
#[derive(Default)]
pub struct InMemoryTicketRepository {
    store: Mutex<HashMap<TicketId, Ticket>>,
}

impl InMemoryTicketRepository {
    fn store(&self) -> std::sync::MutexGuard<'_, HashMap<TicketId, Ticket>> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl TicketRepository for InMemoryTicketRepository {
    fn create(&self, ticket: Ticket) -> impl Future<Output = Result<Ticket, HearthError>> + Send {
        self.store().insert(ticket.id, ticket.clone());
        async { Ok(ticket) }
    }

    fn get_by_id(
        &self,
        id: TicketId,
    ) -> impl Future<Output = Result<Option<Ticket>, HearthError>> + Send {
        let result = self.store().get(&id).cloned();
        async { Ok(result) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Ticket>, HearthError>> + Send {
        let result: Vec<Ticket> = self.store().values().cloned().collect();
        async { Ok(result) }
    }

    fn update(&self, ticket: Ticket) -> impl Future<Output = Result<Ticket, HearthError>> + Send {
        self.store().insert(ticket.id, ticket.clone());
        async { Ok(ticket) }
    }
}
