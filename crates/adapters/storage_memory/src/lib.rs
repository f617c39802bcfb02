//! # hearth-adapter-storage-memory
//!
//! Session-scoped in-memory repositories implementing the storage ports.
//!
//! The companion app deliberately has no database: everything lives for one
//! session and is re-seeded at startup. These repositories still sit behind
//! the port traits so a persistent adapter can replace them without touching
//! the application layer.
//!
//! ## Dependency rule
//! Depends on `hearth-app` (port traits) and `hearth-domain` only.

mod notification_repo;
mod ticket_repo;

pub use notification_repo::InMemoryNotificationRepository;
pub use ticket_repo::InMemoryTicketRepository;
