//! # hearth-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `TicketRepository` — CRUD for support tickets
//!   - `NotificationRepository` — CRUD for inbox notifications
//!   - `EventPublisher` — fan-out for activity events
//!   - `ChatClient` — transport to the conversational assistant
//! - Define **driving/inbound ports** as use-case structs:
//!   - `FleetService` — toggle devices, apply global actions and scenes
//!   - `TicketService` — submit complaints, track tickets
//!   - `NotificationService` — list, count, mark read
//!   - `AssistantService` — turn raw assistant replies into timed reveals
//! - Provide **in-process infrastructure** (event bus) that doesn't need IO
//! - Orchestrate domain objects without knowing *how* persistence or IO works
//!
//! ## Dependency rule
//! Depends on `hearth-domain` only (plus `tokio::sync` for channels).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod event_bus;
pub mod ports;
pub mod services;
