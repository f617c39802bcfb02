//! # hearthd — hearth daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Construct repository implementations (adapters) and seed demo data
//! - Construct application services, injecting repositories via port traits
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;
mod seed;

use std::sync::Arc;

use hearth_adapter_assistant_scripted::ScriptedAssistant;
use hearth_adapter_http_axum::state::AppState;
use hearth_adapter_storage_memory::{InMemoryNotificationRepository, InMemoryTicketRepository};
use hearth_app::event_bus::InProcessEventBus;
use hearth_app::ports::NotificationRepository;
use hearth_app::services::assistant_service::AssistantService;
use hearth_app::services::fleet_service::FleetService;
use hearth_app::services::notification_service::NotificationService;
use hearth_app::services::ticket_service::TicketService;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Repositories
    let ticket_repo = InMemoryTicketRepository::default();
    let notification_repo = InMemoryNotificationRepository::default();
    for notification in seed::notifications() {
        notification_repo.create(notification).await?;
    }

    // Event bus, shared by every service that publishes
    let event_bus = Arc::new(InProcessEventBus::new(256));

    // Services
    let fleet_service = FleetService::new(seed::fleet()?, Arc::clone(&event_bus));
    let ticket_service = TicketService::new(ticket_repo, Arc::clone(&event_bus));
    let notification_service = NotificationService::new(notification_repo);
    let assistant_service = AssistantService::new(ScriptedAssistant::new());

    // HTTP
    let state = AppState::new(
        fleet_service,
        ticket_service,
        notification_service,
        assistant_service,
    );
    let app = hearth_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    tracing::info!(%bind_addr, "hearthd listening");

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install ctrl-c handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => tracing::error!(error = %err, "failed to install sigterm handler"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
