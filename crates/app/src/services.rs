//! Application services — the use-case layer.

pub mod assistant_service;
pub mod fleet_service;
pub mod notification_service;
pub mod ticket_service;
