//! # hearth-domain
//!
//! Pure domain model for the hearth smart-home companion hub.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Devices** (appliances with a three-state operating mode) and the
//!   pure rules that govern them: mode cycling, status derivation
//! - Define **Scenes** (named per-kind mode assignments) and **global actions**
//!   (fleet-wide broadcasts)
//! - Define the **Fleet** — the session-owned device registry plus the
//!   active-scene marker, mutated only through its engine operations
//! - Define **Tickets** (support complaints with keyword triage)
//! - Define **Notifications** (alerts and offers shown to the user)
//! - Define **Events** (records of fleet and ticket activity)
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod device;
pub mod event;
pub mod fleet;
pub mod notification;
pub mod scene;
pub mod ticket;
