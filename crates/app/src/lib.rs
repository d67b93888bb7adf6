//! # incidenthub-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** that adapters must implement (driven/outbound
//!   port): [`ports::IncidentRepository`] — persistence for incidents
//! - Define the **driving/inbound port** as a use-case struct:
//!   [`services::incident_service::IncidentService`] — report, list, filter,
//!   update, delete
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `incidenthub-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the
//! reverse.

pub mod ports;
pub mod services;
