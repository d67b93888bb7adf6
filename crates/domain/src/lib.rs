//! # incidenthub-domain
//!
//! Pure domain model for the incidenthub incident tracker.
//!
//! ## Responsibilities
//! - Foundational types: the typed incident identifier, error conventions,
//!   timestamps
//! - Define the **Incident** record (title, description, reporting user,
//!   severity, completion state) and its creation defaults
//! - Define the **IncidentPatch** partial-overwrite type used by updates
//! - Contain all invariant enforcement (presence checks on required fields)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod incident;
pub mod time;
