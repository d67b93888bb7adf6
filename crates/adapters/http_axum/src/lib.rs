//! # incidenthub-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the JSON REST API under the `/api` prefix
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into HTTP responses
//!
//! ## Route shape
//! The API uses fixed paths with one method each; identifiers travel in
//! request bodies (update/delete) and query strings (filters), never in path
//! segments. Existing clients depend on that shape.
//!
//! ## Dependency rule
//! Depends on `incidenthub-app` (for the port trait and service) and
//! `incidenthub-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
