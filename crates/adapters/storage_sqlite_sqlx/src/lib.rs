//! # incidenthub-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement [`incidenthub_app::ports::IncidentRepository`]
//! - Manage the `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `incidenthub-app` (for the port trait) and `incidenthub-domain`
//! (for domain types). The `app` and `domain` crates must never reference
//! this adapter.

pub mod error;
pub mod incident_repo;
pub mod pool;

pub use incident_repo::SqliteIncidentRepository;
pub use pool::{Config, Database};
