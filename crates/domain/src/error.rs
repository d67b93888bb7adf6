//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`IncidentHubError`] via `#[from]` at the boundary. Storage backends wrap
//! their driver errors in the opaque [`IncidentHubError::Storage`] variant so
//! the domain never names a concrete driver.

/// Top-level error for the incidenthub workspace.
#[derive(Debug, thiserror::Error)]
pub enum IncidentHubError {
    /// A presence check on incoming data failed.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// A targeted lookup or mutation matched no record.
    #[error("incident not found")]
    NotFound(#[from] NotFoundError),

    /// The persistence layer failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Presence and well-formedness checks on incoming data.
///
/// The service performs no validation beyond these checks: no length limits,
/// no severity enumeration, no type coercion guarantees.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("title is required")]
    EmptyTitle,
    #[error("description is required")]
    EmptyDescription,
    #[error("user is required")]
    EmptyUser,
    #[error("severity is required")]
    EmptySeverity,
    #[error("id is required")]
    MissingId,
    #[error("id is not a valid identifier")]
    InvalidId,
    #[error("query parameter `severity` is required")]
    MissingSeverityParam,
    #[error("query parameter `completed` is required")]
    MissingCompletedParam,
    #[error("query parameter `completed` must be `true` or `false`")]
    InvalidCompletedParam,
}

/// A lookup or targeted mutation found no matching record.
#[derive(Debug, Clone, thiserror::Error)]
#[error("no {entity} found with id {id}")]
pub struct NotFoundError {
    /// Human-readable name of the record kind.
    pub entity: &'static str,
    /// The identifier that matched nothing.
    pub id: String,
}
