//! Storage port — the repository trait for incident persistence.

use std::future::Future;

use incidenthub_domain::error::IncidentHubError;
use incidenthub_domain::id::IncidentId;
use incidenthub_domain::incident::{Incident, IncidentPatch};

/// Persistence operations required by the application layer.
///
/// Adapters implement this trait; services receive an implementation through
/// constructor injection so tests can substitute in-memory doubles. Every
/// finder returns records ordered by creation time ascending; callers rely
/// on that ordering and never re-sort.
pub trait IncidentRepository {
    /// Persist a new incident and return it.
    fn insert(
        &self,
        incident: Incident,
    ) -> impl Future<Output = Result<Incident, IncidentHubError>> + Send;

    /// All incidents, ordered by creation time ascending.
    fn find_all(&self) -> impl Future<Output = Result<Vec<Incident>, IncidentHubError>> + Send;

    /// Incidents whose severity matches exactly, ordered by creation time
    /// ascending.
    fn find_by_severity(
        &self,
        severity: &str,
    ) -> impl Future<Output = Result<Vec<Incident>, IncidentHubError>> + Send;

    /// Incidents with the given completion state, ordered by creation time
    /// ascending.
    fn find_by_completed(
        &self,
        completed: bool,
    ) -> impl Future<Output = Result<Vec<Incident>, IncidentHubError>> + Send;

    /// Apply a partial overwrite to the incident with this id.
    ///
    /// Resolves to `None` when no record matches.
    fn update(
        &self,
        id: IncidentId,
        patch: IncidentPatch,
    ) -> impl Future<Output = Result<Option<Incident>, IncidentHubError>> + Send;

    /// Delete the incident with this id.
    ///
    /// Resolves to `false` when no record matches.
    fn delete(&self, id: IncidentId)
    -> impl Future<Output = Result<bool, IncidentHubError>> + Send;
}
