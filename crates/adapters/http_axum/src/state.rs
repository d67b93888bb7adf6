//! Shared application state for axum handlers.

use std::sync::Arc;

use incidenthub_app::ports::IncidentRepository;
use incidenthub_app::services::incident_service::IncidentService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository type to avoid dynamic dispatch. `Clone` is
/// implemented manually so the underlying repository does not need to be
/// `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<R> {
    /// Incident CRUD and filtering service.
    pub incident_service: Arc<IncidentService<R>>,
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            incident_service: Arc::clone(&self.incident_service),
        }
    }
}

impl<R> AppState<R>
where
    R: IncidentRepository + Send + Sync + 'static,
{
    /// Create a new application state from the service instance.
    pub fn new(incident_service: IncidentService<R>) -> Self {
        Self {
            incident_service: Arc::new(incident_service),
        }
    }
}
