//! JSON REST API handler modules and the `/api` route table.

#[allow(clippy::missing_errors_doc)]
pub mod incidents;

use axum::Router;
use axum::routing::{delete, get, post, put};

use incidenthub_app::ports::IncidentRepository;

use crate::state::AppState;

/// Build the `/api` sub-router.
///
/// Six fixed paths, each bound to exactly one HTTP method and one handler.
/// Identifiers travel in bodies and query strings, never in path segments.
pub fn routes<R>() -> Router<AppState<R>>
where
    R: IncidentRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/incidents/get", get(incidents::list::<R>))
        .route("/incidents/by-severity", get(incidents::by_severity::<R>))
        .route("/incidents/by-state", get(incidents::by_state::<R>))
        .route("/incidents/create", post(incidents::create::<R>))
        .route("/incidents/update", put(incidents::update::<R>))
        .route("/incidents/delete", delete(incidents::remove::<R>))
}
