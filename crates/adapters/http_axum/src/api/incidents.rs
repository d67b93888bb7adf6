//! JSON REST handlers for incidents.
//!
//! Status-code contract, preserved for existing clients:
//! - the unfiltered list returns **404** when the collection is empty, while
//!   the two filtered queries return **204** for zero matches;
//! - `severity` is rejected with 400 when absent *or* empty, while
//!   `completed` is rejected only when absent (`completed=false` is valid);
//! - update and delete return a confirmation message, never the record.

use std::str::FromStr;

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use incidenthub_app::ports::IncidentRepository;
use incidenthub_domain::error::ValidationError;
use incidenthub_domain::id::IncidentId;
use incidenthub_domain::incident::{Incident, IncidentPatch};

use crate::error::ApiError;
use crate::state::AppState;

/// Confirmation body returned by mutation endpoints.
#[derive(Serialize)]
pub struct MessageBody {
    pub msg: &'static str,
}

/// Request body for creating an incident.
///
/// Every field is optional at the deserialization layer so that missing
/// fields surface as a 400 presence-check failure rather than a
/// deserialization rejection.
#[derive(Deserialize)]
pub struct CreateIncidentRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub user: Option<String>,
    pub severity: Option<String>,
    pub completed: Option<bool>,
}

/// Request body for updating an incident: an `id` plus a partial overwrite.
/// Unknown fields are ignored, not rejected.
#[derive(Deserialize)]
pub struct UpdateIncidentRequest {
    pub id: Option<String>,
    #[serde(flatten)]
    pub patch: IncidentPatch,
}

/// Request body for deleting an incident.
#[derive(Deserialize)]
pub struct DeleteIncidentRequest {
    pub id: Option<String>,
}

/// Query parameters for the severity filter.
#[derive(Deserialize)]
pub struct SeverityQuery {
    pub severity: Option<String>,
}

/// Query parameters for the completion-state filter.
#[derive(Deserialize)]
pub struct StateQuery {
    pub completed: Option<String>,
}

/// Possible responses from the unfiltered list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Incident>>),
    /// Empty collection. The unfiltered list maps this to 404; the filtered
    /// queries use 204 instead.
    Empty,
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
            Self::Empty => (
                StatusCode::NOT_FOUND,
                Json(MessageBody {
                    msg: "no incidents found",
                }),
            )
                .into_response(),
        }
    }
}

/// Possible responses from the filtered query endpoints.
pub enum FilterResponse {
    Ok(Json<Vec<Incident>>),
    /// Zero matches for the given filter value.
    NoMatches,
}

impl IntoResponse for FilterResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
            Self::NoMatches => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Incident>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the update endpoint.
pub enum UpdateResponse {
    Updated,
}

impl IntoResponse for UpdateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Updated => Json(MessageBody {
                msg: "update successful",
            })
            .into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    Deleted,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Deleted => Json(MessageBody {
                msg: "delete successful",
            })
            .into_response(),
        }
    }
}

/// `GET /api/incidents/get`
pub async fn list<R>(State(state): State<AppState<R>>) -> Result<ListResponse, ApiError>
where
    R: IncidentRepository + Send + Sync + 'static,
{
    let incidents = state.incident_service.list_incidents().await?;
    if incidents.is_empty() {
        return Ok(ListResponse::Empty);
    }
    Ok(ListResponse::Ok(Json(incidents)))
}

/// `GET /api/incidents/by-severity?severity=...`
pub async fn by_severity<R>(
    State(state): State<AppState<R>>,
    Query(query): Query<SeverityQuery>,
) -> Result<FilterResponse, ApiError>
where
    R: IncidentRepository + Send + Sync + 'static,
{
    let severity = query
        .severity
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ApiError::from(ValidationError::MissingSeverityParam))?;

    let incidents = state
        .incident_service
        .incidents_by_severity(&severity)
        .await?;
    if incidents.is_empty() {
        return Ok(FilterResponse::NoMatches);
    }
    Ok(FilterResponse::Ok(Json(incidents)))
}

/// `GET /api/incidents/by-state?completed=...`
pub async fn by_state<R>(
    State(state): State<AppState<R>>,
    Query(query): Query<StateQuery>,
) -> Result<FilterResponse, ApiError>
where
    R: IncidentRepository + Send + Sync + 'static,
{
    // Absent and present-but-falsy are distinct here: `completed=false`
    // must take the filter path, not the 400 path.
    let raw = query
        .completed
        .ok_or_else(|| ApiError::from(ValidationError::MissingCompletedParam))?;
    let completed = bool::from_str(&raw)
        .map_err(|_| ApiError::from(ValidationError::InvalidCompletedParam))?;

    let incidents = state
        .incident_service
        .incidents_by_state(completed)
        .await?;
    if incidents.is_empty() {
        return Ok(FilterResponse::NoMatches);
    }
    Ok(FilterResponse::Ok(Json(incidents)))
}

/// `POST /api/incidents/create`
pub async fn create<R>(
    State(state): State<AppState<R>>,
    Json(req): Json<CreateIncidentRequest>,
) -> Result<CreateResponse, ApiError>
where
    R: IncidentRepository + Send + Sync + 'static,
{
    let title = require(req.title, ValidationError::EmptyTitle)?;
    let description = require(req.description, ValidationError::EmptyDescription)?;
    let user = require(req.user, ValidationError::EmptyUser)?;
    let severity = require(req.severity, ValidationError::EmptySeverity)?;

    let mut builder = Incident::builder()
        .title(title)
        .description(description)
        .user(user)
        .severity(severity);
    if let Some(completed) = req.completed {
        builder = builder.completed(completed);
    }

    let incident = builder.build()?;
    let created = state.incident_service.report_incident(incident).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /api/incidents/update`
pub async fn update<R>(
    State(state): State<AppState<R>>,
    Json(req): Json<UpdateIncidentRequest>,
) -> Result<UpdateResponse, ApiError>
where
    R: IncidentRepository + Send + Sync + 'static,
{
    let id = parse_id(req.id)?;
    state.incident_service.update_incident(id, req.patch).await?;
    Ok(UpdateResponse::Updated)
}

/// `DELETE /api/incidents/delete`
pub async fn remove<R>(
    State(state): State<AppState<R>>,
    Json(req): Json<DeleteIncidentRequest>,
) -> Result<DeleteResponse, ApiError>
where
    R: IncidentRepository + Send + Sync + 'static,
{
    let id = parse_id(req.id)?;
    state.incident_service.delete_incident(id).await?;
    Ok(DeleteResponse::Deleted)
}

/// Presence check: a missing or empty field is rejected with the given
/// validation error.
fn require(value: Option<String>, missing: ValidationError) -> Result<String, ApiError> {
    value
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ApiError::from(missing))
}

/// Parse the `id` field shared by the update and delete bodies.
fn parse_id(id: Option<String>) -> Result<IncidentId, ApiError> {
    let raw = id
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ApiError::from(ValidationError::MissingId))?;
    IncidentId::from_str(&raw).map_err(|_| ApiError::from(ValidationError::InvalidId))
}
