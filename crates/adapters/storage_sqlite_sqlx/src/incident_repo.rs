//! `SQLite` implementation of [`IncidentRepository`].

use std::str::FromStr;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use incidenthub_app::ports::IncidentRepository;
use incidenthub_domain::error::IncidentHubError;
use incidenthub_domain::id::IncidentId;
use incidenthub_domain::incident::{Incident, IncidentPatch};

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Incident`] values
/// without polluting domain structs with database concerns.
struct Wrapper(Incident);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Incident> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let title: String = row.try_get("title")?;
        let description: String = row.try_get("description")?;
        let user: String = row.try_get("user")?;
        let severity: String = row.try_get("severity")?;
        let completed: bool = row.try_get("completed")?;
        let created_at_str: String = row.try_get("created_at")?;

        let id = IncidentId::from_str(&id).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let created_at = chrono::DateTime::parse_from_rfc3339(&created_at_str)
            .map_err(|err| sqlx::Error::Decode(Box::new(err)))?
            .to_utc();

        Ok(Self(Incident {
            id,
            title,
            description,
            user,
            severity,
            completed,
            created_at,
        }))
    }
}

const INSERT: &str = r"
    INSERT INTO incidents (id, title, description, user, severity, completed, created_at)
    VALUES (?, ?, ?, ?, ?, ?, ?)
";

// RFC 3339 strings in UTC compare lexicographically in chronological order,
// so ORDER BY on the text column yields creation-time ascending.
const SELECT_ALL: &str = "SELECT * FROM incidents ORDER BY created_at ASC";
const SELECT_BY_ID: &str = "SELECT * FROM incidents WHERE id = ?";
const SELECT_BY_SEVERITY: &str =
    "SELECT * FROM incidents WHERE severity = ? ORDER BY created_at ASC";
const SELECT_BY_COMPLETED: &str =
    "SELECT * FROM incidents WHERE completed = ? ORDER BY created_at ASC";

const UPDATE: &str = r"
    UPDATE incidents
    SET title = ?, description = ?, user = ?, severity = ?, completed = ?, created_at = ?
    WHERE id = ?
";

const DELETE_BY_ID: &str = "DELETE FROM incidents WHERE id = ?";

/// `SQLite`-backed incident repository.
pub struct SqliteIncidentRepository {
    pool: SqlitePool,
}

impl SqliteIncidentRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl IncidentRepository for SqliteIncidentRepository {
    async fn insert(&self, incident: Incident) -> Result<Incident, IncidentHubError> {
        sqlx::query(INSERT)
            .bind(incident.id.to_string())
            .bind(&incident.title)
            .bind(&incident.description)
            .bind(&incident.user)
            .bind(&incident.severity)
            .bind(incident.completed)
            .bind(incident.created_at.to_rfc3339())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(incident)
    }

    async fn find_all(&self) -> Result<Vec<Incident>, IncidentHubError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }

    async fn find_by_severity(&self, severity: &str) -> Result<Vec<Incident>, IncidentHubError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_SEVERITY)
            .bind(severity)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }

    async fn find_by_completed(&self, completed: bool) -> Result<Vec<Incident>, IncidentHubError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_COMPLETED)
            .bind(completed)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }

    async fn update(
        &self,
        id: IncidentId,
        patch: IncidentPatch,
    ) -> Result<Option<Incident>, IncidentHubError> {
        let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        let Some(mut incident) = Wrapper::maybe(row) else {
            return Ok(None);
        };
        incident.apply(patch);

        sqlx::query(UPDATE)
            .bind(&incident.title)
            .bind(&incident.description)
            .bind(&incident.user)
            .bind(&incident.severity)
            .bind(incident.completed)
            .bind(incident.created_at.to_rfc3339())
            .bind(incident.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(Some(incident))
    }

    async fn delete(&self, id: IncidentId) -> Result<bool, IncidentHubError> {
        let result = sqlx::query(DELETE_BY_ID)
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(result.rows_affected() > 0)
    }
}
