//! Incident service — use-cases for reporting and tracking incidents.

use incidenthub_domain::error::{IncidentHubError, NotFoundError};
use incidenthub_domain::id::IncidentId;
use incidenthub_domain::incident::{Incident, IncidentPatch};

use crate::ports::IncidentRepository;

/// Application service for incident CRUD and filtering.
///
/// A thin orchestration layer: each use-case validates its input, issues
/// exactly one repository call, and maps "no matching record" to
/// [`IncidentHubError::NotFound`].
pub struct IncidentService<R> {
    repo: R,
}

impl<R: IncidentRepository> IncidentService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Persist a newly reported incident after validating domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`IncidentHubError::Validation`] if a required field is empty,
    /// or a storage error propagated from the repository.
    #[tracing::instrument(skip(self, incident), fields(severity = %incident.severity))]
    pub async fn report_incident(&self, incident: Incident) -> Result<Incident, IncidentHubError> {
        incident.validate()?;
        self.repo.insert(incident).await
    }

    /// List all incidents, ordered by creation time ascending.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_incidents(&self) -> Result<Vec<Incident>, IncidentHubError> {
        self.repo.find_all().await
    }

    /// List incidents whose severity matches exactly, ordered by creation
    /// time ascending.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn incidents_by_severity(
        &self,
        severity: &str,
    ) -> Result<Vec<Incident>, IncidentHubError> {
        self.repo.find_by_severity(severity).await
    }

    /// List incidents with the given completion state, ordered by creation
    /// time ascending.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn incidents_by_state(
        &self,
        completed: bool,
    ) -> Result<Vec<Incident>, IncidentHubError> {
        self.repo.find_by_completed(completed).await
    }

    /// Apply a partial overwrite to an existing incident and return the
    /// updated record.
    ///
    /// # Errors
    ///
    /// Returns [`IncidentHubError::NotFound`] when no incident with `id`
    /// exists, or a storage error from the repository.
    #[tracing::instrument(skip(self, patch))]
    pub async fn update_incident(
        &self,
        id: IncidentId,
        patch: IncidentPatch,
    ) -> Result<Incident, IncidentHubError> {
        self.repo.update(id, patch).await?.ok_or_else(|| {
            NotFoundError {
                entity: "incident",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// Delete an incident by id.
    ///
    /// # Errors
    ///
    /// Returns [`IncidentHubError::NotFound`] when no incident with `id`
    /// exists, or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_incident(&self, id: IncidentId) -> Result<(), IncidentHubError> {
        if self.repo.delete(id).await? {
            Ok(())
        } else {
            Err(NotFoundError {
                entity: "incident",
                id: id.to_string(),
            }
            .into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use incidenthub_domain::error::ValidationError;
    use std::collections::HashMap;
    use std::future::Future;
    use std::sync::Mutex;

    struct InMemoryIncidentRepo {
        store: Mutex<HashMap<IncidentId, Incident>>,
    }

    impl Default for InMemoryIncidentRepo {
        fn default() -> Self {
            Self {
                store: Mutex::new(HashMap::new()),
            }
        }
    }

    impl InMemoryIncidentRepo {
        fn sorted(mut records: Vec<Incident>) -> Vec<Incident> {
            records.sort_by_key(|incident| incident.created_at);
            records
        }
    }

    impl IncidentRepository for InMemoryIncidentRepo {
        fn insert(
            &self,
            incident: Incident,
        ) -> impl Future<Output = Result<Incident, IncidentHubError>> + Send {
            let mut store = self.store.lock().unwrap();
            store.insert(incident.id, incident.clone());
            async { Ok(incident) }
        }

        fn find_all(&self) -> impl Future<Output = Result<Vec<Incident>, IncidentHubError>> + Send {
            let store = self.store.lock().unwrap();
            let result = Self::sorted(store.values().cloned().collect());
            async { Ok(result) }
        }

        fn find_by_severity(
            &self,
            severity: &str,
        ) -> impl Future<Output = Result<Vec<Incident>, IncidentHubError>> + Send {
            let store = self.store.lock().unwrap();
            let result = Self::sorted(
                store
                    .values()
                    .filter(|incident| incident.severity == severity)
                    .cloned()
                    .collect(),
            );
            async { Ok(result) }
        }

        fn find_by_completed(
            &self,
            completed: bool,
        ) -> impl Future<Output = Result<Vec<Incident>, IncidentHubError>> + Send {
            let store = self.store.lock().unwrap();
            let result = Self::sorted(
                store
                    .values()
                    .filter(|incident| incident.completed == completed)
                    .cloned()
                    .collect(),
            );
            async { Ok(result) }
        }

        fn update(
            &self,
            id: IncidentId,
            patch: IncidentPatch,
        ) -> impl Future<Output = Result<Option<Incident>, IncidentHubError>> + Send {
            let mut store = self.store.lock().unwrap();
            let result = store.get_mut(&id).map(|incident| {
                incident.apply(patch);
                incident.clone()
            });
            async { Ok(result) }
        }

        fn delete(
            &self,
            id: IncidentId,
        ) -> impl Future<Output = Result<bool, IncidentHubError>> + Send {
            let mut store = self.store.lock().unwrap();
            let removed = store.remove(&id).is_some();
            async move { Ok(removed) }
        }
    }

    fn make_service() -> IncidentService<InMemoryIncidentRepo> {
        IncidentService::new(InMemoryIncidentRepo::default())
    }

    fn valid_incident() -> Incident {
        Incident::builder()
            .title("Outage")
            .description("db down")
            .user("alice")
            .severity("high")
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn should_report_incident_when_valid() {
        let svc = make_service();
        let incident = valid_incident();
        let id = incident.id;

        let created = svc.report_incident(incident).await.unwrap();
        assert_eq!(created.id, id);
        assert!(!created.completed);

        let all = svc.list_incidents().await.unwrap();
        assert_eq!(all.len(), 1);
    }

    #[tokio::test]
    async fn should_reject_report_when_user_is_empty() {
        let svc = make_service();
        let mut incident = valid_incident();
        incident.user = String::new();

        let result = svc.report_incident(incident).await;
        assert!(matches!(
            result,
            Err(IncidentHubError::Validation(ValidationError::EmptyUser))
        ));

        let all = svc.list_incidents().await.unwrap();
        assert!(all.is_empty());
    }

    #[tokio::test]
    async fn should_list_incidents_in_creation_order() {
        let svc = make_service();
        let mut early = valid_incident();
        let mut late = valid_incident();
        late.title = "Later".to_string();
        late.created_at = early.created_at + chrono::Duration::seconds(5);
        early.title = "Earlier".to_string();

        // Insert out of order; the repository contract sorts ascending.
        svc.report_incident(late).await.unwrap();
        svc.report_incident(early).await.unwrap();

        let all = svc.list_incidents().await.unwrap();
        assert_eq!(all[0].title, "Earlier");
        assert_eq!(all[1].title, "Later");
    }

    #[tokio::test]
    async fn should_filter_by_exact_severity() {
        let svc = make_service();
        svc.report_incident(valid_incident()).await.unwrap();
        let mut low = valid_incident();
        low.severity = "low".to_string();
        svc.report_incident(low).await.unwrap();

        let high = svc.incidents_by_severity("high").await.unwrap();
        assert_eq!(high.len(), 1);
        assert_eq!(high[0].severity, "high");

        let none = svc.incidents_by_severity("critical").await.unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn should_filter_by_completion_state() {
        let svc = make_service();
        svc.report_incident(valid_incident()).await.unwrap();
        let mut done = valid_incident();
        done.completed = true;
        svc.report_incident(done).await.unwrap();

        let open = svc.incidents_by_state(false).await.unwrap();
        assert_eq!(open.len(), 1);
        assert!(!open[0].completed);

        let closed = svc.incidents_by_state(true).await.unwrap();
        assert_eq!(closed.len(), 1);
        assert!(closed[0].completed);
    }

    #[tokio::test]
    async fn should_update_only_supplied_fields() {
        let svc = make_service();
        let incident = valid_incident();
        let id = incident.id;
        svc.report_incident(incident).await.unwrap();

        let updated = svc
            .update_incident(
                id,
                IncidentPatch {
                    completed: Some(true),
                    ..IncidentPatch::default()
                },
            )
            .await
            .unwrap();

        assert!(updated.completed);
        assert_eq!(updated.title, "Outage");
        assert_eq!(updated.severity, "high");
    }

    #[tokio::test]
    async fn should_return_not_found_when_updating_missing_incident() {
        let svc = make_service();
        let result = svc
            .update_incident(IncidentId::new(), IncidentPatch::default())
            .await;
        assert!(matches!(result, Err(IncidentHubError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_delete_incident_when_it_exists() {
        let svc = make_service();
        let incident = valid_incident();
        let id = incident.id;
        svc.report_incident(incident).await.unwrap();

        svc.delete_incident(id).await.unwrap();

        let all = svc.list_incidents().await.unwrap();
        assert!(all.is_empty());
    }

    #[tokio::test]
    async fn should_return_not_found_when_deleting_missing_incident() {
        let svc = make_service();
        let result = svc.delete_incident(IncidentId::new()).await;
        assert!(matches!(result, Err(IncidentHubError::NotFound(_))));
    }
}
