//! Incident — a single trackable issue record.

use serde::{Deserialize, Serialize};

use crate::error::{IncidentHubError, ValidationError};
use crate::id::IncidentId;
use crate::time::{self, Timestamp};

/// A trackable issue: what happened, who reported it, how severe it is, and
/// whether it has been resolved.
///
/// `severity` is free-form text, not an enumerated set; it is only ever used
/// as an exact-match filter key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Incident {
    pub id: IncidentId,
    pub title: String,
    pub description: String,
    pub user: String,
    pub severity: String,
    pub completed: bool,
    #[serde(rename = "createdAt")]
    pub created_at: Timestamp,
}

impl Incident {
    /// Create a builder for constructing an [`Incident`].
    #[must_use]
    pub fn builder() -> IncidentBuilder {
        IncidentBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`IncidentHubError::Validation`] when any of `title`,
    /// `description`, `user`, or `severity` is empty.
    pub fn validate(&self) -> Result<(), IncidentHubError> {
        if self.title.is_empty() {
            return Err(ValidationError::EmptyTitle.into());
        }
        if self.description.is_empty() {
            return Err(ValidationError::EmptyDescription.into());
        }
        if self.user.is_empty() {
            return Err(ValidationError::EmptyUser.into());
        }
        if self.severity.is_empty() {
            return Err(ValidationError::EmptySeverity.into());
        }
        Ok(())
    }

    /// Overwrite exactly the fields the patch supplies, leaving the rest
    /// unchanged. The record's `id` is not patchable.
    pub fn apply(&mut self, patch: IncidentPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(user) = patch.user {
            self.user = user;
        }
        if let Some(severity) = patch.severity {
            self.severity = severity;
        }
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
        if let Some(created_at) = patch.created_at {
            self.created_at = created_at;
        }
    }
}

/// Partial field overwrite for the update operation.
///
/// `id` is deliberately absent: update requests strip it before the patch is
/// applied. Unknown fields in an update body deserialize to nothing here and
/// are ignored rather than rejected.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IncidentPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub user: Option<String>,
    pub severity: Option<String>,
    pub completed: Option<bool>,
    #[serde(rename = "createdAt")]
    pub created_at: Option<Timestamp>,
}

/// Step-by-step builder for [`Incident`].
#[derive(Debug, Default)]
pub struct IncidentBuilder {
    id: Option<IncidentId>,
    title: Option<String>,
    description: Option<String>,
    user: Option<String>,
    severity: Option<String>,
    completed: Option<bool>,
    created_at: Option<Timestamp>,
}

impl IncidentBuilder {
    #[must_use]
    pub fn id(mut self, id: IncidentId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    #[must_use]
    pub fn severity(mut self, severity: impl Into<String>) -> Self {
        self.severity = Some(severity.into());
        self
    }

    #[must_use]
    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }

    #[must_use]
    pub fn created_at(mut self, created_at: Timestamp) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Consume the builder, validate, and return an [`Incident`].
    ///
    /// `completed` defaults to `false` and `created_at` to the current time.
    ///
    /// # Errors
    ///
    /// Returns [`IncidentHubError::Validation`] if any required field is
    /// missing or empty.
    pub fn build(self) -> Result<Incident, IncidentHubError> {
        let incident = Incident {
            id: self.id.unwrap_or_default(),
            title: self.title.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            user: self.user.unwrap_or_default(),
            severity: self.severity.unwrap_or_default(),
            completed: self.completed.unwrap_or(false),
            created_at: self.created_at.unwrap_or_else(time::now),
        };
        incident.validate()?;
        Ok(incident)
    }
}
