use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{error, warn};

use super::sheets::{EnrollmentRow, SheetPublisher};
use super::storage::{DocumentStore, StorageError, CONTACTS, ENROLLMENTS, STATUS_CHECKS};
use crate::forms::{
    ContactForm, ContactRecord, EnrollmentForm, EnrollmentRecord, FieldError, StatusCheck,
    StatusCheckCreate,
};

/// Maximum status checks returned by a single listing.
pub const STATUS_CHECK_LIMIT: usize = 1000;

/// Service composing field validation, the document store, and the optional
/// spreadsheet sync. All collaborators are injected so tests can observe
/// every side effect.
pub struct SubmissionService<S, P> {
    store: Arc<S>,
    sheets: Arc<P>,
}

/// Failures surfaced by the submission operations.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error("validation failed")]
    Validation(Vec<FieldError>),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("record serialization failed: {0}")]
    Encoding(#[from] serde_json::Error),
}

/// Diagnostic snapshot returned by `GET /api/health`.
#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
    pub integration_status: &'static str,
    pub database_status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<S, P> SubmissionService<S, P>
where
    S: DocumentStore + 'static,
    P: SheetPublisher + 'static,
{
    pub fn new(store: Arc<S>, sheets: Arc<P>) -> Self {
        Self { store, sheets }
    }

    /// Validate and persist an enrollment. The spreadsheet row is appended
    /// after the insert; a sync failure is logged and the enrollment still
    /// succeeds.
    pub async fn submit_enrollment(
        &self,
        form: EnrollmentForm,
    ) -> Result<EnrollmentRecord, SubmissionError> {
        let fields = form.validate().map_err(SubmissionError::Validation)?;
        let record = EnrollmentRecord::accept(fields);

        let document = serde_json::to_value(&record)?;
        self.store.insert(ENROLLMENTS, document).await?;

        if let Err(err) = self.sheets.publish(EnrollmentRow::from(&record)) {
            warn!(enrollment_id = %record.id, "spreadsheet sync failed: {err}");
        }

        Ok(record)
    }

    pub async fn submit_contact(
        &self,
        form: ContactForm,
    ) -> Result<ContactRecord, SubmissionError> {
        let fields = form.validate().map_err(SubmissionError::Validation)?;
        let record = ContactRecord::accept(fields);

        let document = serde_json::to_value(&record)?;
        self.store.insert(CONTACTS, document).await?;

        Ok(record)
    }

    pub async fn create_status_check(
        &self,
        input: StatusCheckCreate,
    ) -> Result<StatusCheck, SubmissionError> {
        let client_name = input.validate().map_err(SubmissionError::Validation)?;
        let check = StatusCheck::record(client_name);

        let document = serde_json::to_value(&check)?;
        self.store.insert(STATUS_CHECKS, document).await?;

        Ok(check)
    }

    /// Most-recently-inserted status checks, up to [`STATUS_CHECK_LIMIT`].
    /// Documents that no longer deserialize are skipped, not fatal.
    pub async fn list_status_checks(&self) -> Result<Vec<StatusCheck>, SubmissionError> {
        let documents = self.store.find(STATUS_CHECKS, STATUS_CHECK_LIMIT).await?;

        let checks = documents
            .into_iter()
            .filter_map(|document| match serde_json::from_value(document) {
                Ok(check) => Some(check),
                Err(err) => {
                    warn!("skipping malformed status check document: {err}");
                    None
                }
            })
            .collect();

        Ok(checks)
    }

    /// Never fails: storage trouble degrades the report instead of erroring
    /// the endpoint, since this is a diagnostic surface.
    pub async fn health(&self) -> HealthReport {
        let timestamp = Utc::now();
        let integration_status = self.sheets.status_label();

        match self.store.ping().await {
            Ok(()) => HealthReport {
                status: "healthy",
                timestamp,
                integration_status,
                database_status: "connected",
                error: None,
            },
            Err(err) => {
                error!("health probe failed to reach document store: {err}");
                HealthReport {
                    status: "unhealthy",
                    timestamp,
                    integration_status,
                    database_status: "unreachable",
                    error: Some("document store unreachable".to_string()),
                }
            }
        }
    }
}
