//! Submission use-cases: validate a form body and create one upstream record.

use std::sync::Arc;

use serde_json::Value;
use tracing::{error, info};

use crate::domain::SubmissionError;
use crate::domain::application::ApplicationSubmission;
use crate::domain::body_fields::FormBody;
use crate::domain::contact::ContactEntry;
use crate::domain::ports::{RecordFields, RecordStore, RecordStoreTarget, TableRole};

/// First record echoed back by the store after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionReceipt {
    pub record: Option<Value>,
}

/// Forwards validated submissions to the record store.
///
/// Every call creates exactly one record. Nothing is deduplicated, so a
/// resubmitted form becomes a second record.
#[derive(Clone)]
pub struct SubmissionService {
    store: Arc<dyn RecordStore>,
}

impl SubmissionService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Validate and store an application.
    pub async fn submit_application(
        &self,
        target: &RecordStoreTarget,
        body: &FormBody,
    ) -> Result<SubmissionReceipt, SubmissionError> {
        let submission = ApplicationSubmission::from_body(body)?;
        info!(
            target: "applications",
            base_id = %target.masked_base_id(),
            table = target.table(),
            given_name = submission.given_name(),
            family_name = submission.family_name(),
            faculty = submission.faculty(),
            term = submission.term(),
            area_of_interest = submission.area_of_interest(),
            linkedin_provided = submission.has_linkedin(),
            "creating record"
        );
        self.create(TableRole::Applications, target, &submission.to_record_fields())
            .await
    }

    /// Validate and store a contact entry.
    pub async fn submit_contact(
        &self,
        target: &RecordStoreTarget,
        body: &FormBody,
    ) -> Result<SubmissionReceipt, SubmissionError> {
        let entry = ContactEntry::from_body(body)?;
        info!(
            target: "contacts",
            base_id = %target.masked_base_id(),
            table = target.table(),
            name = entry.name(),
            email_provided = entry.email_provided(),
            phone_provided = entry.phone_provided(),
            "creating record"
        );
        self.create(TableRole::Contacts, target, &entry.to_record_fields())
            .await
    }

    async fn create(
        &self,
        role: TableRole,
        target: &RecordStoreTarget,
        fields: &RecordFields,
    ) -> Result<SubmissionReceipt, SubmissionError> {
        let form = role.as_str();
        let record = self
            .store
            .create_record(target, fields)
            .await
            .map_err(SubmissionError::from)
            .inspect_err(|err| match err {
                SubmissionError::Upstream { status, body } => {
                    error!(form, status, body = body.as_str(), "record store rejected record");
                }
                other => error!(form, error = %other, "record creation failed"),
            })?;
        Ok(SubmissionReceipt { record })
    }
}
