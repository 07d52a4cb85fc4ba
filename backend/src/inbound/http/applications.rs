//! Membership application submission endpoint.
//!
//! ```text
//! POST /api/applications
//! ```

use actix_web::{HttpResponse, post, web};
use serde::Serialize;
use serde_json::Value;
use tracing::error;
use utoipa::ToSchema;

use crate::domain::ports::TableRole;
use crate::domain::{SubmissionError, SubmissionReceipt};
use crate::inbound::http::ApiResult;
use crate::inbound::http::body::read_form_body;
use crate::inbound::http::error::ErrorEnvelope;
use crate::inbound::http::schemas::ApplicationRequestSchema;
use crate::inbound::http::state::HttpState;

/// Success payload shared by the submission endpoints.
#[derive(Debug, Serialize, ToSchema)]
pub struct SubmissionResponse {
    /// Always `true`.
    pub ok: bool,
    /// First record echoed by the record store, or `null`.
    #[schema(value_type = Option<serde_json::Value>)]
    pub record: Option<Value>,
}

impl From<SubmissionReceipt> for SubmissionResponse {
    fn from(receipt: SubmissionReceipt) -> Self {
        Self {
            ok: true,
            record: receipt.record,
        }
    }
}

/// Validate an application and forward it to the record store.
#[utoipa::path(
    post,
    path = "/api/applications",
    description = "Create one application record. LinkedIn is the only optional field.",
    request_body = ApplicationRequestSchema,
    responses(
        (status = 200, description = "Record created", body = SubmissionResponse),
        (status = 400, description = "Required fields missing", body = ErrorEnvelope),
        (status = 500, description = "Configuration missing or request failed", body = ErrorEnvelope),
        (status = "default", description = "Upstream failure relayed with its status", body = ErrorEnvelope)
    ),
    tags = ["applications"],
    operation_id = "submitApplication"
)]
#[post("/applications")]
pub async fn submit_application(
    state: web::Data<HttpState>,
    payload: web::Payload,
) -> ApiResult<HttpResponse> {
    let target = state
        .config
        .resolve(TableRole::Applications)
        .map_err(SubmissionError::from)?;
    let form = read_form_body(payload)
        .await
        .inspect_err(|err| error!(target: "applications", error = %err, "unreadable body"))?;
    let receipt = state.submissions.submit_application(&target, &form).await?;
    Ok(HttpResponse::Ok().json(SubmissionResponse::from(receipt)))
}
