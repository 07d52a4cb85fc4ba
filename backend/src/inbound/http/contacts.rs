//! Community contact endpoints: sign-up submission and the member roster.
//!
//! ```text
//! POST /api/contacts
//! GET  /api/contacts?debug=1
//! ```

use actix_web::{HttpRequest, HttpResponse, get, post, web};
use serde::Serialize;
use tracing::error;
use utoipa::{IntoParams, ToSchema};

use crate::domain::SubmissionError;
use crate::domain::ports::TableRole;
use crate::inbound::http::applications::SubmissionResponse;
use crate::inbound::http::body::read_form_body;
use crate::inbound::http::cache_control::revalidating_public_header;
use crate::inbound::http::error::{ApiError, ErrorEnvelope};
use crate::inbound::http::schemas::ContactRequestSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::ApiResult;

/// Remediation hint attached to failed roster listings.
pub const ROSTER_HINT: &str =
    "Check AIRTABLE_API_KEY permissions, BASE ID, and table name (Contactos Básicos).";

/// Query parameters for the roster listing.
#[derive(Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RosterParams {
    /// `1` includes listing metadata and upstream error bodies.
    #[param(example = "1")]
    debug: Option<String>,
}

impl RosterParams {
    /// Read the first `debug` value; repeats and unknown keys are ignored.
    fn from_query(query: &str) -> Self {
        let debug = url::form_urlencoded::parse(query.as_bytes())
            .find(|(key, _)| key == "debug")
            .map(|(_, value)| value.into_owned());
        Self { debug }
    }

    fn debug_enabled(&self) -> bool {
        self.debug.as_deref() == Some("1")
    }
}

/// Listing metadata returned in debug mode.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RosterMeta {
    pub count: usize,
    #[schema(example = "app…x9Z")]
    pub base_id_masked: String,
    #[schema(example = "Contactos Básicos")]
    pub table_name: String,
}

/// Roster payload: member names in upstream order.
#[derive(Debug, Serialize, ToSchema)]
pub struct RosterResponse {
    pub names: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<RosterMeta>,
}

/// Store a community contact. Only the name is required.
#[utoipa::path(
    post,
    path = "/api/contacts",
    request_body = ContactRequestSchema,
    responses(
        (status = 200, description = "Record created", body = SubmissionResponse),
        (status = 400, description = "Name missing", body = ErrorEnvelope),
        (status = 500, description = "Configuration missing or request failed", body = ErrorEnvelope),
        (status = "default", description = "Upstream failure relayed with its status", body = ErrorEnvelope)
    ),
    tags = ["contacts"],
    operation_id = "submitContact"
)]
#[post("/contacts")]
pub async fn submit_contact(
    state: web::Data<HttpState>,
    payload: web::Payload,
) -> ApiResult<HttpResponse> {
    let target = state
        .config
        .resolve(TableRole::Contacts)
        .map_err(SubmissionError::from)?;
    let form = read_form_body(payload)
        .await
        .inspect_err(|err| error!(target: "contacts", error = %err, "unreadable body"))?;
    let receipt = state.submissions.submit_contact(&target, &form).await?;
    Ok(HttpResponse::Ok().json(SubmissionResponse::from(receipt)))
}

/// List member names for the community roster.
#[utoipa::path(
    get,
    path = "/api/contacts",
    params(RosterParams),
    responses(
        (
            status = 200,
            description = "Member names",
            headers(("Cache-Control" = String, description = "Shared-cache revalidation policy")),
            body = RosterResponse
        ),
        (status = 500, description = "Configuration missing or request failed", body = ErrorEnvelope),
        (status = "default", description = "Upstream failure relayed with its status and a hint", body = ErrorEnvelope)
    ),
    tags = ["contacts"],
    operation_id = "listContacts"
)]
#[get("/contacts")]
pub async fn list_contacts(
    state: web::Data<HttpState>,
    req: HttpRequest,
) -> ApiResult<HttpResponse> {
    let debug = RosterParams::from_query(req.query_string()).debug_enabled();
    let target = state
        .config
        .resolve(TableRole::Contacts)
        .map_err(SubmissionError::from)?;
    let names = state
        .roster
        .list_names(&target)
        .await
        .map_err(|err| roster_error(err, debug))?;
    let meta = debug.then(|| RosterMeta {
        count: names.len(),
        base_id_masked: target.masked_base_id(),
        table_name: target.table().to_owned(),
    });
    Ok(HttpResponse::Ok()
        .insert_header(revalidating_public_header(state.roster_revalidate))
        .json(RosterResponse { names, meta }))
}

/// Upstream listing failures always carry the hint; their body only in
/// debug mode.
fn roster_error(err: SubmissionError, debug: bool) -> ApiError {
    let api = ApiError::from(err);
    if !api.is_upstream() {
        return api;
    }
    let api = api.with_hint(ROSTER_HINT);
    if debug { api } else { api.without_details() }
}

#[cfg(test)]
mod tests {
    //! Handler coverage for contact submission and roster listing.
    use std::sync::Arc;

    use super::*;
    use crate::domain::ports::RecordStoreError;
    use crate::inbound::http::test_utils::{configured, state_with, unconfigured};
    use crate::test_support::{RecordedCall, RecordingRecordStore};
    use actix_web::http::{StatusCode, header};
    use actix_web::{App, test as actix_test};
    use rstest::{fixture, rstest};
    use serde_json::{Value, json};

    #[fixture]
    fn store() -> Arc<RecordingRecordStore> {
        Arc::new(RecordingRecordStore::new())
    }

    fn record(name: Value) -> crate::domain::ports::StoredFields {
        json!({ "Nombre": name })
            .as_object()
            .cloned()
            .unwrap_or_default()
    }

    struct Reply {
        status: StatusCode,
        cache_control: Option<String>,
        body: Value,
    }

    async fn call(state: HttpState, req: actix_test::TestRequest) -> Reply {
        let app = actix_test::init_service(
            App::new().app_data(web::Data::new(state)).service(
                web::scope("/api")
                    .service(submit_contact)
                    .service(list_contacts),
            ),
        )
        .await;
        let res = actix_test::call_service(&app, req.to_request()).await;
        let status = res.status();
        let cache_control = res
            .headers()
            .get(header::CACHE_CONTROL)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let body = actix_test::read_body_json(res).await;
        Reply {
            status,
            cache_control,
            body,
        }
    }

    fn post_contact(body: Value) -> actix_test::TestRequest {
        actix_test::TestRequest::post()
            .uri("/api/contacts")
            .set_json(body)
    }

    #[rstest]
    #[actix_rt::test]
    async fn name_only_contact_is_stored(store: Arc<RecordingRecordStore>) {
        let reply = call(
            state_with(configured(), store.clone()),
            post_contact(json!({ "name": "Ana", "email": "  ", "phone": null })),
        )
        .await;

        assert_eq!(reply.status, StatusCode::OK);
        assert_eq!(reply.body, json!({ "ok": true, "record": null }));
        let created = store.created_fields();
        assert_eq!(created.len(), 1);
        assert_eq!(created[0].columns().collect::<Vec<_>>(), vec!["Nombre"]);
        assert!(matches!(
            &store.calls()[0],
            RecordedCall::Create { table, .. } if table == "Contactos Básicos"
        ));
    }

    #[rstest]
    #[actix_rt::test]
    async fn blank_name_is_rejected(store: Arc<RecordingRecordStore>) {
        let reply = call(
            state_with(configured(), store.clone()),
            post_contact(json!({ "name": "   ", "email": "ana@example.com" })),
        )
        .await;

        assert_eq!(reply.status, StatusCode::BAD_REQUEST);
        assert_eq!(reply.body, json!({ "error": "Name is required" }));
        assert_eq!(store.call_count(), 0);
    }

    #[rstest]
    #[actix_rt::test]
    async fn roster_lists_names_with_a_revalidating_cache_header(
        store: Arc<RecordingRecordStore>,
    ) {
        store.script_list(Ok(vec![
            record(json!("ANA")),
            record(Value::Null),
            record(json!("")),
            record(json!("LUIS")),
        ]));
        let reply = call(
            state_with(configured(), store),
            actix_test::TestRequest::get().uri("/api/contacts"),
        )
        .await;

        assert_eq!(reply.status, StatusCode::OK);
        assert_eq!(reply.body, json!({ "names": ["ANA", "LUIS"] }));
        assert_eq!(
            reply.cache_control.as_deref(),
            Some("public, max-age=0, s-maxage=60, stale-while-revalidate=60")
        );
    }

    #[rstest]
    #[actix_rt::test]
    async fn debug_roster_includes_masked_metadata(store: Arc<RecordingRecordStore>) {
        store.script_list(Ok(vec![record(json!("ANA"))]));
        let reply = call(
            state_with(configured(), store),
            actix_test::TestRequest::get().uri("/api/contacts?debug=1"),
        )
        .await;

        assert_eq!(
            reply.body,
            json!({
                "names": ["ANA"],
                "meta": {
                    "count": 1,
                    "baseIdMasked": "app…E01",
                    "tableName": "Contactos Básicos"
                }
            })
        );
    }

    #[rstest]
    #[case("/api/contacts", None)]
    #[case("/api/contacts?debug=0", None)]
    #[case("/api/contacts?debug=1", Some("forbidden"))]
    #[actix_rt::test]
    async fn upstream_roster_failure_always_hints(
        store: Arc<RecordingRecordStore>,
        #[case] uri: &str,
        #[case] details: Option<&str>,
    ) {
        store.script_list(Err(RecordStoreError::upstream(403_u16, "forbidden")));
        let reply = call(
            state_with(configured(), store),
            actix_test::TestRequest::get().uri(uri),
        )
        .await;

        assert_eq!(reply.status, StatusCode::FORBIDDEN);
        assert_eq!(reply.body["upstreamStatus"], json!(403));
        assert_eq!(reply.body["hint"], json!(ROSTER_HINT));
        assert_eq!(reply.body.get("details").and_then(Value::as_str), details);
    }

    #[rstest]
    #[case("/api/contacts?debug=1&debug=0", true)]
    #[case("/api/contacts?debug=0&debug=1", false)]
    #[case("/api/contacts?debug=true", false)]
    #[case("/api/contacts?other=x&debug=1", true)]
    #[actix_rt::test]
    async fn first_debug_value_wins(
        store: Arc<RecordingRecordStore>,
        #[case] uri: &str,
        #[case] with_meta: bool,
    ) {
        store.script_list(Ok(vec![record(json!("ANA"))]));
        let reply = call(
            state_with(configured(), store),
            actix_test::TestRequest::get().uri(uri),
        )
        .await;

        assert_eq!(reply.status, StatusCode::OK);
        assert_eq!(reply.body["names"], json!(["ANA"]));
        assert_eq!(reply.body.get("meta").is_some(), with_meta);
    }

    #[rstest]
    #[actix_rt::test]
    async fn oversized_contact_body_gets_the_error_envelope(store: Arc<RecordingRecordStore>) {
        let reply = call(
            state_with(configured(), store.clone()),
            post_contact(json!({ "name": "x".repeat(300 * 1024) })),
        )
        .await;

        assert_eq!(reply.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(reply.body, json!({ "error": "payload reached size limit" }));
        assert_eq!(store.call_count(), 0);
    }

    #[rstest]
    #[actix_rt::test]
    async fn roster_transport_failure_has_no_hint(store: Arc<RecordingRecordStore>) {
        store.script_list(Err(RecordStoreError::transport("connection refused")));
        let reply = call(
            state_with(configured(), store),
            actix_test::TestRequest::get().uri("/api/contacts?debug=1"),
        )
        .await;

        assert_eq!(reply.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(reply.body, json!({ "error": "connection refused" }));
    }

    #[rstest]
    #[actix_rt::test]
    async fn roster_requires_configuration(store: Arc<RecordingRecordStore>) {
        let reply = call(
            state_with(unconfigured(), store.clone()),
            actix_test::TestRequest::get().uri("/api/contacts"),
        )
        .await;

        assert_eq!(reply.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            reply.body,
            json!({ "error": "Missing AIRTABLE_BASE_ID or AIRTABLE_API_KEY" })
        );
        assert_eq!(store.call_count(), 0);
    }
}
