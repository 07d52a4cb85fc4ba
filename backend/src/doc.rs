//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint of the inbound layer together
//! with the request and response envelopes. The generated document backs
//! Swagger UI in debug builds.

use utoipa::OpenApi;

use crate::inbound::http::applications::SubmissionResponse;
use crate::inbound::http::contacts::{RosterMeta, RosterResponse};
use crate::inbound::http::error::ErrorEnvelope;
use crate::inbound::http::schemas::{ApplicationRequestSchema, ContactRequestSchema};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Breakout backend API",
        description = "Proxy endpoints for membership applications, community contacts and the member roster."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::applications::submit_application,
        crate::inbound::http::contacts::submit_contact,
        crate::inbound::http::contacts::list_contacts,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ApplicationRequestSchema,
        ContactRequestSchema,
        SubmissionResponse,
        RosterResponse,
        RosterMeta,
        ErrorEnvelope
    )),
    tags(
        (name = "applications", description = "Membership application submissions"),
        (name = "contacts", description = "Community sign-ups and the member roster"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying the registered paths and schema fields.

    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    fn object_fields(name: &str) -> Vec<String> {
        let doc = ApiDoc::openapi();
        let schemas = doc.components.expect("components").schemas;
        match schemas.get(name).expect("schema registered") {
            RefOr::T(Schema::Object(obj)) => obj.properties.keys().cloned().collect(),
            _ => panic!("expected Object schema"),
        }
    }

    #[rstest]
    #[case("/api/applications")]
    #[case("/api/contacts")]
    #[case("/health/ready")]
    #[case("/health/live")]
    fn every_endpoint_is_documented(#[case] path: &str) {
        assert!(ApiDoc::openapi().paths.paths.contains_key(path));
    }

    #[rstest]
    fn contacts_path_carries_both_methods() {
        let doc = ApiDoc::openapi();
        let item = doc.paths.paths.get("/api/contacts").expect("contacts path");
        assert!(item.get.is_some());
        assert!(item.post.is_some());
    }

    #[rstest]
    fn error_envelope_uses_wire_names() {
        let fields = object_fields("ErrorEnvelope");
        for expected in ["error", "upstreamStatus", "details", "hint"] {
            assert!(fields.iter().any(|f| f == expected), "missing {expected}");
        }
    }

    #[rstest]
    fn application_schema_uses_body_keys() {
        let fields = object_fields("ApplicationRequestSchema");
        for expected in ["nombre", "correoPUCP", "areaInteres", "porQue", "linkedin"] {
            assert!(fields.iter().any(|f| f == expected), "missing {expected}");
        }
    }
}
