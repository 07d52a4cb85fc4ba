//! End-to-end coverage through the reqwest adapter against a local stand-in
//! for the record-store API.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use actix_web::dev::ServerHandle;
use actix_web::http::StatusCode;
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, test, web};
use breakout_backend::domain::ports::NoRosterCache;
use breakout_backend::outbound::airtable::AirtableHttpStore;
use rstest::rstest;
use serde_json::{Value, json};

mod support;

use support::{API_KEY, BASE_ID, api_app, configured_env, http_state};

/// Request observed by the stand-in upstream.
#[derive(Debug, Clone)]
struct Seen {
    method: String,
    path: String,
    query: String,
    authorization: Option<String>,
    body: Option<Value>,
}

#[derive(Clone)]
struct Upstream {
    seen: Arc<Mutex<Vec<Seen>>>,
    status: StatusCode,
    reply: String,
}

async fn record(req: HttpRequest, body: web::Bytes, upstream: web::Data<Upstream>) -> HttpResponse {
    let seen = Seen {
        method: req.method().to_string(),
        path: req.path().to_owned(),
        query: req.query_string().to_owned(),
        authorization: req
            .headers()
            .get("authorization")
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned),
        body: serde_json::from_slice(&body).ok(),
    };
    upstream.seen.lock().expect("seen lock").push(seen);
    HttpResponse::build(upstream.status)
        .content_type("application/json")
        .body(upstream.reply.clone())
}

struct RunningUpstream {
    addr: SocketAddr,
    handle: ServerHandle,
    seen: Arc<Mutex<Vec<Seen>>>,
}

impl RunningUpstream {
    fn start(status: StatusCode, reply: &str) -> Self {
        let upstream = Upstream {
            seen: Arc::new(Mutex::new(Vec::new())),
            status,
            reply: reply.to_owned(),
        };
        let seen = upstream.seen.clone();
        let data = web::Data::new(upstream);
        let server = HttpServer::new(move || {
            App::new()
                .app_data(data.clone())
                .default_service(web::to(record))
        })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .expect("bind stand-in upstream");
        let addr = server.addrs()[0];
        let server = server.run();
        let handle = server.handle();
        actix_rt::spawn(server);
        Self { addr, handle, seen }
    }

    fn store(&self) -> Arc<AirtableHttpStore> {
        let root = format!("http://{}/v0", self.addr)
            .parse()
            .expect("stand-in url");
        Arc::new(AirtableHttpStore::new(root, None).expect("client builds"))
    }

    fn seen(&self) -> Vec<Seen> {
        self.seen.lock().expect("seen lock").clone()
    }
}

#[rstest]
#[actix_rt::test]
async fn contact_is_posted_as_a_single_record() {
    let upstream = RunningUpstream::start(
        StatusCode::OK,
        r#"{"records":[{"id":"recA","fields":{"Nombre":"Ana"}}]}"#,
    );
    let app = test::init_service(api_app(http_state(
        configured_env(),
        upstream.store(),
        Arc::new(NoRosterCache),
    )))
    .await;

    let req = test::TestRequest::post()
        .uri("/api/contacts")
        .set_json(json!({ "name": " Ana ", "email": "", "phone": "+51 987 654 321" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(
        body,
        json!({ "ok": true, "record": { "id": "recA", "fields": { "Nombre": "Ana" } } })
    );
    let seen = upstream.seen();
    assert_eq!(seen.len(), 1);
    let call = &seen[0];
    assert_eq!(call.method, "POST");
    assert_eq!(
        call.path,
        format!("/v0/{BASE_ID}/Contactos%20B%C3%A1sicos")
    );
    assert_eq!(call.authorization.as_deref(), Some("Bearer patTESTKEY"));
    assert_eq!(
        call.body,
        Some(json!({
            "records": [{ "fields": { "Nombre": "Ana", "Número de Teléfono": "+51 987 654 321" } }]
        }))
    );
    upstream.handle.stop(true).await;
}

#[rstest]
#[actix_rt::test]
async fn rejected_creation_relays_status_and_body() {
    let upstream = RunningUpstream::start(StatusCode::UNPROCESSABLE_ENTITY, "rate limited");
    let app = test::init_service(api_app(http_state(
        configured_env(),
        upstream.store(),
        Arc::new(NoRosterCache),
    )))
    .await;

    let req = test::TestRequest::post()
        .uri("/api/contacts")
        .set_json(json!({ "name": "Ana" }))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(
        body,
        json!({
            "error": "Airtable request failed",
            "upstreamStatus": 422,
            "details": "rate limited"
        })
    );
    upstream.handle.stop(true).await;
}

#[rstest]
#[actix_rt::test]
async fn roster_requests_only_the_name_column() {
    let upstream = RunningUpstream::start(
        StatusCode::OK,
        r#"{"records":[{"fields":{"Nombre":"ANA"}},{"fields":{}},{"fields":{"Nombre":"LUIS"}}]}"#,
    );
    let app = test::init_service(api_app(http_state(
        configured_env(),
        upstream.store(),
        Arc::new(NoRosterCache),
    )))
    .await;

    let req = test::TestRequest::get().uri("/api/contacts?debug=1").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["names"], json!(["ANA", "LUIS"]));
    assert_eq!(body["meta"]["count"], 2);
    let seen = upstream.seen();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].method, "GET");
    assert_eq!(seen[0].query, "pageSize=100&fields%5B%5D=Nombre");
    assert_eq!(seen[0].authorization.as_deref(), Some(format!("Bearer {API_KEY}").as_str()));
    upstream.handle.stop(true).await;
}
