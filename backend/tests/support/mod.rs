//! Shared helpers for HTTP integration tests.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
use breakout_backend::Trace;
use breakout_backend::domain::ports::{RecordStore, RosterCache};
use breakout_backend::inbound::http::applications::submit_application;
use breakout_backend::inbound::http::contacts::{list_contacts, submit_contact};
use breakout_backend::inbound::http::state::{HttpState, HttpStatePorts};
use breakout_backend::outbound::airtable::EnvRecordStoreConfig;
use mockable::MockEnv;
use serde_json::{Value, json};

pub const BASE_ID: &str = "appBREAKOUT42";
pub const API_KEY: &str = "patTESTKEY";

/// Environment double answering from a fixed variable map.
pub fn env_with(vars: &[(&str, &str)]) -> MockEnv {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    let mut env = MockEnv::new();
    env.expect_string()
        .times(0..)
        .returning(move |key| vars.get(key).cloned());
    env
}

/// Environment with both credentials and default tables.
pub fn configured_env() -> MockEnv {
    env_with(&[("AIRTABLE_BASE_ID", BASE_ID), ("AIRTABLE_API_KEY", API_KEY)])
}

pub fn http_state(
    env: MockEnv,
    store: Arc<dyn RecordStore>,
    roster_cache: Arc<dyn RosterCache>,
) -> HttpState {
    HttpState::new(
        HttpStatePorts {
            config: Arc::new(EnvRecordStoreConfig::new(env)),
            store,
            roster_cache,
        },
        Duration::from_secs(60),
    )
}

/// The `/api` surface wrapped in the trace middleware, as served.
pub fn api_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new().app_data(web::Data::new(state)).wrap(Trace).service(
        web::scope("/api")
            .service(submit_application)
            .service(submit_contact)
            .service(list_contacts),
    )
}

/// Application body passing every server-side check.
pub fn application_body() -> Value {
    json!({
        "nombre": "Juan",
        "apellidos": "Pérez",
        "cel": "+51912345678",
        "facultad": "Ciencias Sociales",
        "semestre": "3ro",
        "correoPUCP": "juan@pucp.edu.pe",
        "linkedin": "",
        "areaInteres": "marketing",
        "porQue": "Me interesa aprender a emprender junto a otros estudiantes de la PUCP."
    })
}
