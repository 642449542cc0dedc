//! Service entry-point: wires the REST endpoints, the in-memory persistence
//! adapter, and OpenAPI docs.

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use actix_web::{App, HttpServer, web};
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use petclinic_customers::ApiDoc;
use petclinic_customers::Trace;
use petclinic_customers::inbound::http::health::{HealthState, live, ready};
use petclinic_customers::inbound::http::state::HttpState;
use petclinic_customers::inbound::http::{owners, pets};
use petclinic_customers::outbound::persistence::InMemoryStore;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8081";

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let bind_addr: SocketAddr = env::var("BIND_ADDR")
        .unwrap_or_else(|_| DEFAULT_BIND_ADDR.into())
        .parse()
        .map_err(std::io::Error::other)?;

    let store = Arc::new(InMemoryStore::seeded());
    let state = HttpState::new(store.clone(), store);

    let health_state = web::Data::new(HealthState::new());
    // Clone for the server factory so the readiness probe stays reachable.
    let server_health_state = health_state.clone();
    let server = HttpServer::new(move || {
        build_app(server_health_state.clone(), state.clone())
    })
    .bind(bind_addr)?;

    // Fail the liveness probe as soon as a shutdown is requested so
    // orchestrators stop routing traffic while Actix drains connections.
    let drain_health_state = health_state.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            drain_health_state.mark_unhealthy();
        }
    });

    health_state.mark_ready();
    server.run().await
}

fn build_app(
    health_state: web::Data<HealthState>,
    state: HttpState,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let mut app = App::new()
        .app_data(health_state)
        .app_data(web::Data::new(state))
        .wrap(Trace)
        .service(owners::create_owner)
        .service(owners::get_owner)
        .service(owners::update_owner)
        .service(owners::list_owners)
        .service(pets::list_pet_types)
        .service(pets::get_pet)
        .service(pets::create_pet)
        .service(pets::update_pet)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    {
        app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    }

    app
}
