use axum::{response::IntoResponse, routing::get, Json, Router};
use http::StatusCode;
use serde_json::json;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::Level;
use tracing_subscriber::{filter, layer::SubscriberExt, util::SubscriberInitExt, Registry};

pub mod catalog;
pub mod ergast;

use crate::{
    routes::{
        catalog::{Endpoint, ENDPOINTS, ERGAST_PREFIX},
        ergast::ergast_routes,
    },
    utils::{config::Config, state::AppState},
};

pub const DOCUMENTATION_URL: &str = "https://ergast.com/mrd/";

pub fn init_tracing(config: &Config) {
    let filter = filter::Targets::new()
        .with_target("tower_http::trace::on_response", Level::TRACE)
        .with_target("tower_http::trace::on_request", Level::TRACE)
        .with_target("tower_http::trace::make_span", Level::DEBUG)
        .with_target("axum::rejection", Level::TRACE)
        .with_target(env!("CARGO_CRATE_NAME"), config.log_level)
        .with_default(Level::INFO);

    let tracing_layer = tracing_subscriber::fmt::layer();

    Registry::default().with(tracing_layer).with(filter).init();
}

pub fn make_app(config: &Config) -> Router {
    build_router(AppState::init(config))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .nest(ERGAST_PREFIX, ergast_routes())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn root() -> impl IntoResponse {
    let endpoints: Vec<String> = ENDPOINTS.iter().map(Endpoint::documented_path).collect();
    (
        StatusCode::OK,
        Json(json!({
            "message": "F1 API Running",
            "documentation": DOCUMENTATION_URL,
            "endpoints": endpoints
        })),
    )
        .into_response()
}
