pub mod branches;
pub mod clients;
pub mod drivers;
pub mod expenses;
pub mod manifests;
pub mod package_types;
pub mod reports;
pub mod shipments;
pub mod track;
pub mod vehicles;
pub mod ws;

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Json;
use axum::Router;
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

use crate::state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    // the tracking page is served from other origins
    let public = Router::new()
        .route("/track/:tracking_no", get(track::track_shipment))
        .layer(CorsLayer::permissive());

    Router::new()
        .merge(branches::router())
        .merge(clients::router())
        .merge(drivers::router())
        .merge(expenses::router())
        .merge(package_types::router())
        .merge(vehicles::router())
        .merge(shipments::router())
        .merge(manifests::router())
        .merge(reports::router())
        .merge(public)
        .route("/health", get(health))
        .route("/metrics", get(metrics))
        .route("/ws", get(ws::ws_handler))
        .with_state(state)
        .fallback_service(ServeDir::new("static"))
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    branches: usize,
    shipments: usize,
    manifests: usize,
}

async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        branches: state.db.branch_count(),
        shipments: state.db.shipment_count(),
        manifests: state.db.manifest_count(),
    })
}

async fn metrics(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.metrics.encode() {
        Ok(body) => (
            StatusCode::OK,
            [("content-type", "text/plain; version=0.0.4; charset=utf-8")],
            body,
        )
            .into_response(),
        Err(err) => (StatusCode::INTERNAL_SERVER_ERROR, err).into_response(),
    }
}
