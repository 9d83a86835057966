use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::Json;
use axum::Router;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;
use crate::models::manifest::Manifest;
use crate::models::shipment::Shipment;
use crate::ops::manifests::{self, NewManifest};
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/manifests", post(create_manifest).get(list_manifests))
        .route("/manifests/:id", get(get_manifest))
        .route("/manifests/:id/shipments", post(add_shipment))
        .route(
            "/manifests/:id/shipments/:tracking_no",
            axum::routing::delete(remove_shipment),
        )
        .route("/manifests/:id/start", post(start_trip))
        .route("/manifests/:id/complete", post(complete_trip))
}

#[derive(Deserialize)]
pub struct CreateManifestRequest {
    pub vehicle_id: Option<Uuid>,
    pub driver_id: Option<Uuid>,
    pub origin_id: Uuid,
    pub dest_id: Uuid,
    pub departure_time: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
pub struct AddShipmentRequest {
    pub tracking_no: String,
}

#[derive(Serialize)]
pub struct ManifestDetail {
    #[serde(flatten)]
    pub manifest: Manifest,
    pub shipments: Vec<Shipment>,
}

async fn create_manifest(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateManifestRequest>,
) -> Result<Json<Manifest>, AppError> {
    let manifest = manifests::create_manifest(
        &state,
        NewManifest {
            vehicle_id: payload.vehicle_id,
            driver_id: payload.driver_id,
            origin_id: payload.origin_id,
            dest_id: payload.dest_id,
            departure_time: payload.departure_time,
        },
    )?;
    Ok(Json(manifest))
}

async fn list_manifests(State(state): State<Arc<AppState>>) -> Json<Vec<Manifest>> {
    Json(state.db.list_manifests())
}

async fn get_manifest(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ManifestDetail>, AppError> {
    let manifest = state.db.get_manifest(id)?;
    let shipments = state.db.shipments_on_manifest(id);
    Ok(Json(ManifestDetail { manifest, shipments }))
}

async fn add_shipment(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<AddShipmentRequest>,
) -> Result<StatusCode, AppError> {
    manifests::add_shipment(&state, id, &payload.tracking_no)?;
    Ok(StatusCode::NO_CONTENT)
}

async fn remove_shipment(
    State(state): State<Arc<AppState>>,
    Path((id, tracking_no)): Path<(Uuid, String)>,
) -> Result<StatusCode, AppError> {
    manifests::remove_shipment(&state, id, &tracking_no)?;
    Ok(StatusCode::NO_CONTENT)
}

async fn start_trip(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Manifest>, AppError> {
    Ok(Json(manifests::start_trip(&state, id).await?))
}

async fn complete_trip(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Manifest>, AppError> {
    Ok(Json(manifests::complete_trip(&state, id).await?))
}
