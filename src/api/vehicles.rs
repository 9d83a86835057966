use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::Json;
use axum::Router;
use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::vehicle::{TrackingSample, Vehicle, VehicleType};
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/vehicles", post(create_vehicle).get(list_vehicles))
        .route("/vehicles/:id/pings", post(record_ping).get(list_pings))
}

#[derive(Deserialize)]
pub struct CreateVehicleRequest {
    pub plate_number: String,
    pub vehicle_type: VehicleType,
    pub capacity_kg: Option<f64>,
    pub is_trackable: bool,
}

#[derive(Deserialize)]
pub struct PingRequest {
    pub latitude: f64,
    pub longitude: f64,
}

async fn create_vehicle(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateVehicleRequest>,
) -> Result<Json<Vehicle>, AppError> {
    if payload.plate_number.trim().is_empty() {
        return Err(AppError::BadRequest("plate number cannot be empty".to_string()));
    }
    if payload.capacity_kg.is_some_and(|c| c <= 0.0) {
        return Err(AppError::BadRequest("capacity must be > 0".to_string()));
    }

    let vehicle = state.db.insert_vehicle(Vehicle {
        id: Uuid::new_v4(),
        plate_number: payload.plate_number,
        vehicle_type: payload.vehicle_type,
        capacity_kg: payload.capacity_kg,
        is_trackable: payload.is_trackable,
        created_at: Utc::now(),
    })?;

    Ok(Json(vehicle))
}

async fn list_vehicles(State(state): State<Arc<AppState>>) -> Json<Vec<Vehicle>> {
    Json(state.db.list_vehicles())
}

async fn record_ping(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<PingRequest>,
) -> Result<Json<TrackingSample>, AppError> {
    let vehicle = state.db.get_vehicle(id)?;
    if !vehicle.is_trackable {
        return Err(AppError::BadRequest(format!(
            "vehicle {} is not trackable",
            vehicle.plate_number
        )));
    }
    if !(-90.0..=90.0).contains(&payload.latitude)
        || !(-180.0..=180.0).contains(&payload.longitude)
    {
        return Err(AppError::BadRequest("coordinates out of range".to_string()));
    }

    let sample = TrackingSample {
        vehicle_id: vehicle.id,
        latitude: payload.latitude,
        longitude: payload.longitude,
        recorded_at: Utc::now(),
    };
    state.db.append_sample(sample.clone());

    Ok(Json(sample))
}

async fn list_pings(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<TrackingSample>>, AppError> {
    state.db.get_vehicle(id)?;
    Ok(Json(state.db.samples_for(id)))
}
