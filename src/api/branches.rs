use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::Json;
use axum::Router;
use serde::Deserialize;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::branch::{Branch, PrinterType};
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/branches", post(create_branch).get(list_branches))
        .route(
            "/branches/:id",
            get(get_branch).patch(update_branch).delete(delete_branch),
        )
}

#[derive(Deserialize)]
pub struct CreateBranchRequest {
    pub name: String,
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
    pub printer_type: Option<PrinterType>,
}

#[derive(Deserialize)]
pub struct UpdateBranchRequest {
    pub name: Option<String>,
    pub city: Option<String>,
    pub printer_type: Option<PrinterType>,
}

async fn create_branch(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateBranchRequest>,
) -> Result<Json<Branch>, AppError> {
    if payload.name.trim().is_empty() {
        return Err(AppError::BadRequest("name cannot be empty".to_string()));
    }
    if payload.city.trim().is_empty() {
        return Err(AppError::BadRequest("city cannot be empty".to_string()));
    }
    if !(-90.0..=90.0).contains(&payload.latitude)
        || !(-180.0..=180.0).contains(&payload.longitude)
    {
        return Err(AppError::BadRequest("coordinates out of range".to_string()));
    }

    let branch = state.db.insert_branch(Branch {
        id: Uuid::new_v4(),
        name: payload.name,
        city: payload.city,
        latitude: payload.latitude,
        longitude: payload.longitude,
        printer_type: payload.printer_type.unwrap_or(PrinterType::Thermal80),
    });

    Ok(Json(branch))
}

async fn list_branches(State(state): State<Arc<AppState>>) -> Json<Vec<Branch>> {
    Json(state.db.list_branches())
}

async fn get_branch(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Branch>, AppError> {
    Ok(Json(state.db.get_branch(id)?))
}

async fn update_branch(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateBranchRequest>,
) -> Result<Json<Branch>, AppError> {
    let branch = state.db.update_branch(id, |branch| {
        if let Some(name) = payload.name {
            branch.name = name;
        }
        if let Some(city) = payload.city {
            branch.city = city;
        }
        if let Some(printer_type) = payload.printer_type {
            branch.printer_type = printer_type;
        }
    })?;

    Ok(Json(branch))
}

async fn delete_branch(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.db.delete_branch(id)?;
    Ok(StatusCode::NO_CONTENT)
}
