use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::Json;
use axum::Router;
use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::client::Client;
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/clients", post(create_client).get(list_clients))
        .route("/clients/:id", get(get_client))
}

#[derive(Deserialize)]
pub struct CreateClientRequest {
    pub phone_number: String,
    pub full_name: String,
}

async fn create_client(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateClientRequest>,
) -> Result<Json<Client>, AppError> {
    if payload.phone_number.trim().is_empty() {
        return Err(AppError::BadRequest("phone number cannot be empty".to_string()));
    }
    if payload.full_name.trim().is_empty() {
        return Err(AppError::BadRequest("name cannot be empty".to_string()));
    }

    let client = state.db.insert_client(Client {
        id: Uuid::new_v4(),
        phone_number: payload.phone_number,
        full_name: payload.full_name,
        is_verified: false,
        created_at: Utc::now(),
    })?;

    Ok(Json(client))
}

async fn list_clients(State(state): State<Arc<AppState>>) -> Json<Vec<Client>> {
    Json(state.db.list_clients())
}

async fn get_client(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Client>, AppError> {
    Ok(Json(state.db.get_client(id)?))
}
