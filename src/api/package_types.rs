use std::sync::Arc;

use axum::extract::State;
use axum::routing::post;
use axum::Json;
use axum::Router;
use serde::Deserialize;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::package_type::{PackageType, UnitType};
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/package-types", post(create_package_type).get(list_package_types))
}

#[derive(Deserialize)]
pub struct CreatePackageTypeRequest {
    pub name: String,
    /// One of WEIGHT, VOLUME, FLAT_RATE, ITEM_COUNT. Anything else is an
    /// invalid pricing rule.
    pub unit_type: String,
    pub price_per_unit: f64,
}

async fn create_package_type(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreatePackageTypeRequest>,
) -> Result<Json<PackageType>, AppError> {
    if payload.name.trim().is_empty() {
        return Err(AppError::BadRequest("name cannot be empty".to_string()));
    }
    if payload.price_per_unit < 0.0 {
        return Err(AppError::BadRequest(
            "price per unit cannot be negative".to_string(),
        ));
    }

    let unit_type: UnitType = payload.unit_type.parse()?;

    let package_type = state.db.insert_package_type(PackageType {
        id: Uuid::new_v4(),
        name: payload.name,
        unit_type,
        price_per_unit: payload.price_per_unit,
    });

    Ok(Json(package_type))
}

async fn list_package_types(State(state): State<Arc<AppState>>) -> Json<Vec<PackageType>> {
    Json(state.db.list_package_types())
}
