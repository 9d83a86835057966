use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;

use crate::error::AppError;
use crate::ops::tracking::{self, TrackingView};
use crate::state::AppState;

/// Public, read-only lookup backing the tracking page.
pub async fn track_shipment(
    State(state): State<Arc<AppState>>,
    Path(tracking_no): Path<String>,
) -> Result<Json<TrackingView>, AppError> {
    Ok(Json(tracking::track(&state.db, &tracking_no)?))
}
