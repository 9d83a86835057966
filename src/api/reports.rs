use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Json;
use axum::Router;
use chrono::Utc;
use serde::Deserialize;

use crate::error::AppError;
use crate::ops::reports::{delayed_shipments, to_csv};
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/reports/delayed", get(delayed_report))
}

#[derive(Deserialize)]
pub struct DelayedReportQuery {
    pub threshold: Option<i64>,
    pub format: Option<String>,
}

async fn delayed_report(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DelayedReportQuery>,
) -> Result<Response, AppError> {
    let threshold = query.threshold.unwrap_or(state.config.delay_threshold_hours);
    if threshold < 0 {
        return Err(AppError::BadRequest("threshold cannot be negative".to_string()));
    }

    let rows = delayed_shipments(&state.db, threshold, Utc::now());

    match query.format.as_deref().unwrap_or("json") {
        "json" => Ok(Json(rows).into_response()),
        "csv" => Ok((
            [(header::CONTENT_TYPE, "text/csv; charset=utf-8")],
            to_csv(&rows),
        )
            .into_response()),
        other => Err(AppError::BadRequest(format!("unknown format: {other}"))),
    }
}
