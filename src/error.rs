use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("invalid transition from {from} to {to}")]
    InvalidTransition { from: String, to: String },

    #[error("shipment {0} is not assigned to a manifest")]
    UnassignedShipment(String),

    #[error("shipment {0} already belongs to an active manifest")]
    AlreadyAssigned(String),

    #[error("manifest {0} no longer accepts shipment changes")]
    ManifestLocked(Uuid),

    #[error("unknown unit type: {0}")]
    InvalidPricingRule(String),

    #[error("duplicate key: {0}")]
    DuplicateKey(String),

    #[error("tracking number generation exhausted after {0} attempts")]
    GenerationExhausted(u32),

    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Conflict(_)
            | AppError::InvalidTransition { .. }
            | AppError::AlreadyAssigned(_)
            | AppError::ManifestLocked(_)
            | AppError::DuplicateKey(_) => StatusCode::CONFLICT,
            AppError::UnassignedShipment(_) | AppError::InvalidPricingRule(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::GenerationExhausted(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}
