use std::sync::Arc;

use axum::extract::State;
use axum::routing::post;
use axum::Json;
use axum::Router;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::expense::Expense;
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/expenses", post(create_expense).get(list_expenses))
}

#[derive(Deserialize)]
pub struct CreateExpenseRequest {
    pub branch_id: Uuid,
    pub category: String,
    pub amount: f64,
    pub note: Option<String>,
    pub incurred_at: Option<DateTime<Utc>>,
}

async fn create_expense(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateExpenseRequest>,
) -> Result<Json<Expense>, AppError> {
    state.db.get_branch(payload.branch_id)?;
    if payload.amount < 0.0 {
        return Err(AppError::BadRequest("amount cannot be negative".to_string()));
    }
    if payload.category.trim().is_empty() {
        return Err(AppError::BadRequest("category cannot be empty".to_string()));
    }

    let expense = state.db.insert_expense(Expense {
        id: Uuid::new_v4(),
        branch_id: payload.branch_id,
        category: payload.category,
        amount: payload.amount,
        note: payload.note,
        incurred_at: payload.incurred_at.unwrap_or_else(Utc::now),
    });

    Ok(Json(expense))
}

async fn list_expenses(State(state): State<Arc<AppState>>) -> Json<Vec<Expense>> {
    Json(state.db.list_expenses())
}
