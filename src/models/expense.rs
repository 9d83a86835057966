use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    pub id: Uuid,
    pub branch_id: Uuid,
    pub category: String,
    pub amount: f64,
    pub note: Option<String>,
    pub incurred_at: DateTime<Utc>,
}
