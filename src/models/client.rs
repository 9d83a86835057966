use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A sender or receiver. The phone number is the natural key: clients are
/// created on first reference and never merged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    pub id: Uuid,
    pub phone_number: String,
    pub full_name: String,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
}
