use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    Cash,
    Card,
    MobileMoney,
    BankTransfer,
}

/// Recorded payment for a shipment. At most one per shipment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    pub shipment_id: Uuid,
    pub method: PaymentMethod,
    pub amount: f64,
    pub tax_amount: f64,
    pub created_at: DateTime<Utc>,
}
