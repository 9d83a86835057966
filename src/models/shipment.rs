use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShipmentStatus {
    Pending,
    InTransit,
    Arrived,
    Delivered,
    Cancelled,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shipment {
    pub id: Uuid,
    pub tracking_no: String,
    pub status: ShipmentStatus,
    pub sender_id: Uuid,
    pub receiver_id: Uuid,
    pub origin_id: Uuid,
    pub dest_id: Uuid,
    pub package_type_id: Uuid,
    pub quantity: u32,
    pub total_weight: Option<f64>,
    pub total_volume: Option<f64>,
    pub total_cost: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Broadcast to websocket subscribers whenever a shipment changes status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusEvent {
    pub tracking_no: String,
    pub status: ShipmentStatus,
    pub at: DateTime<Utc>,
}
