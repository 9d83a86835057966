use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VehicleType {
    Bike,
    Van,
    Bus,
    Truck,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: Uuid,
    pub plate_number: String,
    pub vehicle_type: VehicleType,
    pub capacity_kg: Option<f64>,
    pub is_trackable: bool,
    pub created_at: DateTime<Utc>,
}

/// Append-only GPS sample reported by a trackable vehicle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackingSample {
    pub vehicle_id: Uuid,
    pub latitude: f64,
    pub longitude: f64,
    pub recorded_at: DateTime<Utc>,
}
