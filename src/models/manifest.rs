use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ManifestStatus {
    Pending,
    InTransit,
    Completed,
}

/// A single vehicle trip grouping shipments between two branches.
///
/// Vehicle and driver may be unassigned while the manifest is being
/// prepared; starting the trip requires both.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub id: Uuid,
    pub vehicle_id: Option<Uuid>,
    pub driver_id: Option<Uuid>,
    pub origin_id: Uuid,
    pub dest_id: Uuid,
    pub status: ManifestStatus,
    pub departure_time: Option<DateTime<Utc>>,
    pub arrival_time: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestItem {
    pub manifest_id: Uuid,
    pub shipment_id: Uuid,
}
