use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::AppError;
use crate::geo::route_length_km;
use crate::models::shipment::ShipmentStatus;
use crate::models::transaction::Transaction;
use crate::models::vehicle::TrackingSample;
use crate::store::Database;

/// What the public tracking page sees for one tracking number.
#[derive(Debug, Clone, Serialize)]
pub struct TrackingView {
    pub tracking_no: String,
    pub status: ShipmentStatus,
    pub updated_at: DateTime<Utc>,
    pub route: Vec<TrackingSample>,
    pub route_km: f64,
    pub payment: Option<Transaction>,
}

/// Read-only lookup: current status, the vehicle's samples within the
/// manifest's travel window, and the recorded payment. No side effects.
pub fn track(db: &Database, tracking_no: &str) -> Result<TrackingView, AppError> {
    let shipment = db.get_shipment_by_tracking(tracking_no)?;
    let manifest = db.latest_manifest_for(shipment.id);

    let route = match manifest.as_ref() {
        Some(manifest) => match (manifest.vehicle_id, manifest.departure_time) {
            (Some(vehicle_id), Some(departure)) => {
                let until = manifest.arrival_time.unwrap_or_else(Utc::now);
                db.samples_between(vehicle_id, departure, until)
            }
            _ => Vec::new(),
        },
        None => Vec::new(),
    };

    let route_km = route_length_km(&route);

    Ok(TrackingView {
        tracking_no: shipment.tracking_no.clone(),
        status: shipment.status,
        updated_at: shipment.updated_at,
        route,
        route_km,
        payment: db.payment_for_shipment(shipment.id),
    })
}
