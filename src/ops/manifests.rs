use chrono::{DateTime, Utc};
use tracing::info;
use uuid::Uuid;

use crate::domain::lifecycle::validate_manifest_transition;
use crate::error::AppError;
use crate::models::manifest::{Manifest, ManifestStatus};
use crate::models::shipment::ShipmentStatus;
use crate::ops::shipments::transition_shipment;
use crate::state::AppState;

#[derive(Debug, Clone)]
pub struct NewManifest {
    pub vehicle_id: Option<Uuid>,
    pub driver_id: Option<Uuid>,
    pub origin_id: Uuid,
    pub dest_id: Uuid,
    pub departure_time: Option<DateTime<Utc>>,
}

pub fn create_manifest(state: &AppState, input: NewManifest) -> Result<Manifest, AppError> {
    state.db.get_branch(input.origin_id)?;
    state.db.get_branch(input.dest_id)?;
    if let Some(vehicle_id) = input.vehicle_id {
        state.db.get_vehicle(vehicle_id)?;
    }
    if let Some(driver_id) = input.driver_id {
        state.db.get_driver(driver_id)?;
    }

    Ok(state.db.insert_manifest(Manifest {
        id: Uuid::new_v4(),
        vehicle_id: input.vehicle_id,
        driver_id: input.driver_id,
        origin_id: input.origin_id,
        dest_id: input.dest_id,
        status: ManifestStatus::Pending,
        departure_time: input.departure_time,
        arrival_time: None,
        created_at: Utc::now(),
    }))
}

/// Put a shipment on a manifest. Only a pending manifest accepts changes,
/// and a shipment can sit on at most one active manifest.
pub fn add_shipment(state: &AppState, manifest_id: Uuid, tracking_no: &str) -> Result<(), AppError> {
    let manifest = state.db.get_manifest(manifest_id)?;
    if manifest.status != ManifestStatus::Pending {
        return Err(AppError::ManifestLocked(manifest_id));
    }

    let shipment = state.db.get_shipment_by_tracking(tracking_no)?;
    if shipment.status.is_terminal() {
        return Err(AppError::BadRequest(format!(
            "shipment {} is {:?} and cannot be manifested",
            tracking_no, shipment.status
        )));
    }

    state.db.link_shipment(manifest_id, &shipment)?;
    info!(manifest_id = %manifest_id, tracking_no = %tracking_no, "shipment manifested");
    Ok(())
}

pub fn remove_shipment(
    state: &AppState,
    manifest_id: Uuid,
    tracking_no: &str,
) -> Result<(), AppError> {
    let manifest = state.db.get_manifest(manifest_id)?;
    if manifest.status != ManifestStatus::Pending {
        return Err(AppError::ManifestLocked(manifest_id));
    }

    let shipment = state.db.get_shipment_by_tracking(tracking_no)?;
    state.db.unlink_shipment(manifest_id, shipment.id, tracking_no)
}

/// Start the trip. Requires a vehicle, a driver and at least one shipment;
/// stamps the departure time if it was not scheduled, then moves every
/// pending shipment on board into transit. Cancelled shipments stay put.
pub async fn start_trip(state: &AppState, manifest_id: Uuid) -> Result<Manifest, AppError> {
    let manifest = state.db.get_manifest(manifest_id)?;
    validate_manifest_transition(manifest.status, ManifestStatus::InTransit)?;

    if manifest.vehicle_id.is_none() || manifest.driver_id.is_none() {
        return Err(AppError::BadRequest(format!(
            "manifest {} needs a vehicle and a driver before departure",
            manifest_id
        )));
    }

    let on_board = state.db.shipments_on_manifest(manifest_id);
    if on_board.is_empty() {
        return Err(AppError::BadRequest(format!(
            "manifest {} has no shipments",
            manifest_id
        )));
    }

    let updated = state.db.update_manifest(manifest_id, |m| {
        m.status = ManifestStatus::InTransit;
        if m.departure_time.is_none() {
            m.departure_time = Some(Utc::now());
        }
    })?;

    for shipment in on_board {
        if shipment.status == ShipmentStatus::Pending {
            transition_shipment(state, &shipment.tracking_no, ShipmentStatus::InTransit).await?;
        }
    }

    info!(manifest_id = %manifest_id, "trip started");
    Ok(updated)
}

/// Complete the trip: stamp the arrival and move every in-transit shipment
/// on board to arrived. Cancelled shipments are skipped, not errored.
pub async fn complete_trip(state: &AppState, manifest_id: Uuid) -> Result<Manifest, AppError> {
    let manifest = state.db.get_manifest(manifest_id)?;
    validate_manifest_transition(manifest.status, ManifestStatus::Completed)?;

    let on_board = state.db.shipments_on_manifest(manifest_id);

    let updated = state.db.update_manifest(manifest_id, |m| {
        m.status = ManifestStatus::Completed;
        let now = Utc::now();
        // a scheduled departure may still be in the future; arrival never precedes it
        m.arrival_time = Some(m.departure_time.map_or(now, |d| now.max(d)));
    })?;

    for shipment in on_board {
        if shipment.status == ShipmentStatus::InTransit {
            transition_shipment(state, &shipment.tracking_no, ShipmentStatus::Arrived).await?;
        }
    }

    state.metrics.manifests_completed_total.inc();
    info!(manifest_id = %manifest_id, "trip completed");
    Ok(updated)
}
