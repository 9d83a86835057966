use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::domain::lifecycle::validate_shipment_transition;
use crate::domain::pricing::calculate_cost;
use crate::domain::tracking_no::generate_tracking_number;
use crate::error::AppError;
use crate::models::notification::{Channel, NotifyEvent};
use crate::models::shipment::{Shipment, ShipmentStatus, StatusEvent};
use crate::models::transaction::{PaymentMethod, Transaction};
use crate::state::AppState;

#[derive(Debug, Clone)]
pub struct PartyInput {
    pub full_name: String,
    pub phone_number: String,
}

#[derive(Debug, Clone)]
pub struct NewShipment {
    pub sender: PartyInput,
    pub receiver: PartyInput,
    pub origin_id: Uuid,
    pub dest_id: Uuid,
    pub package_type_id: Uuid,
    pub quantity: Option<u32>,
    pub total_weight: Option<f64>,
    pub total_volume: Option<f64>,
}

/// Register a shipment: resolve both parties by phone, price the package,
/// then claim a tracking number. Number generation retries on collision up
/// to the configured budget before giving up.
pub async fn create_shipment(state: &AppState, input: NewShipment) -> Result<Shipment, AppError> {
    state.db.get_branch(input.origin_id)?;
    state.db.get_branch(input.dest_id)?;
    let package_type = state.db.get_package_type(input.package_type_id)?;

    let quantity = input.quantity.unwrap_or(1);
    if quantity == 0 {
        return Err(AppError::BadRequest("quantity must be > 0".to_string()));
    }
    if input.total_weight.is_some_and(|w| w < 0.0) {
        return Err(AppError::BadRequest("weight cannot be negative".to_string()));
    }
    if input.total_volume.is_some_and(|v| v < 0.0) {
        return Err(AppError::BadRequest("volume cannot be negative".to_string()));
    }

    let sender = state
        .db
        .upsert_client_by_phone(&input.sender.phone_number, &input.sender.full_name)?;
    let receiver = state
        .db
        .upsert_client_by_phone(&input.receiver.phone_number, &input.receiver.full_name)?;

    let total_cost = calculate_cost(
        &package_type,
        quantity,
        input.total_weight,
        input.total_volume,
    );

    let budget = state.config.tracking_retry_budget;
    let mut inserted = None;

    for _attempt in 0..budget {
        let now = Utc::now();
        let candidate = Shipment {
            id: Uuid::new_v4(),
            tracking_no: generate_tracking_number(),
            status: ShipmentStatus::Pending,
            sender_id: sender.id,
            receiver_id: receiver.id,
            origin_id: input.origin_id,
            dest_id: input.dest_id,
            package_type_id: input.package_type_id,
            quantity,
            total_weight: input.total_weight,
            total_volume: input.total_volume,
            total_cost,
            created_at: now,
            updated_at: now,
        };

        match state.db.insert_shipment(candidate) {
            Ok(shipment) => {
                inserted = Some(shipment);
                break;
            }
            Err(AppError::DuplicateKey(_)) => {
                state.metrics.tracking_collisions_total.inc();
            }
            Err(err) => return Err(err),
        }
    }

    let shipment = inserted.ok_or(AppError::GenerationExhausted(budget))?;

    state.metrics.shipments_created_total.inc();
    let _ = state.status_events_tx.send(StatusEvent {
        tracking_no: shipment.tracking_no.clone(),
        status: shipment.status,
        at: shipment.created_at,
    });

    info!(
        tracking_no = %shipment.tracking_no,
        cost = shipment.total_cost,
        "shipment registered"
    );

    let outcome = state
        .notifier
        .dispatch(
            &state.db,
            &NotifyEvent::Created,
            &shipment,
            &receiver,
            Channel::Sms,
        )
        .await;
    state
        .metrics
        .notifications_total
        .with_label_values(&[Channel::Sms.label(), outcome.label()])
        .inc();

    Ok(shipment)
}

/// Apply one status change. Illegal requests are rejected before anything
/// is written; entering transit requires an active manifest link. The
/// follow-up notification is best-effort and never rolls the change back.
pub async fn transition_shipment(
    state: &AppState,
    tracking_no: &str,
    target: ShipmentStatus,
) -> Result<Shipment, AppError> {
    let shipment = state.db.get_shipment_by_tracking(tracking_no)?;
    let status_label = format!("{target:?}");

    let guard = validate_shipment_transition(shipment.status, target).and_then(|()| {
        if target == ShipmentStatus::InTransit
            && state.db.active_manifest_for(shipment.id).is_none()
        {
            Err(AppError::UnassignedShipment(tracking_no.to_string()))
        } else {
            Ok(())
        }
    });

    if let Err(err) = guard {
        state
            .metrics
            .status_transitions_total
            .with_label_values(&[&status_label, "rejected"])
            .inc();
        return Err(err);
    }

    let updated = state.db.update_shipment(shipment.id, |s| {
        s.status = target;
        s.updated_at = Utc::now();
    })?;

    state
        .metrics
        .status_transitions_total
        .with_label_values(&[&status_label, "applied"])
        .inc();
    let _ = state.status_events_tx.send(StatusEvent {
        tracking_no: updated.tracking_no.clone(),
        status: updated.status,
        at: updated.updated_at,
    });

    info!(tracking_no = %updated.tracking_no, status = %status_label, "shipment transitioned");

    if let Some(event) = event_for_status(target) {
        let receiver = state.db.get_client(updated.receiver_id)?;
        let outcome = state
            .notifier
            .dispatch(&state.db, &event, &updated, &receiver, Channel::Sms)
            .await;
        state
            .metrics
            .notifications_total
            .with_label_values(&[Channel::Sms.label(), outcome.label()])
            .inc();
    }

    Ok(updated)
}

/// Notification event announced for a newly reached status.
fn event_for_status(status: ShipmentStatus) -> Option<NotifyEvent> {
    match status {
        ShipmentStatus::InTransit => Some(NotifyEvent::InTransit),
        ShipmentStatus::Delivered => Some(NotifyEvent::Delivered),
        ShipmentStatus::Cancelled => Some(NotifyEvent::Failed),
        ShipmentStatus::Arrived => Some(NotifyEvent::Custom(
            "arrived at destination branch".to_string(),
        )),
        ShipmentStatus::Pending => None,
    }
}

pub fn record_payment(
    state: &AppState,
    tracking_no: &str,
    method: PaymentMethod,
    amount: f64,
    tax_amount: f64,
) -> Result<Transaction, AppError> {
    if amount < 0.0 || tax_amount < 0.0 {
        return Err(AppError::BadRequest("amounts cannot be negative".to_string()));
    }

    let shipment = state.db.get_shipment_by_tracking(tracking_no)?;
    state.db.record_payment(Transaction {
        id: Uuid::new_v4(),
        shipment_id: shipment.id,
        method,
        amount,
        tax_amount,
        created_at: Utc::now(),
    })
}
