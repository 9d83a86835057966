use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::header;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::Json;
use axum::Router;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;
use crate::models::notification::{Channel, DeliveryRecord, DeliveryStatus, NotifyEvent};
use crate::models::shipment::{Shipment, ShipmentStatus};
use crate::models::transaction::{PaymentMethod, Transaction};
use crate::ops::shipments::{self, NewShipment, PartyInput};
use crate::receipt::{self, ReceiptView};
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/shipments", post(create_shipment).get(list_shipments))
        .route("/shipments/:tracking_no", get(get_shipment))
        .route("/shipments/:tracking_no/transition", post(transition_shipment))
        .route("/shipments/:tracking_no/payment", post(record_payment))
        .route("/shipments/:tracking_no/notify", post(notify_shipment))
        .route("/shipments/:tracking_no/receipt", get(shipment_receipt))
        .route(
            "/shipments/:tracking_no/notifications",
            get(list_notifications),
        )
}

#[derive(Deserialize)]
pub struct PartyRequest {
    pub full_name: String,
    pub phone_number: String,
}

#[derive(Deserialize)]
pub struct CreateShipmentRequest {
    pub sender: PartyRequest,
    pub receiver: PartyRequest,
    pub origin_id: Uuid,
    pub dest_id: Uuid,
    pub package_type_id: Uuid,
    pub quantity: Option<u32>,
    pub total_weight: Option<f64>,
    pub total_volume: Option<f64>,
}

#[derive(Deserialize)]
pub struct TransitionRequest {
    pub status: ShipmentStatus,
}

#[derive(Deserialize)]
pub struct PaymentRequest {
    pub method: PaymentMethod,
    pub amount: f64,
    pub tax_amount: Option<f64>,
}

#[derive(Deserialize)]
pub struct NotifyRequest {
    pub event: NotifyEvent,
    pub channel: Channel,
}

#[derive(Serialize)]
pub struct NotifyResponse {
    pub status: DeliveryStatus,
}

#[derive(Deserialize)]
pub struct ReceiptQuery {
    pub format: Option<String>,
    pub width: Option<usize>,
}

fn party(input: PartyRequest, role: &str) -> Result<PartyInput, AppError> {
    if input.full_name.trim().is_empty() {
        return Err(AppError::BadRequest(format!("{role} name cannot be empty")));
    }
    if input.phone_number.trim().is_empty() {
        return Err(AppError::BadRequest(format!("{role} phone cannot be empty")));
    }
    Ok(PartyInput {
        full_name: input.full_name,
        phone_number: input.phone_number,
    })
}

async fn create_shipment(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateShipmentRequest>,
) -> Result<Json<Shipment>, AppError> {
    let input = NewShipment {
        sender: party(payload.sender, "sender")?,
        receiver: party(payload.receiver, "receiver")?,
        origin_id: payload.origin_id,
        dest_id: payload.dest_id,
        package_type_id: payload.package_type_id,
        quantity: payload.quantity,
        total_weight: payload.total_weight,
        total_volume: payload.total_volume,
    };

    let shipment = shipments::create_shipment(&state, input).await?;
    Ok(Json(shipment))
}

async fn list_shipments(State(state): State<Arc<AppState>>) -> Json<Vec<Shipment>> {
    Json(state.db.list_shipments())
}

async fn get_shipment(
    State(state): State<Arc<AppState>>,
    Path(tracking_no): Path<String>,
) -> Result<Json<Shipment>, AppError> {
    Ok(Json(state.db.get_shipment_by_tracking(&tracking_no)?))
}

async fn transition_shipment(
    State(state): State<Arc<AppState>>,
    Path(tracking_no): Path<String>,
    Json(payload): Json<TransitionRequest>,
) -> Result<Json<Shipment>, AppError> {
    let shipment = shipments::transition_shipment(&state, &tracking_no, payload.status).await?;
    Ok(Json(shipment))
}

async fn record_payment(
    State(state): State<Arc<AppState>>,
    Path(tracking_no): Path<String>,
    Json(payload): Json<PaymentRequest>,
) -> Result<Json<Transaction>, AppError> {
    let txn = shipments::record_payment(
        &state,
        &tracking_no,
        payload.method,
        payload.amount,
        payload.tax_amount.unwrap_or(0.0),
    )?;
    Ok(Json(txn))
}

async fn notify_shipment(
    State(state): State<Arc<AppState>>,
    Path(tracking_no): Path<String>,
    Json(payload): Json<NotifyRequest>,
) -> Result<Json<NotifyResponse>, AppError> {
    let shipment = state.db.get_shipment_by_tracking(&tracking_no)?;
    let receiver = state.db.get_client(shipment.receiver_id)?;

    let status = state
        .notifier
        .dispatch(
            &state.db,
            &payload.event,
            &shipment,
            &receiver,
            payload.channel,
        )
        .await;
    state
        .metrics
        .notifications_total
        .with_label_values(&[payload.channel.label(), status.label()])
        .inc();

    Ok(Json(NotifyResponse { status }))
}

async fn list_notifications(
    State(state): State<Arc<AppState>>,
    Path(tracking_no): Path<String>,
) -> Result<Json<Vec<DeliveryRecord>>, AppError> {
    state.db.get_shipment_by_tracking(&tracking_no)?;
    Ok(Json(state.db.delivery_records_for(&tracking_no)))
}

async fn shipment_receipt(
    State(state): State<Arc<AppState>>,
    Path(tracking_no): Path<String>,
    Query(query): Query<ReceiptQuery>,
) -> Result<Response, AppError> {
    let shipment = state.db.get_shipment_by_tracking(&tracking_no)?;
    let sender = state.db.get_client(shipment.sender_id)?;
    let receiver = state.db.get_client(shipment.receiver_id)?;
    let origin = state.db.get_branch(shipment.origin_id)?;
    let dest = state.db.get_branch(shipment.dest_id)?;
    let package_type = state.db.get_package_type(shipment.package_type_id)?;

    let driver_name = state
        .db
        .latest_manifest_for(shipment.id)
        .and_then(|m| m.driver_id)
        .and_then(|driver_id| state.db.get_driver(driver_id).ok())
        .map(|driver| driver.full_name);

    let view = ReceiptView {
        tracking_no: shipment.tracking_no.clone(),
        status: shipment.status,
        sender_name: sender.full_name,
        sender_phone: sender.phone_number,
        receiver_name: receiver.full_name,
        receiver_phone: receiver.phone_number,
        origin: origin.name,
        dest: dest.name,
        package_type: package_type.name,
        quantity: shipment.quantity,
        weight: shipment.total_weight,
        total_cost: shipment.total_cost,
        currency: state.config.currency.clone(),
        created_at: shipment.created_at,
        delivered_at: (shipment.status == ShipmentStatus::Delivered)
            .then_some(shipment.updated_at),
        driver_name,
    };

    match query.format.as_deref().unwrap_or("text") {
        "html" => Ok(Html(receipt::render_html(&view)).into_response()),
        "text" => {
            let width = query.width.unwrap_or(origin.printer_type.line_width());
            if width != 32 && width != 48 {
                return Err(AppError::BadRequest(
                    "width must be 32 or 48".to_string(),
                ));
            }
            let body = receipt::render_text(&view, width);
            Ok((
                [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                body,
            )
                .into_response())
        }
        other => Err(AppError::BadRequest(format!("unknown format: {other}"))),
    }
}
