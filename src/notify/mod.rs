pub mod provider;
pub mod templates;

use std::sync::Arc;

use chrono::Utc;
use tracing::warn;
use uuid::Uuid;

use crate::models::client::Client;
use crate::models::notification::{Channel, DeliveryRecord, DeliveryStatus, NotifyEvent};
use crate::models::shipment::Shipment;
use crate::notify::provider::DeliveryProvider;
use crate::store::Database;

/// Per-channel enable flags, passed in explicitly rather than read from
/// process-global state, so each caller decides what it is allowed to send.
#[derive(Debug, Clone, Copy)]
pub struct NotifyConfig {
    pub enable_sms: bool,
    pub enable_whatsapp: bool,
}

impl NotifyConfig {
    pub fn allows(self, channel: Channel) -> bool {
        match channel {
            Channel::Sms => self.enable_sms,
            Channel::Whatsapp => self.enable_whatsapp,
        }
    }
}

pub struct Notifier {
    config: NotifyConfig,
    provider: Arc<dyn DeliveryProvider>,
}

impl Notifier {
    pub fn new(config: NotifyConfig, provider: Arc<dyn DeliveryProvider>) -> Self {
        Self { config, provider }
    }

    /// Best-effort dispatch of one event to one recipient over one channel.
    ///
    /// A disabled channel is a no-op recorded as `Skipped`. Provider
    /// failures are recorded as `Failed` and never surface to the caller;
    /// the triggering state change has already happened and must not be
    /// rolled back.
    pub async fn dispatch(
        &self,
        db: &Database,
        event: &NotifyEvent,
        shipment: &Shipment,
        recipient: &Client,
        channel: Channel,
    ) -> DeliveryStatus {
        let body = templates::render(event, shipment, recipient);

        let status = if !self.config.allows(channel) {
            DeliveryStatus::Skipped
        } else {
            match self
                .provider
                .send(channel, &recipient.phone_number, &body)
                .await
            {
                Ok(_) => DeliveryStatus::Sent,
                Err(err) => {
                    warn!(
                        tracking_no = %shipment.tracking_no,
                        channel = channel.label(),
                        error = %err,
                        "notification delivery failed"
                    );
                    DeliveryStatus::Failed
                }
            }
        };

        db.push_delivery_record(DeliveryRecord {
            id: Uuid::new_v4(),
            tracking_no: shipment.tracking_no.clone(),
            channel,
            recipient: recipient.phone_number.clone(),
            template: event.template_name().to_string(),
            body,
            status,
            created_at: Utc::now(),
        });

        status
    }
}
