use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Channel {
    Sms,
    Whatsapp,
}

impl Channel {
    pub fn label(self) -> &'static str {
        match self {
            Channel::Sms => "sms",
            Channel::Whatsapp => "whatsapp",
        }
    }
}

/// Lifecycle event a notification is keyed to. `Custom` carries the
/// operator-supplied message body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotifyEvent {
    Created,
    InTransit,
    Delivered,
    Failed,
    Delayed,
    Custom(String),
}

impl NotifyEvent {
    pub fn template_name(&self) -> &'static str {
        match self {
            NotifyEvent::Created => "created",
            NotifyEvent::InTransit => "in_transit",
            NotifyEvent::Delivered => "delivered",
            NotifyEvent::Failed => "failed",
            NotifyEvent::Delayed => "delayed",
            NotifyEvent::Custom(_) => "custom",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeliveryStatus {
    Sent,
    Failed,
    Skipped,
}

impl DeliveryStatus {
    pub fn label(self) -> &'static str {
        match self {
            DeliveryStatus::Sent => "sent",
            DeliveryStatus::Failed => "failed",
            DeliveryStatus::Skipped => "skipped",
        }
    }
}

/// Outcome of a dispatch attempt, persisted regardless of provider success
/// so failed sends stay observable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryRecord {
    pub id: Uuid,
    pub tracking_no: String,
    pub channel: Channel,
    pub recipient: String,
    pub template: String,
    pub body: String,
    pub status: DeliveryStatus,
    pub created_at: DateTime<Utc>,
}
