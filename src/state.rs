use std::sync::Arc;

use tokio::sync::broadcast;

use crate::config::Config;
use crate::models::shipment::StatusEvent;
use crate::notify::provider::DeliveryProvider;
use crate::notify::{Notifier, NotifyConfig};
use crate::observability::metrics::Metrics;
use crate::store::Database;

pub struct AppState {
    pub config: Config,
    pub db: Database,
    pub notifier: Notifier,
    pub metrics: Metrics,
    pub status_events_tx: broadcast::Sender<StatusEvent>,
}

impl AppState {
    pub fn new(config: Config, provider: Arc<dyn DeliveryProvider>) -> Self {
        let (status_events_tx, _unused_rx) = broadcast::channel(config.event_buffer_size);

        let notifier = Notifier::new(
            NotifyConfig {
                enable_sms: config.enable_sms,
                enable_whatsapp: config.enable_whatsapp,
            },
            provider,
        );

        Self {
            config,
            db: Database::new(),
            notifier,
            metrics: Metrics::new(),
            status_events_tx,
        }
    }
}
