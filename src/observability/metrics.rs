use prometheus::{Encoder, IntCounter, IntCounterVec, Opts, Registry, TextEncoder};

#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    pub shipments_created_total: IntCounter,
    pub status_transitions_total: IntCounterVec,
    pub notifications_total: IntCounterVec,
    pub tracking_collisions_total: IntCounter,
    pub manifests_completed_total: IntCounter,
}

impl Metrics {
    pub fn new() -> Self {
        let registry = Registry::new();

        let shipments_created_total = IntCounter::new(
            "shipments_created_total",
            "Total shipments registered",
        )
        .expect("valid shipments_created_total metric");

        let status_transitions_total = IntCounterVec::new(
            Opts::new(
                "status_transitions_total",
                "Shipment status transition attempts by target status and outcome",
            ),
            &["status", "outcome"],
        )
        .expect("valid status_transitions_total metric");

        let notifications_total = IntCounterVec::new(
            Opts::new(
                "notifications_total",
                "Notification dispatches by channel and outcome",
            ),
            &["channel", "outcome"],
        )
        .expect("valid notifications_total metric");

        let tracking_collisions_total = IntCounter::new(
            "tracking_collisions_total",
            "Tracking number collisions retried during generation",
        )
        .expect("valid tracking_collisions_total metric");

        let manifests_completed_total = IntCounter::new(
            "manifests_completed_total",
            "Trips completed",
        )
        .expect("valid manifests_completed_total metric");

        registry
            .register(Box::new(shipments_created_total.clone()))
            .expect("register shipments_created_total");
        registry
            .register(Box::new(status_transitions_total.clone()))
            .expect("register status_transitions_total");
        registry
            .register(Box::new(notifications_total.clone()))
            .expect("register notifications_total");
        registry
            .register(Box::new(tracking_collisions_total.clone()))
            .expect("register tracking_collisions_total");
        registry
            .register(Box::new(manifests_completed_total.clone()))
            .expect("register manifests_completed_total");

        Self {
            registry,
            shipments_created_total,
            status_transitions_total,
            notifications_total,
            tracking_collisions_total,
            manifests_completed_total,
        }
    }

    pub fn encode(&self) -> Result<String, String> {
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();

        TextEncoder::new()
            .encode(&metric_families, &mut buffer)
            .map_err(|err| format!("failed to encode metrics: {err}"))?;

        String::from_utf8(buffer).map_err(|err| format!("metrics are not valid utf8: {err}"))
    }
}
