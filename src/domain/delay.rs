use chrono::{DateTime, Duration, Utc};

use crate::models::manifest::Manifest;
use crate::models::shipment::Shipment;

/// Decide whether a shipment counts as delayed at `now`.
///
/// Terminal shipments are never delayed. Otherwise, in order: a manifest
/// arrival in the past means the shipment reached its destination branch
/// and is still not delivered; a departure older than the threshold means
/// the trip is overdue; an unmanifested shipment is overdue once its
/// creation is older than the threshold.
pub fn is_delayed(
    shipment: &Shipment,
    manifest: Option<&Manifest>,
    threshold: Duration,
    now: DateTime<Utc>,
) -> bool {
    if shipment.status.is_terminal() {
        return false;
    }

    if let Some(manifest) = manifest {
        if let Some(arrival) = manifest.arrival_time {
            if arrival < now {
                return true;
            }
        }
        if let Some(departure) = manifest.departure_time {
            return departure + threshold < now;
        }
    }

    shipment.created_at + threshold < now
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use uuid::Uuid;

    use super::is_delayed;
    use crate::models::manifest::{Manifest, ManifestStatus};
    use crate::models::shipment::{Shipment, ShipmentStatus};

    fn shipment(status: ShipmentStatus, age_hours: i64) -> Shipment {
        let created = Utc::now() - Duration::hours(age_hours);
        Shipment {
            id: Uuid::from_u128(1),
            tracking_no: "TRKA1B2".to_string(),
            status,
            sender_id: Uuid::from_u128(2),
            receiver_id: Uuid::from_u128(3),
            origin_id: Uuid::from_u128(4),
            dest_id: Uuid::from_u128(5),
            package_type_id: Uuid::from_u128(6),
            quantity: 1,
            total_weight: Some(1.0),
            total_volume: None,
            total_cost: 500.0,
            created_at: created,
            updated_at: created,
        }
    }

    fn manifest(departure_hours_ago: Option<i64>, arrival_hours_ago: Option<i64>) -> Manifest {
        let now = Utc::now();
        Manifest {
            id: Uuid::from_u128(10),
            vehicle_id: Some(Uuid::from_u128(11)),
            driver_id: Some(Uuid::from_u128(12)),
            origin_id: Uuid::from_u128(4),
            dest_id: Uuid::from_u128(5),
            status: ManifestStatus::InTransit,
            departure_time: departure_hours_ago.map(|h| now - Duration::hours(h)),
            arrival_time: arrival_hours_ago.map(|h| now - Duration::hours(h)),
            created_at: now - Duration::hours(72),
        }
    }

    #[test]
    fn unmanifested_shipment_older_than_threshold_is_delayed() {
        let s = shipment(ShipmentStatus::Pending, 50);
        assert!(is_delayed(&s, None, Duration::hours(48), Utc::now()));
    }

    #[test]
    fn delivered_shipment_is_never_delayed() {
        let s = shipment(ShipmentStatus::Delivered, 50);
        assert!(!is_delayed(&s, None, Duration::hours(48), Utc::now()));
    }

    #[test]
    fn cancelled_shipment_is_never_delayed() {
        let s = shipment(ShipmentStatus::Cancelled, 500);
        let m = manifest(Some(400), Some(300));
        assert!(!is_delayed(&s, Some(&m), Duration::hours(48), Utc::now()));
    }

    #[test]
    fn fresh_unmanifested_shipment_is_not_delayed() {
        let s = shipment(ShipmentStatus::Pending, 10);
        assert!(!is_delayed(&s, None, Duration::hours(48), Utc::now()));
    }

    #[test]
    fn arrival_in_the_past_means_delayed_regardless_of_threshold() {
        let s = shipment(ShipmentStatus::Arrived, 10);
        let m = manifest(Some(8), Some(2));
        assert!(is_delayed(&s, Some(&m), Duration::hours(48), Utc::now()));
    }

    #[test]
    fn departure_within_threshold_is_not_delayed() {
        let s = shipment(ShipmentStatus::InTransit, 100);
        let m = manifest(Some(10), None);
        assert!(!is_delayed(&s, Some(&m), Duration::hours(48), Utc::now()));
    }

    #[test]
    fn departure_older_than_threshold_is_delayed() {
        let s = shipment(ShipmentStatus::InTransit, 100);
        let m = manifest(Some(49), None);
        assert!(is_delayed(&s, Some(&m), Duration::hours(48), Utc::now()));
    }

    #[test]
    fn manifest_without_departure_falls_back_to_creation_age() {
        let s = shipment(ShipmentStatus::Pending, 50);
        let m = Manifest {
            status: ManifestStatus::Pending,
            departure_time: None,
            arrival_time: None,
            ..manifest(None, None)
        };
        assert!(is_delayed(&s, Some(&m), Duration::hours(48), Utc::now()));
    }
}
