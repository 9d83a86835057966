use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::delay::is_delayed;
use crate::models::shipment::ShipmentStatus;
use crate::store::Database;

#[derive(Debug, Clone, Serialize)]
pub struct DelayedShipmentRow {
    pub tracking_no: String,
    pub status: ShipmentStatus,
    pub manifest_id: Option<Uuid>,
    pub departure_time: Option<DateTime<Utc>>,
    pub arrival_time: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Non-terminal shipments whose transit has outrun the threshold, per the
/// delay predicate. Rows are ordered oldest first.
pub fn delayed_shipments(
    db: &Database,
    threshold_hours: i64,
    now: DateTime<Utc>,
) -> Vec<DelayedShipmentRow> {
    let threshold = Duration::hours(threshold_hours);

    let mut rows: Vec<DelayedShipmentRow> = db
        .list_shipments()
        .into_iter()
        .filter_map(|shipment| {
            let manifest = db.latest_manifest_for(shipment.id);
            if !is_delayed(&shipment, manifest.as_ref(), threshold, now) {
                return None;
            }
            Some(DelayedShipmentRow {
                tracking_no: shipment.tracking_no,
                status: shipment.status,
                manifest_id: manifest.as_ref().map(|m| m.id),
                departure_time: manifest.as_ref().and_then(|m| m.departure_time),
                arrival_time: manifest.as_ref().and_then(|m| m.arrival_time),
                created_at: shipment.created_at,
            })
        })
        .collect();

    rows.sort_by_key(|row| row.created_at);
    rows
}

/// CSV export. Every field is machine-formatted (tracking numbers, UUIDs,
/// RFC 3339 timestamps), so no quoting is needed.
pub fn to_csv(rows: &[DelayedShipmentRow]) -> String {
    let mut out = String::from(
        "tracking_no,status,manifest_id,departure_time,arrival_time,created_at\n",
    );

    for row in rows {
        out.push_str(&format!(
            "{},{:?},{},{},{},{}\n",
            row.tracking_no,
            row.status,
            row.manifest_id.map(|id| id.to_string()).unwrap_or_default(),
            row.departure_time.map(|t| t.to_rfc3339()).unwrap_or_default(),
            row.arrival_time.map(|t| t.to_rfc3339()).unwrap_or_default(),
            row.created_at.to_rfc3339(),
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use uuid::Uuid;

    use super::{delayed_shipments, to_csv};
    use crate::models::shipment::{Shipment, ShipmentStatus};
    use crate::store::Database;

    fn shipment(tracking_no: &str, status: ShipmentStatus, age_hours: i64) -> Shipment {
        let created = Utc::now() - Duration::hours(age_hours);
        Shipment {
            id: Uuid::new_v4(),
            tracking_no: tracking_no.to_string(),
            status,
            sender_id: Uuid::from_u128(1),
            receiver_id: Uuid::from_u128(2),
            origin_id: Uuid::from_u128(3),
            dest_id: Uuid::from_u128(4),
            package_type_id: Uuid::from_u128(5),
            quantity: 1,
            total_weight: None,
            total_volume: None,
            total_cost: 0.0,
            created_at: created,
            updated_at: created,
        }
    }

    #[test]
    fn report_includes_overdue_and_excludes_terminal_shipments() {
        let db = Database::new();
        db.insert_shipment(shipment("TRKOLD1", ShipmentStatus::Pending, 50)).unwrap();
        db.insert_shipment(shipment("TRKNEW1", ShipmentStatus::Pending, 1)).unwrap();
        db.insert_shipment(shipment("TRKDONE", ShipmentStatus::Delivered, 50)).unwrap();

        let rows = delayed_shipments(&db, 48, Utc::now());
        let tracking: Vec<&str> = rows.iter().map(|r| r.tracking_no.as_str()).collect();
        assert_eq!(tracking, vec!["TRKOLD1"]);
    }

    #[test]
    fn csv_has_a_header_and_one_line_per_row() {
        let db = Database::new();
        db.insert_shipment(shipment("TRKOLD2", ShipmentStatus::Pending, 50)).unwrap();

        let rows = delayed_shipments(&db, 48, Utc::now());
        let csv = to_csv(&rows);
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("tracking_no,status"));
        assert!(lines[1].starts_with("TRKOLD2,Pending,"));
    }
}
