use dashmap::mapref::entry::Entry;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::shipment::Shipment;
use crate::store::Database;

impl Database {
    /// Insert a new shipment, claiming its tracking number. A concurrent
    /// insert with the same number loses with `DuplicateKey`; the caller
    /// regenerates and retries.
    pub fn insert_shipment(&self, shipment: Shipment) -> Result<Shipment, AppError> {
        match self.tracking_index.entry(shipment.tracking_no.clone()) {
            Entry::Occupied(_) => Err(AppError::DuplicateKey(format!(
                "tracking_no {}",
                shipment.tracking_no
            ))),
            Entry::Vacant(entry) => {
                self.shipments.insert(shipment.id, shipment.clone());
                entry.insert(shipment.id);
                Ok(shipment)
            }
        }
    }

    pub fn get_shipment(&self, id: Uuid) -> Result<Shipment, AppError> {
        self.shipments
            .get(&id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| AppError::NotFound(format!("shipment {} not found", id)))
    }

    pub fn get_shipment_by_tracking(&self, tracking_no: &str) -> Result<Shipment, AppError> {
        let id = self
            .tracking_index
            .get(tracking_no)
            .map(|entry| *entry.value())
            .ok_or_else(|| AppError::NotFound(format!("shipment {} not found", tracking_no)))?;
        self.get_shipment(id)
    }

    pub fn list_shipments(&self) -> Vec<Shipment> {
        self.shipments.iter().map(|entry| entry.value().clone()).collect()
    }

    pub fn update_shipment<F>(&self, id: Uuid, apply: F) -> Result<Shipment, AppError>
    where
        F: FnOnce(&mut Shipment),
    {
        let mut shipment = self
            .shipments
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("shipment {} not found", id)))?;

        apply(&mut shipment);
        Ok(shipment.clone())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use crate::error::AppError;
    use crate::models::shipment::{Shipment, ShipmentStatus};
    use crate::store::Database;

    fn shipment(tracking_no: &str) -> Shipment {
        let now = Utc::now();
        Shipment {
            id: Uuid::new_v4(),
            tracking_no: tracking_no.to_string(),
            status: ShipmentStatus::Pending,
            sender_id: Uuid::from_u128(1),
            receiver_id: Uuid::from_u128(2),
            origin_id: Uuid::from_u128(3),
            dest_id: Uuid::from_u128(4),
            package_type_id: Uuid::from_u128(5),
            quantity: 1,
            total_weight: None,
            total_volume: None,
            total_cost: 0.0,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn tracking_number_uniqueness_is_enforced_on_insert() {
        let db = Database::new();
        db.insert_shipment(shipment("TRK0OI1")).unwrap();

        let err = db.insert_shipment(shipment("TRK0OI1")).unwrap_err();
        assert!(matches!(err, AppError::DuplicateKey(_)));
    }

    #[test]
    fn lookup_by_tracking_number_returns_the_shipment() {
        let db = Database::new();
        let inserted = db.insert_shipment(shipment("TRKZZ99")).unwrap();

        let found = db.get_shipment_by_tracking("TRKZZ99").unwrap();
        assert_eq!(found.id, inserted.id);
    }
}
