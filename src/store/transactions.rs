use dashmap::mapref::entry::Entry;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::transaction::Transaction;
use crate::store::Database;

impl Database {
    /// Record the payment for a shipment. At most one payment per shipment;
    /// a second attempt conflicts.
    pub fn record_payment(&self, txn: Transaction) -> Result<Transaction, AppError> {
        match self.tx_by_shipment.entry(txn.shipment_id) {
            Entry::Occupied(_) => Err(AppError::Conflict(format!(
                "payment already recorded for shipment {}",
                txn.shipment_id
            ))),
            Entry::Vacant(entry) => {
                self.transactions.insert(txn.id, txn.clone());
                entry.insert(txn.id);
                Ok(txn)
            }
        }
    }

    pub fn payment_for_shipment(&self, shipment_id: Uuid) -> Option<Transaction> {
        let id = *self.tx_by_shipment.get(&shipment_id)?;
        self.transactions.get(&id).map(|entry| entry.value().clone())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use crate::error::AppError;
    use crate::models::transaction::{PaymentMethod, Transaction};
    use crate::store::Database;

    fn txn(shipment_id: Uuid) -> Transaction {
        Transaction {
            id: Uuid::new_v4(),
            shipment_id,
            method: PaymentMethod::Cash,
            amount: 1500.0,
            tax_amount: 270.0,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn one_payment_per_shipment() {
        let db = Database::new();
        let shipment_id = Uuid::from_u128(7);

        db.record_payment(txn(shipment_id)).unwrap();
        let err = db.record_payment(txn(shipment_id)).unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }
}
