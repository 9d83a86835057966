use crate::models::notification::DeliveryRecord;
use crate::store::Database;

impl Database {
    pub fn push_delivery_record(&self, record: DeliveryRecord) {
        self.delivery_records.insert(record.id, record);
    }

    pub fn delivery_records_for(&self, tracking_no: &str) -> Vec<DeliveryRecord> {
        let mut records: Vec<DeliveryRecord> = self
            .delivery_records
            .iter()
            .filter(|entry| entry.value().tracking_no == tracking_no)
            .map(|entry| entry.value().clone())
            .collect();

        records.sort_by_key(|r| r.created_at);
        records
    }
}
