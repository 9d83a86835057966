use chrono::{DateTime, Utc};
use dashmap::mapref::entry::Entry;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::vehicle::{TrackingSample, Vehicle};
use crate::store::Database;

impl Database {
    pub fn insert_vehicle(&self, vehicle: Vehicle) -> Result<Vehicle, AppError> {
        match self.plates.entry(vehicle.plate_number.clone()) {
            Entry::Occupied(_) => Err(AppError::DuplicateKey(format!(
                "plate_number {}",
                vehicle.plate_number
            ))),
            Entry::Vacant(entry) => {
                self.vehicles.insert(vehicle.id, vehicle.clone());
                entry.insert(vehicle.id);
                Ok(vehicle)
            }
        }
    }

    pub fn get_vehicle(&self, id: Uuid) -> Result<Vehicle, AppError> {
        self.vehicles
            .get(&id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| AppError::NotFound(format!("vehicle {} not found", id)))
    }

    pub fn list_vehicles(&self) -> Vec<Vehicle> {
        self.vehicles.iter().map(|entry| entry.value().clone()).collect()
    }

    /// Append one GPS sample to the vehicle's log. The log is append-only;
    /// samples are kept in arrival order.
    pub fn append_sample(&self, sample: TrackingSample) {
        self.samples
            .entry(sample.vehicle_id)
            .or_default()
            .push(sample);
    }

    pub fn samples_for(&self, vehicle_id: Uuid) -> Vec<TrackingSample> {
        self.samples
            .get(&vehicle_id)
            .map(|entry| entry.value().clone())
            .unwrap_or_default()
    }

    pub fn samples_between(
        &self,
        vehicle_id: Uuid,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Vec<TrackingSample> {
        self.samples
            .get(&vehicle_id)
            .map(|entry| {
                entry
                    .value()
                    .iter()
                    .filter(|s| s.recorded_at >= from && s.recorded_at <= to)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use uuid::Uuid;

    use crate::error::AppError;
    use crate::models::vehicle::{TrackingSample, Vehicle, VehicleType};
    use crate::store::Database;

    fn vehicle(plate: &str) -> Vehicle {
        Vehicle {
            id: Uuid::new_v4(),
            plate_number: plate.to_string(),
            vehicle_type: VehicleType::Van,
            capacity_kg: Some(800.0),
            is_trackable: true,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn duplicate_plate_is_rejected() {
        let db = Database::new();
        db.insert_vehicle(vehicle("AA-123-BB")).unwrap();

        let err = db.insert_vehicle(vehicle("AA-123-BB")).unwrap_err();
        assert!(matches!(err, AppError::DuplicateKey(_)));
    }

    #[test]
    fn samples_between_filters_on_the_time_window() {
        let db = Database::new();
        let v = db.insert_vehicle(vehicle("CC-456-DD")).unwrap();
        let now = Utc::now();

        for hours_ago in [5, 3, 1] {
            db.append_sample(TrackingSample {
                vehicle_id: v.id,
                latitude: 12.37,
                longitude: -1.52,
                recorded_at: now - Duration::hours(hours_ago),
            });
        }

        let window = db.samples_between(v.id, now - Duration::hours(4), now);
        assert_eq!(window.len(), 2);
    }
}
