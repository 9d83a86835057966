use chrono::Utc;
use dashmap::mapref::entry::Entry;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::client::Client;
use crate::store::Database;

impl Database {
    /// Explicit client registration. The phone number is the natural key;
    /// a second registration with the same phone is a duplicate.
    pub fn insert_client(&self, client: Client) -> Result<Client, AppError> {
        match self.clients_by_phone.entry(client.phone_number.clone()) {
            Entry::Occupied(_) => Err(AppError::DuplicateKey(format!(
                "phone_number {}",
                client.phone_number
            ))),
            Entry::Vacant(entry) => {
                self.clients.insert(client.id, client.clone());
                entry.insert(client.id);
                Ok(client)
            }
        }
    }

    /// Atomic get-or-create by phone number. Two concurrent calls for the
    /// same phone resolve to the same record; the first writer's name wins.
    pub fn upsert_client_by_phone(
        &self,
        phone_number: &str,
        full_name: &str,
    ) -> Result<Client, AppError> {
        match self.clients_by_phone.entry(phone_number.to_string()) {
            Entry::Occupied(entry) => {
                let id = *entry.get();
                drop(entry);
                self.clients
                    .get(&id)
                    .map(|c| c.value().clone())
                    .ok_or_else(|| AppError::Internal("client phone index out of sync".to_string()))
            }
            Entry::Vacant(entry) => {
                let client = Client {
                    id: Uuid::new_v4(),
                    phone_number: phone_number.to_string(),
                    full_name: full_name.to_string(),
                    is_verified: false,
                    created_at: Utc::now(),
                };
                self.clients.insert(client.id, client.clone());
                entry.insert(client.id);
                Ok(client)
            }
        }
    }

    pub fn get_client(&self, id: Uuid) -> Result<Client, AppError> {
        self.clients
            .get(&id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| AppError::NotFound(format!("client {} not found", id)))
    }

    pub fn find_client_by_phone(&self, phone_number: &str) -> Option<Client> {
        let id = *self.clients_by_phone.get(phone_number)?;
        self.clients.get(&id).map(|entry| entry.value().clone())
    }

    pub fn list_clients(&self) -> Vec<Client> {
        self.clients.iter().map(|entry| entry.value().clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use crate::error::AppError;
    use crate::models::client::Client;
    use crate::store::Database;

    #[test]
    fn upsert_is_idempotent_per_phone_number() {
        let db = Database::new();

        let first = db.upsert_client_by_phone("+22670000001", "Awa Traore").unwrap();
        let second = db.upsert_client_by_phone("+22670000001", "A. Traore").unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(second.full_name, "Awa Traore");
        assert_eq!(db.list_clients().len(), 1);
    }

    #[test]
    fn duplicate_phone_registration_is_rejected() {
        let db = Database::new();
        let client = Client {
            id: Uuid::new_v4(),
            phone_number: "+22670000002".to_string(),
            full_name: "Issa Kone".to_string(),
            is_verified: false,
            created_at: Utc::now(),
        };

        db.insert_client(client.clone()).unwrap();

        let duplicate = Client {
            id: Uuid::new_v4(),
            ..client
        };
        let err = db.insert_client(duplicate).unwrap_err();
        assert!(matches!(err, AppError::DuplicateKey(_)));
    }
}
