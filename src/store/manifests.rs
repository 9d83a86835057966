use dashmap::mapref::entry::Entry;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::manifest::{Manifest, ManifestItem, ManifestStatus};
use crate::models::shipment::Shipment;
use crate::store::Database;

impl Database {
    pub fn insert_manifest(&self, manifest: Manifest) -> Manifest {
        self.manifests.insert(manifest.id, manifest.clone());
        manifest
    }

    pub fn get_manifest(&self, id: Uuid) -> Result<Manifest, AppError> {
        self.manifests
            .get(&id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| AppError::NotFound(format!("manifest {} not found", id)))
    }

    pub fn list_manifests(&self) -> Vec<Manifest> {
        self.manifests.iter().map(|entry| entry.value().clone()).collect()
    }

    pub fn update_manifest<F>(&self, id: Uuid, apply: F) -> Result<Manifest, AppError>
    where
        F: FnOnce(&mut Manifest),
    {
        let mut manifest = self
            .manifests
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("manifest {} not found", id)))?;

        apply(&mut manifest);
        Ok(manifest.clone())
    }

    /// Claim a shipment for a manifest. A shipment may sit on at most one
    /// active (pending or in-transit) manifest; a stale link to a completed
    /// manifest is replaced. Two concurrent claims serialize on the link
    /// entry and the loser sees `AlreadyAssigned`.
    pub fn link_shipment(&self, manifest_id: Uuid, shipment: &Shipment) -> Result<(), AppError> {
        let item = ManifestItem {
            manifest_id,
            shipment_id: shipment.id,
        };

        match self.links_by_shipment.entry(shipment.id) {
            Entry::Occupied(mut entry) => {
                let current = entry.get().manifest_id;
                let still_active = self
                    .manifests
                    .get(&current)
                    .map(|m| m.status != ManifestStatus::Completed)
                    .unwrap_or(false);

                if still_active {
                    return Err(AppError::AlreadyAssigned(shipment.tracking_no.clone()));
                }
                entry.insert(item);
            }
            Entry::Vacant(entry) => {
                entry.insert(item);
            }
        }

        self.links_by_manifest
            .entry(manifest_id)
            .or_default()
            .push(shipment.id);
        Ok(())
    }

    pub fn unlink_shipment(
        &self,
        manifest_id: Uuid,
        shipment_id: Uuid,
        tracking_no: &str,
    ) -> Result<(), AppError> {
        let removed = self
            .links_by_shipment
            .remove_if(&shipment_id, |_, item| item.manifest_id == manifest_id);

        if removed.is_none() {
            return Err(AppError::NotFound(format!(
                "shipment {} is not on manifest {}",
                tracking_no, manifest_id
            )));
        }

        if let Some(mut ids) = self.links_by_manifest.get_mut(&manifest_id) {
            ids.retain(|id| *id != shipment_id);
        }
        Ok(())
    }

    pub fn shipment_ids_on_manifest(&self, manifest_id: Uuid) -> Vec<Uuid> {
        self.links_by_manifest
            .get(&manifest_id)
            .map(|entry| entry.value().clone())
            .unwrap_or_default()
    }

    pub fn shipments_on_manifest(&self, manifest_id: Uuid) -> Vec<Shipment> {
        let ids = self.shipment_ids_on_manifest(manifest_id);
        ids.into_iter()
            .filter_map(|id| self.shipments.get(&id).map(|entry| entry.value().clone()))
            .collect()
    }

    /// Latest manifest the shipment was linked to, completed or not. The
    /// delayed-shipment report needs the completed one for its arrival time.
    pub fn latest_manifest_for(&self, shipment_id: Uuid) -> Option<Manifest> {
        let manifest_id = self.links_by_shipment.get(&shipment_id)?.manifest_id;
        self.manifests
            .get(&manifest_id)
            .map(|entry| entry.value().clone())
    }

    /// The manifest currently claiming the shipment, if it is still active.
    pub fn active_manifest_for(&self, shipment_id: Uuid) -> Option<Manifest> {
        self.latest_manifest_for(shipment_id)
            .filter(|m| m.status != ManifestStatus::Completed)
    }
}
