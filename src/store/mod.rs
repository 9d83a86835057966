pub mod branches;
pub mod clients;
pub mod drivers;
pub mod expenses;
pub mod manifests;
pub mod notifications;
pub mod package_types;
pub mod shipments;
pub mod transactions;
pub mod vehicles;

use dashmap::DashMap;
use uuid::Uuid;

use crate::models::branch::Branch;
use crate::models::client::Client;
use crate::models::driver::Driver;
use crate::models::expense::Expense;
use crate::models::manifest::{Manifest, ManifestItem};
use crate::models::notification::DeliveryRecord;
use crate::models::package_type::PackageType;
use crate::models::shipment::Shipment;
use crate::models::transaction::Transaction;
use crate::models::vehicle::{TrackingSample, Vehicle};

/// In-process entity store behind the per-entity facades.
///
/// The hosted data platform is an external collaborator; these facades are
/// its query/command contract. The maps below enforce the platform's
/// uniqueness constraints: `tracking_no`, `phone_number`, vehicle plate
/// numbers, one active manifest link per shipment, and one recorded payment
/// per shipment.
pub struct Database {
    pub(crate) branches: DashMap<Uuid, Branch>,
    pub(crate) clients: DashMap<Uuid, Client>,
    pub(crate) clients_by_phone: DashMap<String, Uuid>,
    pub(crate) drivers: DashMap<Uuid, Driver>,
    pub(crate) vehicles: DashMap<Uuid, Vehicle>,
    pub(crate) plates: DashMap<String, Uuid>,
    pub(crate) samples: DashMap<Uuid, Vec<TrackingSample>>,
    pub(crate) package_types: DashMap<Uuid, PackageType>,
    pub(crate) shipments: DashMap<Uuid, Shipment>,
    pub(crate) tracking_index: DashMap<String, Uuid>,
    pub(crate) manifests: DashMap<Uuid, Manifest>,
    pub(crate) links_by_shipment: DashMap<Uuid, ManifestItem>,
    pub(crate) links_by_manifest: DashMap<Uuid, Vec<Uuid>>,
    pub(crate) transactions: DashMap<Uuid, Transaction>,
    pub(crate) tx_by_shipment: DashMap<Uuid, Uuid>,
    pub(crate) delivery_records: DashMap<Uuid, DeliveryRecord>,
    pub(crate) expenses: DashMap<Uuid, Expense>,
}

impl Database {
    pub fn new() -> Self {
        Self {
            branches: DashMap::new(),
            clients: DashMap::new(),
            clients_by_phone: DashMap::new(),
            drivers: DashMap::new(),
            vehicles: DashMap::new(),
            plates: DashMap::new(),
            samples: DashMap::new(),
            package_types: DashMap::new(),
            shipments: DashMap::new(),
            tracking_index: DashMap::new(),
            manifests: DashMap::new(),
            links_by_shipment: DashMap::new(),
            links_by_manifest: DashMap::new(),
            transactions: DashMap::new(),
            tx_by_shipment: DashMap::new(),
            delivery_records: DashMap::new(),
            expenses: DashMap::new(),
        }
    }

    pub fn shipment_count(&self) -> usize {
        self.shipments.len()
    }

    pub fn manifest_count(&self) -> usize {
        self.manifests.len()
    }

    pub fn branch_count(&self) -> usize {
        self.branches.len()
    }
}

impl Default for Database {
    fn default() -> Self {
        Self::new()
    }
}
