use uuid::Uuid;

use crate::error::AppError;
use crate::models::package_type::PackageType;
use crate::store::Database;

impl Database {
    pub fn insert_package_type(&self, package_type: PackageType) -> PackageType {
        self.package_types.insert(package_type.id, package_type.clone());
        package_type
    }

    pub fn get_package_type(&self, id: Uuid) -> Result<PackageType, AppError> {
        self.package_types
            .get(&id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| AppError::NotFound(format!("package type {} not found", id)))
    }

    pub fn list_package_types(&self) -> Vec<PackageType> {
        self.package_types
            .iter()
            .map(|entry| entry.value().clone())
            .collect()
    }
}
