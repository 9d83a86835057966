use uuid::Uuid;

use crate::error::AppError;
use crate::models::branch::Branch;
use crate::store::Database;

impl Database {
    pub fn insert_branch(&self, branch: Branch) -> Branch {
        self.branches.insert(branch.id, branch.clone());
        branch
    }

    pub fn get_branch(&self, id: Uuid) -> Result<Branch, AppError> {
        self.branches
            .get(&id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| AppError::NotFound(format!("branch {} not found", id)))
    }

    pub fn list_branches(&self) -> Vec<Branch> {
        self.branches.iter().map(|entry| entry.value().clone()).collect()
    }

    pub fn update_branch<F>(&self, id: Uuid, apply: F) -> Result<Branch, AppError>
    where
        F: FnOnce(&mut Branch),
    {
        let mut branch = self
            .branches
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("branch {} not found", id)))?;

        apply(&mut branch);
        Ok(branch.clone())
    }

    pub fn delete_branch(&self, id: Uuid) -> Result<(), AppError> {
        self.branches
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("branch {} not found", id)))
    }
}
