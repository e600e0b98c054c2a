//! Drone category service.
//!
//! Validates category payloads, enforces unique names and delegates persistence to the
//! repository.

use sea_orm::DatabaseConnection;
use serde_json::{Map, Value};

use crate::server::{
    data::drone_category::DroneCategoryRepository,
    error::AppError,
    model::drone_category::{
        DroneCategory, DroneCategoryParams, DUPLICATE_NAME, NAME_MAX_LENGTH,
    },
    util::validate::PayloadReader,
};

/// Service providing drone category operations.
pub struct DroneCategoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DroneCategoryService<'a> {
    /// Creates a new DroneCategoryService instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every category ordered by name, with the IDs of its drones.
    pub async fn get_all(&self) -> Result<Vec<DroneCategory>, AppError> {
        let repo = DroneCategoryRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Gets a drone category by ID.
    ///
    /// # Returns
    /// - `Ok(Some(DroneCategory))` - Category found
    /// - `Ok(None)` - No category with this ID
    /// - `Err(AppError)` - Database error
    pub async fn get_by_id(&self, id: i32) -> Result<Option<DroneCategory>, AppError> {
        let repo = DroneCategoryRepository::new(self.db);

        Ok(repo.get_by_id(id).await?)
    }

    /// Checks whether a drone category with this ID exists.
    pub async fn exists(&self, id: i32) -> Result<bool, AppError> {
        let repo = DroneCategoryRepository::new(self.db);

        Ok(repo.exists(id).await?)
    }

    /// Validates the payload and creates a new category.
    ///
    /// # Returns
    /// - `Ok(DroneCategory)` - The created category
    /// - `Err(AppError::Validation)` - The payload failed validation or the name is taken
    /// - `Err(AppError)` - Database error
    pub async fn create(&self, body: &Map<String, Value>) -> Result<DroneCategory, AppError> {
        let params = self.validate(body, None).await?;

        let repo = DroneCategoryRepository::new(self.db);
        let category = repo.create(params).await?;

        tracing::info!("Created drone category {} ({})", category.id, category.name);

        Ok(category)
    }

    /// Validates the payload and replaces the category's fields.
    ///
    /// The category's own name does not count as taken.
    ///
    /// # Returns
    /// - `Ok(Some(DroneCategory))` - The updated category
    /// - `Ok(None)` - No category with this ID
    /// - `Err(AppError::Validation)` - The payload failed validation or the name is taken
    pub async fn update(
        &self,
        id: i32,
        body: &Map<String, Value>,
    ) -> Result<Option<DroneCategory>, AppError> {
        let repo = DroneCategoryRepository::new(self.db);

        if !repo.exists(id).await? {
            return Ok(None);
        }

        let params = self.validate(body, Some(id)).await?;
        let category = repo.update(id, params).await?;

        if let Some(category) = &category {
            tracing::info!("Updated drone category {} ({})", category.id, category.name);
        }

        Ok(category)
    }

    /// Deletes a category along with its drones and their competitions.
    ///
    /// # Returns
    /// - `Ok(true)` - Category deleted
    /// - `Ok(false)` - No category with this ID
    /// - `Err(AppError)` - Database error
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = DroneCategoryRepository::new(self.db);

        let deleted = repo.delete(id).await?;
        if deleted {
            tracing::info!("Deleted drone category {}", id);
        }

        Ok(deleted)
    }

    /// Reads the category fields from the payload.
    ///
    /// `id` is the category being updated, excluded from the uniqueness check.
    async fn validate(
        &self,
        body: &Map<String, Value>,
        id: Option<i32>,
    ) -> Result<DroneCategoryParams, AppError> {
        let repo = DroneCategoryRepository::new(self.db);
        let mut reader = PayloadReader::new(body);

        let name = reader.text("name", NAME_MAX_LENGTH);
        if let Some(name) = &name {
            if repo.name_taken(name, id).await? {
                reader.reject("name", DUPLICATE_NAME);
            }
        }

        Ok(reader.finish(name.map(|name| DroneCategoryParams { name }))?)
    }
}
