//! Drone service.
//!
//! Validates drone payloads, resolves the category hyperlink and delegates persistence
//! to the repository.

use sea_orm::DatabaseConnection;
use serde_json::{Map, Value};

use crate::server::{
    data::{drone::DroneRepository, drone_category::DroneCategoryRepository},
    error::AppError,
    model::{
        drone::{Drone, DroneParams, DUPLICATE_NAME, NAME_MAX_LENGTH},
        resource::Resource,
    },
    util::validate::{PayloadReader, OBJECT_DOES_NOT_EXIST},
};

/// Service providing drone operations.
pub struct DroneService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DroneService<'a> {
    /// Creates a new DroneService instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every drone ordered by name.
    pub async fn get_all(&self) -> Result<Vec<Drone>, AppError> {
        let repo = DroneRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Gets a drone by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Drone))` - Drone found
    /// - `Ok(None)` - No drone with this ID
    /// - `Err(AppError)` - Database error
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Drone>, AppError> {
        let repo = DroneRepository::new(self.db);

        Ok(repo.get_by_id(id).await?)
    }

    /// Checks whether a drone with this ID exists.
    pub async fn exists(&self, id: i32) -> Result<bool, AppError> {
        let repo = DroneRepository::new(self.db);

        Ok(repo.exists(id).await?)
    }

    /// Validates the payload and creates a new drone.
    ///
    /// `has_it_competed` defaults to false when omitted.
    ///
    /// # Returns
    /// - `Ok(Drone)` - The created drone
    /// - `Err(AppError::Validation)` - The payload failed validation
    /// - `Err(AppError)` - Database error
    pub async fn create(&self, body: &Map<String, Value>) -> Result<Drone, AppError> {
        let params = self.validate(body, None).await?;

        let repo = DroneRepository::new(self.db);
        let drone = repo.create(params).await?;

        tracing::info!(
            "Created drone {} ({}) in category {}",
            drone.id,
            drone.name,
            drone.drone_category_id
        );

        Ok(drone)
    }

    /// Validates the payload and replaces the drone's fields.
    ///
    /// `has_it_competed` keeps its stored value when omitted.
    ///
    /// # Returns
    /// - `Ok(Some(Drone))` - The updated drone
    /// - `Ok(None)` - No drone with this ID
    /// - `Err(AppError::Validation)` - The payload failed validation
    pub async fn update(
        &self,
        id: i32,
        body: &Map<String, Value>,
    ) -> Result<Option<Drone>, AppError> {
        let repo = DroneRepository::new(self.db);

        if !repo.exists(id).await? {
            return Ok(None);
        }

        let params = self.validate(body, Some(id)).await?;
        let drone = repo.update(id, params).await?;

        if let Some(drone) = &drone {
            tracing::info!("Updated drone {} ({})", drone.id, drone.name);
        }

        Ok(drone)
    }

    /// Deletes a drone along with its competitions.
    ///
    /// # Returns
    /// - `Ok(true)` - Drone deleted
    /// - `Ok(false)` - No drone with this ID
    /// - `Err(AppError)` - Database error
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = DroneRepository::new(self.db);

        let deleted = repo.delete(id).await?;
        if deleted {
            tracing::info!("Deleted drone {}", id);
        }

        Ok(deleted)
    }

    /// Reads the drone fields from the payload.
    ///
    /// The category must be a hyperlink to an existing category. `id` is the drone being
    /// updated, excluded from the uniqueness check.
    async fn validate(
        &self,
        body: &Map<String, Value>,
        id: Option<i32>,
    ) -> Result<DroneParams, AppError> {
        let repo = DroneRepository::new(self.db);
        let category_repo = DroneCategoryRepository::new(self.db);
        let mut reader = PayloadReader::new(body);

        let name = reader.text("name", NAME_MAX_LENGTH);
        if let Some(name) = &name {
            if repo.name_taken(name, id).await? {
                reader.reject("name", DUPLICATE_NAME);
            }
        }

        let drone_category_id = reader.hyperlink("drone_category", Resource::DroneCategories);
        if let Some(category_id) = drone_category_id {
            if !category_repo.exists(category_id).await? {
                reader.reject("drone_category", OBJECT_DOES_NOT_EXIST);
            }
        }

        let manufacturing_date = reader.datetime("manufacturing_date");
        let has_it_competed = reader.optional_boolean("has_it_competed");

        let params = match (name, drone_category_id, manufacturing_date) {
            (Some(name), Some(drone_category_id), Some(manufacturing_date)) => Some(DroneParams {
                name,
                drone_category_id,
                manufacturing_date,
                has_it_competed,
            }),
            _ => None,
        };

        Ok(reader.finish(params)?)
    }
}
