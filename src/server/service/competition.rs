//! Competition service.
//!
//! Validates competition payloads, resolves the pilot and drone hyperlinks and delegates
//! persistence to the repository.

use sea_orm::DatabaseConnection;
use serde_json::{Map, Value};

use crate::server::{
    data::{competition::CompetitionRepository, drone::DroneRepository, pilot::PilotRepository},
    error::AppError,
    model::{
        competition::{Competition, CompetitionParams},
        resource::Resource,
    },
    util::validate::{PayloadReader, OBJECT_DOES_NOT_EXIST},
};

/// Service providing competition operations.
pub struct CompetitionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CompetitionService<'a> {
    /// Creates a new CompetitionService instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every competition, longest distance first.
    pub async fn get_all(&self) -> Result<Vec<Competition>, AppError> {
        let repo = CompetitionRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Gets a competition by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Competition))` - Competition found
    /// - `Ok(None)` - No competition with this ID
    /// - `Err(AppError)` - Database error
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Competition>, AppError> {
        let repo = CompetitionRepository::new(self.db);

        Ok(repo.get_by_id(id).await?)
    }

    /// Checks whether a competition with this ID exists.
    pub async fn exists(&self, id: i32) -> Result<bool, AppError> {
        let repo = CompetitionRepository::new(self.db);

        Ok(repo.exists(id).await?)
    }

    /// Validates the payload and creates a new competition.
    ///
    /// # Returns
    /// - `Ok(Competition)` - The created competition
    /// - `Err(AppError::Validation)` - The payload failed validation
    /// - `Err(AppError)` - Database error
    pub async fn create(&self, body: &Map<String, Value>) -> Result<Competition, AppError> {
        let params = self.validate(body).await?;

        let repo = CompetitionRepository::new(self.db);
        let competition = repo.create(params).await?;

        tracing::info!(
            "Created competition {} for pilot {} with drone {}",
            competition.id,
            competition.pilot_id,
            competition.drone_id
        );

        Ok(competition)
    }

    /// Validates the payload and replaces the competition's fields.
    ///
    /// # Returns
    /// - `Ok(Some(Competition))` - The updated competition
    /// - `Ok(None)` - No competition with this ID
    /// - `Err(AppError::Validation)` - The payload failed validation
    pub async fn update(
        &self,
        id: i32,
        body: &Map<String, Value>,
    ) -> Result<Option<Competition>, AppError> {
        let repo = CompetitionRepository::new(self.db);

        if !repo.exists(id).await? {
            return Ok(None);
        }

        let params = self.validate(body).await?;
        let competition = repo.update(id, params).await?;

        if competition.is_some() {
            tracing::info!("Updated competition {}", id);
        }

        Ok(competition)
    }

    /// Deletes a competition.
    ///
    /// # Returns
    /// - `Ok(true)` - Competition deleted
    /// - `Ok(false)` - No competition with this ID
    /// - `Err(AppError)` - Database error
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = CompetitionRepository::new(self.db);

        let deleted = repo.delete(id).await?;
        if deleted {
            tracing::info!("Deleted competition {}", id);
        }

        Ok(deleted)
    }

    async fn validate(&self, body: &Map<String, Value>) -> Result<CompetitionParams, AppError> {
        let mut reader = PayloadReader::new(body);

        let pilot_id = reader.hyperlink("pilot", Resource::Pilots);
        if let Some(pilot_id) = pilot_id {
            if !PilotRepository::new(self.db).exists(pilot_id).await? {
                reader.reject("pilot", OBJECT_DOES_NOT_EXIST);
            }
        }

        let drone_id = reader.hyperlink("drone", Resource::Drones);
        if let Some(drone_id) = drone_id {
            if !DroneRepository::new(self.db).exists(drone_id).await? {
                reader.reject("drone", OBJECT_DOES_NOT_EXIST);
            }
        }

        let distance_in_feet = reader.integer("distance_in_feet");
        let date = reader.datetime("date");

        let params = match (pilot_id, drone_id, distance_in_feet, date) {
            (Some(pilot_id), Some(drone_id), Some(distance_in_feet), Some(date)) => {
                Some(CompetitionParams {
                    pilot_id,
                    drone_id,
                    distance_in_feet,
                    date,
                })
            }
            _ => None,
        };

        Ok(reader.finish(params)?)
    }
}
