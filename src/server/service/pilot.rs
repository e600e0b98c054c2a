//! Pilot service.
//!
//! Validates pilot payloads, including the gender choice, and delegates persistence to
//! the repository.

use sea_orm::DatabaseConnection;
use serde_json::{Map, Value};

use crate::server::{
    data::pilot::PilotRepository,
    error::AppError,
    model::pilot::{Gender, Pilot, PilotParams, NAME_MAX_LENGTH},
    util::validate::PayloadReader,
};

/// Service providing pilot operations.
pub struct PilotService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PilotService<'a> {
    /// Creates a new PilotService instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every pilot ordered by name, with their competitions.
    pub async fn get_all(&self) -> Result<Vec<Pilot>, AppError> {
        let repo = PilotRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Gets a pilot by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Pilot))` - Pilot found
    /// - `Ok(None)` - No pilot with this ID
    /// - `Err(AppError)` - Database error
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Pilot>, AppError> {
        let repo = PilotRepository::new(self.db);

        Ok(repo.get_by_id(id).await?)
    }

    /// Checks whether a pilot with this ID exists.
    pub async fn exists(&self, id: i32) -> Result<bool, AppError> {
        let repo = PilotRepository::new(self.db);

        Ok(repo.exists(id).await?)
    }

    /// Validates the payload and creates a new pilot.
    ///
    /// # Returns
    /// - `Ok(Pilot)` - The created pilot
    /// - `Err(AppError::Validation)` - The payload failed validation
    /// - `Err(AppError)` - Database error
    pub async fn create(&self, body: &Map<String, Value>) -> Result<Pilot, AppError> {
        let params = Self::validate(body)?;

        let repo = PilotRepository::new(self.db);
        let pilot = repo.create(params).await?;

        tracing::info!("Created pilot {} ({})", pilot.id, pilot.name);

        Ok(pilot)
    }

    /// Validates the payload and replaces the pilot's fields.
    ///
    /// Existence is checked first so an unknown pilot is reported as missing rather than
    /// invalid.
    ///
    /// # Returns
    /// - `Ok(Some(Pilot))` - The updated pilot
    /// - `Ok(None)` - No pilot with this ID
    /// - `Err(AppError::Validation)` - The payload failed validation
    pub async fn update(
        &self,
        id: i32,
        body: &Map<String, Value>,
    ) -> Result<Option<Pilot>, AppError> {
        let repo = PilotRepository::new(self.db);

        if !repo.exists(id).await? {
            return Ok(None);
        }

        let params = Self::validate(body)?;
        let pilot = repo.update(id, params).await?;

        if let Some(pilot) = &pilot {
            tracing::info!("Updated pilot {} ({})", pilot.id, pilot.name);
        }

        Ok(pilot)
    }

    /// Deletes a pilot with their competitions.
    ///
    /// # Returns
    /// - `Ok(true)` - The pilot was deleted
    /// - `Ok(false)` - No pilot with this ID
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = PilotRepository::new(self.db);

        let deleted = repo.delete(id).await?;
        if deleted {
            tracing::info!("Deleted pilot {}", id);
        }

        Ok(deleted)
    }

    fn validate(body: &Map<String, Value>) -> Result<PilotParams, AppError> {
        let mut reader = PayloadReader::new(body);

        let name = reader.text("name", NAME_MAX_LENGTH);
        let gender = reader
            .optional_choice("gender", &Gender::CODES)
            .and_then(|code| Gender::from_code(&code));
        let races_count = reader.integer("races_count");

        let params = match (name, races_count) {
            (Some(name), Some(races_count)) => Some(PilotParams {
                name,
                gender,
                races_count,
            }),
            _ => None,
        };

        Ok(reader.finish(params)?)
    }
}
