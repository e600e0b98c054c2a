//! Pilot factory for creating test pilot entities.

use crate::factory::helpers::next_id;
use crate::fixture;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test pilots with customizable fields.
pub struct PilotFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::pilot::Model,
}

impl<'a> PilotFactory<'a> {
    /// Creates a new PilotFactory with a unique `"Pilot {n}"` name.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let entity = fixture::pilot::entity_builder()
            .name(format!("Pilot {}", id))
            .build();

        Self { db, entity }
    }

    /// Sets the pilot name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    /// Sets the single letter gender code.
    pub fn gender(mut self, gender: impl Into<String>) -> Self {
        self.entity.gender = gender.into();
        self
    }

    /// Sets the number of races.
    pub fn races_count(mut self, races_count: i32) -> Self {
        self.entity.races_count = races_count;
        self
    }

    /// Builds and inserts the pilot entity into the database.
    pub async fn build(self) -> Result<entity::pilot::Model, DbErr> {
        entity::pilot::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.entity.name),
            gender: ActiveValue::Set(self.entity.gender),
            races_count: ActiveValue::Set(self.entity.races_count),
            inserted_timestamp: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pilot with default values.
pub async fn create_pilot(db: &DatabaseConnection) -> Result<entity::pilot::Model, DbErr> {
    PilotFactory::new(db).build().await
}
