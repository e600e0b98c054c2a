//! Drone factory for creating test drone entities.

use crate::factory::helpers::next_id;
use crate::fixture;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test drones with customizable fields.
///
/// Defaults come from `fixture::drone` with a unique `"Drone {n}"` name and the
/// insertion timestamp set to the current time.
///
/// # Example
///
/// ```rust,ignore
/// let drone = DroneFactory::new(&db, category.id)
///     .name("Atom")
///     .has_it_competed(true)
///     .build()
///     .await?;
/// ```
pub struct DroneFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::drone::Model,
}

impl<'a> DroneFactory<'a> {
    /// Creates a new DroneFactory for a drone in the given category.
    pub fn new(db: &'a DatabaseConnection, drone_category_id: i32) -> Self {
        let id = next_id();
        let entity = fixture::drone::entity_builder()
            .name(format!("Drone {}", id))
            .drone_category_id(drone_category_id)
            .build();

        Self { db, entity }
    }

    /// Sets the drone name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    /// Sets the manufacturing date.
    pub fn manufacturing_date(mut self, manufacturing_date: DateTime<Utc>) -> Self {
        self.entity.manufacturing_date = manufacturing_date;
        self
    }

    /// Sets whether the drone has competed.
    pub fn has_it_competed(mut self, has_it_competed: bool) -> Self {
        self.entity.has_it_competed = has_it_competed;
        self
    }

    /// Builds and inserts the drone entity into the database.
    pub async fn build(self) -> Result<entity::drone::Model, DbErr> {
        entity::drone::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.entity.name),
            drone_category_id: ActiveValue::Set(self.entity.drone_category_id),
            manufacturing_date: ActiveValue::Set(self.entity.manufacturing_date),
            has_it_competed: ActiveValue::Set(self.entity.has_it_competed),
            inserted_timestamp: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a drone with default values in the given category.
pub async fn create_drone(
    db: &DatabaseConnection,
    drone_category_id: i32,
) -> Result<entity::drone::Model, DbErr> {
    DroneFactory::new(db, drone_category_id).build().await
}
