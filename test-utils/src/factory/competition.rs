//! Competition factory for creating test competition entities.

use crate::fixture;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test competitions with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let competition = CompetitionFactory::new(&db, pilot.id, drone.id)
///     .distance_in_feet(2800)
///     .build()
///     .await?;
/// ```
pub struct CompetitionFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::competition::Model,
}

impl<'a> CompetitionFactory<'a> {
    /// Creates a new CompetitionFactory for the given pilot and drone.
    pub fn new(db: &'a DatabaseConnection, pilot_id: i32, drone_id: i32) -> Self {
        let entity = fixture::competition::entity_builder()
            .pilot_id(pilot_id)
            .drone_id(drone_id)
            .build();

        Self { db, entity }
    }

    /// Sets the distance in feet.
    pub fn distance_in_feet(mut self, distance_in_feet: i32) -> Self {
        self.entity.distance_in_feet = distance_in_feet;
        self
    }

    /// Sets the achievement date.
    pub fn date(mut self, date: DateTime<Utc>) -> Self {
        self.entity.date = date;
        self
    }

    /// Builds and inserts the competition entity into the database.
    pub async fn build(self) -> Result<entity::competition::Model, DbErr> {
        entity::competition::ActiveModel {
            id: ActiveValue::NotSet,
            pilot_id: ActiveValue::Set(self.entity.pilot_id),
            drone_id: ActiveValue::Set(self.entity.drone_id),
            distance_in_feet: ActiveValue::Set(self.entity.distance_in_feet),
            date: ActiveValue::Set(self.entity.date),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a competition with default values for the given pilot and drone.
pub async fn create_competition(
    db: &DatabaseConnection,
    pilot_id: i32,
    drone_id: i32,
) -> Result<entity::competition::Model, DbErr> {
    CompetitionFactory::new(db, pilot_id, drone_id).build().await
}
