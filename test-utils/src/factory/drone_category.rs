//! Drone category factory for creating test drone category entities.

use crate::factory::helpers::next_id;
use crate::fixture;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test drone categories with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let category = DroneCategoryFactory::new(&db)
///     .name("Octocopter")
///     .build()
///     .await?;
/// ```
pub struct DroneCategoryFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::drone_category::Model,
}

impl<'a> DroneCategoryFactory<'a> {
    /// Creates a new factory whose name is `"Category {n}"` with a unique `n`.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let entity = fixture::drone_category::entity_builder()
            .name(format!("Category {}", id))
            .build();

        Self { db, entity }
    }

    /// Sets the category name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    /// Builds and inserts the drone category entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::drone_category::Model)` - Created category entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::drone_category::Model, DbErr> {
        entity::drone_category::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.entity.name),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a drone category with default values.
///
/// Shorthand for `DroneCategoryFactory::new(db).build().await`.
pub async fn create_drone_category(
    db: &DatabaseConnection,
) -> Result<entity::drone_category::Model, DbErr> {
    DroneCategoryFactory::new(db).build().await
}
