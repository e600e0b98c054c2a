//! Drone data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::drone::{Drone, DroneParams};

/// Repository providing database operations for drones.
pub struct DroneRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DroneRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new drone, stamping the insertion time.
    ///
    /// `has_it_competed` defaults to `false` when not provided.
    ///
    /// # Returns
    /// - `Ok(Drone)` - The created drone
    /// - `Err(DbErr)` - Database error, including a missing category or duplicate name
    pub async fn create(&self, params: DroneParams) -> Result<Drone, DbErr> {
        let entity = entity::drone::ActiveModel {
            name: ActiveValue::Set(params.name),
            drone_category_id: ActiveValue::Set(params.drone_category_id),
            manufacturing_date: ActiveValue::Set(params.manufacturing_date),
            has_it_competed: ActiveValue::Set(params.has_it_competed.unwrap_or(false)),
            inserted_timestamp: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Drone::from_entity(entity))
    }

    /// Gets every drone ordered by name.
    pub async fn get_all(&self) -> Result<Vec<Drone>, DbErr> {
        let drones = entity::prelude::Drone::find()
            .order_by_asc(entity::drone::Column::Name)
            .order_by_asc(entity::drone::Column::Id)
            .all(self.db)
            .await?;

        Ok(drones.into_iter().map(Drone::from_entity).collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Drone>, DbErr> {
        let drone = entity::prelude::Drone::find_by_id(id).one(self.db).await?;

        Ok(drone.map(Drone::from_entity))
    }

    /// Replaces a drone's fields.
    ///
    /// The insertion timestamp never changes, and `has_it_competed` keeps its stored
    /// value when not provided.
    ///
    /// # Returns
    /// - `Ok(Some(Drone))` - The updated drone
    /// - `Ok(None)` - No drone with this ID
    /// - `Err(DbErr)` - Database error
    pub async fn update(&self, id: i32, params: DroneParams) -> Result<Option<Drone>, DbErr> {
        let Some(drone) = entity::prelude::Drone::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::drone::ActiveModel = drone.into();
        active_model.name = ActiveValue::Set(params.name);
        active_model.drone_category_id = ActiveValue::Set(params.drone_category_id);
        active_model.manufacturing_date = ActiveValue::Set(params.manufacturing_date);
        if let Some(has_it_competed) = params.has_it_competed {
            active_model.has_it_competed = ActiveValue::Set(has_it_competed);
        }

        let updated = active_model.update(self.db).await?;

        Ok(Some(Drone::from_entity(updated)))
    }

    /// Deletes a drone along with its competitions.
    ///
    /// # Returns
    /// - `Ok(true)` - The drone was deleted
    /// - `Ok(false)` - No drone with this ID
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Drone::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Drone::find_by_id(id).count(self.db).await?;

        Ok(count > 0)
    }

    /// Checks whether another drone already uses this name.
    pub async fn name_taken(&self, name: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        let mut query =
            entity::prelude::Drone::find().filter(entity::drone::Column::Name.eq(name));
        if let Some(id) = exclude_id {
            query = query.filter(entity::drone::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }
}
