//! Drone category data repository.
//!
//! Categories are always loaded together with the ids of their drones, ordered by drone
//! name, since every representation of a category lists its drones.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use std::collections::HashMap;

use crate::server::model::drone_category::{DroneCategory, DroneCategoryParams};

pub struct DroneCategoryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DroneCategoryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new category. A new category has no drones yet.
    pub async fn create(&self, params: DroneCategoryParams) -> Result<DroneCategory, DbErr> {
        let entity = entity::drone_category::ActiveModel {
            name: ActiveValue::Set(params.name),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(DroneCategory::from_entity(entity, Vec::new()))
    }

    /// Gets every category ordered by name, each with its drones.
    pub async fn get_all(&self) -> Result<Vec<DroneCategory>, DbErr> {
        let categories = entity::prelude::DroneCategory::find()
            .order_by_asc(entity::drone_category::Column::Name)
            .order_by_asc(entity::drone_category::Column::Id)
            .all(self.db)
            .await?;

        // Fetch all drones in one query and group them by category
        let mut drones_by_category: HashMap<i32, Vec<entity::drone::Model>> = HashMap::new();
        for drone in entity::prelude::Drone::find()
            .order_by_asc(entity::drone::Column::Name)
            .order_by_asc(entity::drone::Column::Id)
            .all(self.db)
            .await?
        {
            drones_by_category
                .entry(drone.drone_category_id)
                .or_default()
                .push(drone);
        }

        Ok(categories
            .into_iter()
            .map(|category| {
                let drones = drones_by_category.remove(&category.id).unwrap_or_default();
                DroneCategory::from_entity(category, drones)
            })
            .collect())
    }

    /// Gets a category by ID with its drones.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<DroneCategory>, DbErr> {
        let Some(category) = entity::prelude::DroneCategory::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let drones = self.get_drones(id).await?;

        Ok(Some(DroneCategory::from_entity(category, drones)))
    }

    /// Replaces a category's name.
    ///
    /// # Returns
    /// - `Ok(Some(DroneCategory))` - The updated category with its drones
    /// - `Ok(None)` - No category with this ID
    /// - `Err(DbErr)` - Database error, including a unique name violation
    pub async fn update(
        &self,
        id: i32,
        params: DroneCategoryParams,
    ) -> Result<Option<DroneCategory>, DbErr> {
        let Some(category) = entity::prelude::DroneCategory::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::drone_category::ActiveModel = category.into();
        active_model.name = ActiveValue::Set(params.name);
        let updated = active_model.update(self.db).await?;

        let drones = self.get_drones(id).await?;

        Ok(Some(DroneCategory::from_entity(updated, drones)))
    }

    /// Deletes a category. Its drones and their competitions are removed by the
    /// cascading foreign keys.
    ///
    /// # Returns
    /// - `Ok(true)` - The category was deleted
    /// - `Ok(false)` - No category with this ID
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::DroneCategory::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::DroneCategory::find_by_id(id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks whether another category already uses this name.
    ///
    /// # Arguments
    /// - `name` - Name to look up, compared exactly
    /// - `exclude_id` - Category being updated, ignored in the lookup
    pub async fn name_taken(&self, name: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        let mut query = entity::prelude::DroneCategory::find()
            .filter(entity::drone_category::Column::Name.eq(name));
        if let Some(id) = exclude_id {
            query = query.filter(entity::drone_category::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    async fn get_drones(&self, category_id: i32) -> Result<Vec<entity::drone::Model>, DbErr> {
        entity::prelude::Drone::find()
            .filter(entity::drone::Column::DroneCategoryId.eq(category_id))
            .order_by_asc(entity::drone::Column::Name)
            .order_by_asc(entity::drone::Column::Id)
            .all(self.db)
            .await
    }
}
