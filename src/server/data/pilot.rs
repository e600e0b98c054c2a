//! Pilot data repository.
//!
//! This module provides the `PilotRepository` for managing pilot records. Pilots are
//! always returned with their competitions, ordered longest distance first, and gender
//! codes are converted to the `Gender` enum at this boundary.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use std::collections::HashMap;

use crate::server::model::pilot::{Pilot, PilotParams};

/// Repository providing database operations for pilots.
pub struct PilotRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PilotRepository<'a> {
    /// Creates a new PilotRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new pilot, stamping the insertion time.
    ///
    /// The gender defaults to male when not provided. A new pilot has no competitions.
    ///
    /// # Returns
    /// - `Ok(Pilot)` - The created pilot
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: PilotParams) -> Result<Pilot, DbErr> {
        let entity = entity::pilot::ActiveModel {
            name: ActiveValue::Set(params.name),
            gender: ActiveValue::Set(params.gender.unwrap_or_default().code().to_string()),
            races_count: ActiveValue::Set(params.races_count),
            inserted_timestamp: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Pilot::from_entity(entity, Vec::new())
    }

    /// Gets every pilot ordered by name, each with their competitions.
    ///
    /// # Returns
    /// - `Ok(Vec<Pilot>)` - All pilots
    /// - `Err(DbErr)` - Database error or a stored gender code that is not recognized
    pub async fn get_all(&self) -> Result<Vec<Pilot>, DbErr> {
        let pilots = entity::prelude::Pilot::find()
            .order_by_asc(entity::pilot::Column::Name)
            .order_by_asc(entity::pilot::Column::Id)
            .all(self.db)
            .await?;

        // Fetch all competitions in one query and group them by pilot
        let mut competitions_by_pilot: HashMap<i32, Vec<entity::competition::Model>> =
            HashMap::new();
        for competition in entity::prelude::Competition::find()
            .order_by_desc(entity::competition::Column::DistanceInFeet)
            .order_by_asc(entity::competition::Column::Id)
            .all(self.db)
            .await?
        {
            competitions_by_pilot
                .entry(competition.pilot_id)
                .or_default()
                .push(competition);
        }

        pilots
            .into_iter()
            .map(|pilot| {
                let competitions = competitions_by_pilot.remove(&pilot.id).unwrap_or_default();
                Pilot::from_entity(pilot, competitions)
            })
            .collect()
    }

    /// Gets a pilot by ID with their competitions.
    ///
    /// # Returns
    /// - `Ok(Some(Pilot))` - Pilot found
    /// - `Ok(None)` - No pilot with this ID
    /// - `Err(DbErr)` - Database error
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Pilot>, DbErr> {
        let Some(pilot) = entity::prelude::Pilot::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let competitions = self.get_competitions(id).await?;

        Pilot::from_entity(pilot, competitions).map(Some)
    }

    /// Replaces a pilot's fields.
    ///
    /// The gender keeps its stored value when not provided. The insertion timestamp
    /// never changes.
    ///
    /// # Returns
    /// - `Ok(Some(Pilot))` - The updated pilot with their competitions
    /// - `Ok(None)` - No pilot with this ID
    /// - `Err(DbErr)` - Database error
    pub async fn update(&self, id: i32, params: PilotParams) -> Result<Option<Pilot>, DbErr> {
        let Some(pilot) = entity::prelude::Pilot::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::pilot::ActiveModel = pilot.into();
        active_model.name = ActiveValue::Set(params.name);
        active_model.races_count = ActiveValue::Set(params.races_count);
        if let Some(gender) = params.gender {
            active_model.gender = ActiveValue::Set(gender.code().to_string());
        }

        let updated = active_model.update(self.db).await?;
        let competitions = self.get_competitions(id).await?;

        Pilot::from_entity(updated, competitions).map(Some)
    }

    /// Deletes a pilot along with their competitions.
    ///
    /// # Returns
    /// - `Ok(true)` - The pilot was deleted
    /// - `Ok(false)` - No pilot with this ID
    /// - `Err(DbErr)` - Database error
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Pilot::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    /// Checks whether a pilot exists.
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Pilot::find_by_id(id).count(self.db).await?;

        Ok(count > 0)
    }

    async fn get_competitions(
        &self,
        pilot_id: i32,
    ) -> Result<Vec<entity::competition::Model>, DbErr> {
        entity::prelude::Competition::find()
            .filter(entity::competition::Column::PilotId.eq(pilot_id))
            .order_by_desc(entity::competition::Column::DistanceInFeet)
            .order_by_asc(entity::competition::Column::Id)
            .all(self.db)
            .await
    }
}
