//! Competition data repository.
//!
//! Competitions are ordered by distance, longest first, everywhere they are listed.

use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryOrder,
};

use crate::server::model::competition::{Competition, CompetitionParams};

pub struct CompetitionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CompetitionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CompetitionParams) -> Result<Competition, DbErr> {
        let entity = entity::competition::ActiveModel {
            pilot_id: ActiveValue::Set(params.pilot_id),
            drone_id: ActiveValue::Set(params.drone_id),
            distance_in_feet: ActiveValue::Set(params.distance_in_feet),
            date: ActiveValue::Set(params.date),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Competition::from_entity(entity))
    }

    /// Gets every competition, longest distance first.
    pub async fn get_all(&self) -> Result<Vec<Competition>, DbErr> {
        let competitions = entity::prelude::Competition::find()
            .order_by_desc(entity::competition::Column::DistanceInFeet)
            .order_by_asc(entity::competition::Column::Id)
            .all(self.db)
            .await?;

        Ok(competitions
            .into_iter()
            .map(Competition::from_entity)
            .collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Competition>, DbErr> {
        let competition = entity::prelude::Competition::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(competition.map(Competition::from_entity))
    }

    /// Replaces every field of a competition.
    ///
    /// # Returns
    /// - `Ok(Some(Competition))` - The updated competition
    /// - `Ok(None)` - No competition with this ID
    pub async fn update(
        &self,
        id: i32,
        params: CompetitionParams,
    ) -> Result<Option<Competition>, DbErr> {
        let Some(competition) = entity::prelude::Competition::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::competition::ActiveModel = competition.into();
        active_model.pilot_id = ActiveValue::Set(params.pilot_id);
        active_model.drone_id = ActiveValue::Set(params.drone_id);
        active_model.distance_in_feet = ActiveValue::Set(params.distance_in_feet);
        active_model.date = ActiveValue::Set(params.date);

        let updated = active_model.update(self.db).await?;

        Ok(Some(Competition::from_entity(updated)))
    }

    /// Deletes a competition, returning whether a row was removed.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Competition::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Competition::find_by_id(id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
