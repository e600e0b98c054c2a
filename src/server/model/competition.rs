//! Competition domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::competition::CompetitionDto,
    server::{model::resource::Resource, util::hyperlink::ResourceUrls},
};

/// A distance achieved by a pilot flying a drone.
#[derive(Debug, Clone, PartialEq)]
pub struct Competition {
    pub id: i32,
    pub pilot_id: i32,
    pub drone_id: i32,
    pub distance_in_feet: i32,
    pub date: DateTime<Utc>,
}

impl Competition {
    pub fn from_entity(entity: entity::competition::Model) -> Self {
        Self {
            id: entity.id,
            pilot_id: entity.pilot_id,
            drone_id: entity.drone_id,
            distance_in_feet: entity.distance_in_feet,
            date: entity.date,
        }
    }

    pub fn into_dto(self, urls: &ResourceUrls) -> CompetitionDto {
        CompetitionDto {
            url: urls.detail(Resource::Competitions, self.id),
            pk: self.id,
            pilot: urls.detail(Resource::Pilots, self.pilot_id),
            drone: urls.detail(Resource::Drones, self.drone_id),
            distance_in_feet: self.distance_in_feet,
            date: self.date,
        }
    }
}

/// Validated fields for creating or replacing a competition.
#[derive(Debug, Clone, PartialEq)]
pub struct CompetitionParams {
    pub pilot_id: i32,
    pub drone_id: i32,
    pub distance_in_feet: i32,
    pub date: DateTime<Utc>,
}
