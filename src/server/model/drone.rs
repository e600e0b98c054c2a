//! Drone domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::drone::DroneDto,
    server::{model::resource::Resource, util::hyperlink::ResourceUrls},
};

/// Longest accepted drone name.
pub const NAME_MAX_LENGTH: usize = 250;

pub const DUPLICATE_NAME: &str = "drone with this name already exists.";

#[derive(Debug, Clone, PartialEq)]
pub struct Drone {
    pub id: i32,
    pub name: String,
    pub drone_category_id: i32,
    pub manufacturing_date: DateTime<Utc>,
    pub has_it_competed: bool,
    /// Set once when the drone is first stored.
    pub inserted_timestamp: DateTime<Utc>,
}

impl Drone {
    pub fn from_entity(entity: entity::drone::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            drone_category_id: entity.drone_category_id,
            manufacturing_date: entity.manufacturing_date,
            has_it_competed: entity.has_it_competed,
            inserted_timestamp: entity.inserted_timestamp,
        }
    }

    pub fn into_dto(self, urls: &ResourceUrls) -> DroneDto {
        DroneDto {
            url: urls.detail(Resource::Drones, self.id),
            pk: self.id,
            name: self.name,
            drone_category: urls.detail(Resource::DroneCategories, self.drone_category_id),
            manufacturing_date: self.manufacturing_date,
            has_it_competed: self.has_it_competed,
            inserted_timestamp: self.inserted_timestamp,
        }
    }
}

/// Validated fields for creating or replacing a drone.
#[derive(Debug, Clone, PartialEq)]
pub struct DroneParams {
    pub name: String,
    pub drone_category_id: i32,
    pub manufacturing_date: DateTime<Utc>,
    /// `None` keeps the stored value on update and means `false` on create.
    pub has_it_competed: Option<bool>,
}
