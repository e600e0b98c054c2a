//! Drone category domain models and parameters.

use crate::{
    model::drone_category::DroneCategoryDto,
    server::{model::resource::Resource, util::hyperlink::ResourceUrls},
};

/// Longest accepted category name.
pub const NAME_MAX_LENGTH: usize = 250;

pub const DUPLICATE_NAME: &str = "drone category with this name already exists.";

/// Drone category with the ids of its drones.
#[derive(Debug, Clone, PartialEq)]
pub struct DroneCategory {
    pub id: i32,
    pub name: String,
    /// Drones in this category, ordered by drone name.
    pub drone_ids: Vec<i32>,
}

impl DroneCategory {
    /// Converts entity models to a domain model.
    ///
    /// # Arguments
    /// - `entity` - The category entity
    /// - `drones` - Drones belonging to the category, already ordered
    pub fn from_entity(
        entity: entity::drone_category::Model,
        drones: Vec<entity::drone::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            drone_ids: drones.into_iter().map(|d| d.id).collect(),
        }
    }

    /// Converts domain model to DTO for API responses.
    pub fn into_dto(self, urls: &ResourceUrls) -> DroneCategoryDto {
        DroneCategoryDto {
            url: urls.detail(Resource::DroneCategories, self.id),
            pk: self.id,
            name: self.name,
            drones: self
                .drone_ids
                .into_iter()
                .map(|id| urls.detail(Resource::Drones, id))
                .collect(),
        }
    }
}

/// Validated fields for creating or replacing a drone category.
#[derive(Debug, Clone, PartialEq)]
pub struct DroneCategoryParams {
    pub name: String,
}
