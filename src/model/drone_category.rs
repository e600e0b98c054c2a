use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DroneCategoryDto {
    pub url: String,
    pub pk: i32,
    pub name: String,
    /// URLs of the drones in this category, ordered by drone name.
    pub drones: Vec<String>,
}

/// Request body for creating or replacing a drone category.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DroneCategoryInputDto {
    pub name: String,
}
