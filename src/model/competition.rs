use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CompetitionDto {
    pub url: String,
    pub pk: i32,
    /// URL of the competing pilot.
    pub pilot: String,
    /// URL of the drone flown.
    pub drone: String,
    pub distance_in_feet: i32,
    pub date: DateTime<Utc>,
}

/// Request body for creating or replacing a competition.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CompetitionInputDto {
    pub pilot: String,
    pub drone: String,
    pub distance_in_feet: i32,
    pub date: String,
}
