use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::competition::CompetitionDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PilotDto {
    pub url: String,
    pub pk: i32,
    pub name: String,
    /// `"M"` or `"F"`.
    pub gender: String,
    pub gender_description: String,
    pub races_count: i32,
    pub inserted_timestamp: DateTime<Utc>,
    /// Competitions of this pilot, longest distance first.
    pub competitions: Vec<CompetitionDto>,
}

/// Request body for creating or replacing a pilot.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PilotInputDto {
    pub name: String,
    /// `"M"` (default) or `"F"`.
    pub gender: Option<String>,
    pub races_count: i32,
}
