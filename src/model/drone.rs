use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DroneDto {
    pub url: String,
    pub pk: i32,
    pub name: String,
    /// URL of the drone category.
    pub drone_category: String,
    pub manufacturing_date: DateTime<Utc>,
    pub has_it_competed: bool,
    pub inserted_timestamp: DateTime<Utc>,
}

/// Request body for creating or replacing a drone.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DroneInputDto {
    pub name: String,
    /// URL of an existing drone category.
    pub drone_category: String,
    /// RFC 3339 date-time or `YYYY-MM-DD`.
    pub manufacturing_date: String,
    /// Defaults to `false` on create; left unchanged on update when omitted.
    pub has_it_competed: Option<bool>,
}
