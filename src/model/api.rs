use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Field name mapped to the validation messages reported for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct FieldErrorsDto(pub BTreeMap<String, Vec<String>>);

/// Directory of collection URLs returned by the root endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ApiRootDto {
    #[serde(rename = "drone-categories")]
    pub drone_categories: String,
    pub drones: String,
    pub pilots: String,
    pub competitions: String,
}
