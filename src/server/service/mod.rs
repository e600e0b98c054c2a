//! Service layer for validation and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository) layer. They
//! turn raw JSON objects into validated parameter models, run the checks that need the
//! database (unique names, referenced records exist) and delegate persistence to the
//! repositories. Services return domain models; rendering to DTOs happens in controllers.

pub mod competition;
pub mod drone;
pub mod drone_category;
pub mod pilot;

#[cfg(test)]
mod test;
