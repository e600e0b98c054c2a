//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! resource. Repositories use SeaORM entity models internally and return domain models to
//! keep the data layer separate from validation and rendering.

pub mod competition;
pub mod drone;
pub mod drone_category;
pub mod pilot;

#[cfg(test)]
mod test;
