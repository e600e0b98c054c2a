//! SeaORM entities for the drone racing tables.

pub mod prelude;

pub mod competition;
pub mod drone;
pub mod drone_category;
pub mod pilot;
