//! Test fixtures providing reusable test data without database insertion.
//!
//! This module contains fixture functions that create in-memory entity models for use in
//! unit tests and as default values for factories. Unlike factories, fixtures do NOT insert
//! data into the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let drone = fixture::drone::entity();
//!
//! let competed = fixture::drone::entity_builder()
//!     .has_it_competed(true)
//!     .build();
//! ```

pub mod competition;
pub mod drone;
pub mod drone_category;
pub mod pilot;

pub use competition::{entity as competition_entity, entity_builder as competition_entity_builder};
pub use drone::{entity as drone_entity, entity_builder as drone_entity_builder};
pub use drone_category::{
    entity as drone_category_entity, entity_builder as drone_category_entity_builder,
};
pub use pilot::{entity as pilot_entity, entity_builder as pilot_entity_builder};
