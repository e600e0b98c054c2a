//! JSON wire representations shared by every endpoint.
//!
//! DTOs in this module are what clients send and receive. Server-side domain models
//! convert into them at the controller boundary through `into_dto`.

pub mod api;
pub mod competition;
pub mod drone;
pub mod drone_category;
pub mod pilot;
