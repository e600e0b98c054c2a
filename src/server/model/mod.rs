//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models in the service layer and transformed
//! to DTOs at the controller boundary. Parameter types carry validated input from the
//! service layer down to the repositories.

pub mod competition;
pub mod drone;
pub mod drone_category;
pub mod pilot;
pub mod resource;
