//! HTTP endpoint handlers.
//!
//! Each resource has a list+create endpoint on its collection path and a
//! retrieve+update+delete endpoint on its detail path. Handlers extract the request,
//! call the matching service and render domain models to DTOs with absolute URLs.

pub mod competition;
pub mod drone;
pub mod drone_category;
pub mod pilot;
pub mod root;

#[cfg(test)]
mod test;
