//! Factory methods for creating test data.
//!
//! This module provides factory methods that insert test entities with sensible defaults,
//! reducing boilerplate in tests. Default values come from the fixtures, with names made
//! unique through a shared counter so several records can coexist.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let category = factory::drone_category::create_drone_category(&db).await?;
//! let drone = factory::drone::create_drone(&db, category.id).await?;
//!
//! // Everything a competition needs in one call
//! let (category, drone, pilot, competition) =
//!     factory::helpers::create_competition_with_dependencies(&db).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let pilot = factory::pilot::PilotFactory::new(&db)
//!     .name("Peter Perfect")
//!     .gender("M")
//!     .build()
//!     .await?;
//! ```

pub mod competition;
pub mod drone;
pub mod drone_category;
pub mod helpers;
pub mod pilot;

pub use competition::create_competition;
pub use drone::create_drone;
pub use drone_category::create_drone_category;
pub use pilot::create_pilot;
