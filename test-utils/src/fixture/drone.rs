//! Drone fixtures for creating in-memory test data.
//!
//! Provides fixture functions for creating drone entity models without database insertion.
//! Timestamps default to fixed dates so assertions stay deterministic.

use chrono::{DateTime, TimeZone, Utc};
use entity::drone;

/// Default test drone name.
pub const DEFAULT_NAME: &str = "WonderDrone";

/// Default drone category ID for drones.
pub const DEFAULT_DRONE_CATEGORY_ID: i32 = 1;

/// Default manufacturing date, 2017-07-20 10:00:00 UTC.
pub fn default_manufacturing_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2017, 7, 20, 10, 0, 0).unwrap()
}

/// Default insertion timestamp, 2017-08-01 12:00:00 UTC.
pub fn default_inserted_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2017, 8, 1, 12, 0, 0).unwrap()
}

/// Creates a drone entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"WonderDrone"`
/// - drone_category_id: `1`
/// - manufacturing_date: `2017-07-20T10:00:00Z`
/// - has_it_competed: `false`
/// - inserted_timestamp: `2017-08-01T12:00:00Z`
pub fn entity() -> drone::Model {
    entity_builder().build()
}

/// Creates a drone entity builder for customization.
pub fn entity_builder() -> DroneEntityBuilder {
    DroneEntityBuilder::default()
}

/// Builder for customized drone entity models.
pub struct DroneEntityBuilder {
    id: i32,
    name: String,
    drone_category_id: i32,
    manufacturing_date: DateTime<Utc>,
    has_it_competed: bool,
    inserted_timestamp: DateTime<Utc>,
}

impl Default for DroneEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            name: DEFAULT_NAME.to_string(),
            drone_category_id: DEFAULT_DRONE_CATEGORY_ID,
            manufacturing_date: default_manufacturing_date(),
            has_it_competed: false,
            inserted_timestamp: default_inserted_timestamp(),
        }
    }
}

impl DroneEntityBuilder {
    /// Sets the drone ID.
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    /// Sets the drone name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the owning drone category ID.
    pub fn drone_category_id(mut self, drone_category_id: i32) -> Self {
        self.drone_category_id = drone_category_id;
        self
    }

    /// Sets the manufacturing date.
    pub fn manufacturing_date(mut self, manufacturing_date: DateTime<Utc>) -> Self {
        self.manufacturing_date = manufacturing_date;
        self
    }

    /// Sets whether the drone has competed.
    pub fn has_it_competed(mut self, has_it_competed: bool) -> Self {
        self.has_it_competed = has_it_competed;
        self
    }

    /// Builds and returns the drone entity model.
    pub fn build(self) -> drone::Model {
        drone::Model {
            id: self.id,
            name: self.name,
            drone_category_id: self.drone_category_id,
            manufacturing_date: self.manufacturing_date,
            has_it_competed: self.has_it_competed,
            inserted_timestamp: self.inserted_timestamp,
        }
    }
}
