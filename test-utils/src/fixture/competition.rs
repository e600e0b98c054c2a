//! Competition fixtures for creating in-memory test data.

use chrono::{DateTime, TimeZone, Utc};
use entity::competition;

/// Default distance in feet.
pub const DEFAULT_DISTANCE_IN_FEET: i32 = 800;

/// Default achievement date, 2017-10-20 05:03:20 UTC.
pub fn default_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2017, 10, 20, 5, 3, 20).unwrap()
}

/// Creates a competition entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - pilot_id: `1`
/// - drone_id: `1`
/// - distance_in_feet: `800`
/// - date: `2017-10-20T05:03:20Z`
pub fn entity() -> competition::Model {
    entity_builder().build()
}

/// Creates a competition entity builder for customization.
pub fn entity_builder() -> CompetitionEntityBuilder {
    CompetitionEntityBuilder::default()
}

/// Builder for customized competition entity models.
pub struct CompetitionEntityBuilder {
    id: i32,
    pilot_id: i32,
    drone_id: i32,
    distance_in_feet: i32,
    date: DateTime<Utc>,
}

impl Default for CompetitionEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            pilot_id: 1,
            drone_id: 1,
            distance_in_feet: DEFAULT_DISTANCE_IN_FEET,
            date: default_date(),
        }
    }
}

impl CompetitionEntityBuilder {
    /// Sets the competition ID.
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    /// Sets the competing pilot ID.
    pub fn pilot_id(mut self, pilot_id: i32) -> Self {
        self.pilot_id = pilot_id;
        self
    }

    /// Sets the drone ID.
    pub fn drone_id(mut self, drone_id: i32) -> Self {
        self.drone_id = drone_id;
        self
    }

    /// Sets the distance in feet.
    pub fn distance_in_feet(mut self, distance_in_feet: i32) -> Self {
        self.distance_in_feet = distance_in_feet;
        self
    }

    /// Sets the achievement date.
    pub fn date(mut self, date: DateTime<Utc>) -> Self {
        self.date = date;
        self
    }

    /// Builds and returns the competition entity model.
    pub fn build(self) -> competition::Model {
        competition::Model {
            id: self.id,
            pilot_id: self.pilot_id,
            drone_id: self.drone_id,
            distance_in_feet: self.distance_in_feet,
            date: self.date,
        }
    }
}
