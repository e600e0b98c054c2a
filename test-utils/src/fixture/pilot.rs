//! Pilot fixtures for creating in-memory test data.

use chrono::{DateTime, TimeZone, Utc};
use entity::pilot;

/// Default test pilot name.
pub const DEFAULT_NAME: &str = "Penelope Pitstop";

/// Default gender code.
pub const DEFAULT_GENDER: &str = "F";

/// Default number of races.
pub const DEFAULT_RACES_COUNT: i32 = 0;

/// Default insertion timestamp, 2017-08-01 12:00:00 UTC.
pub fn default_inserted_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2017, 8, 1, 12, 0, 0).unwrap()
}

/// Creates a pilot entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"Penelope Pitstop"`
/// - gender: `"F"`
/// - races_count: `0`
/// - inserted_timestamp: `2017-08-01T12:00:00Z`
pub fn entity() -> pilot::Model {
    entity_builder().build()
}

/// Creates a pilot entity builder for customization.
pub fn entity_builder() -> PilotEntityBuilder {
    PilotEntityBuilder::default()
}

/// Builder for customized pilot entity models.
pub struct PilotEntityBuilder {
    id: i32,
    name: String,
    gender: String,
    races_count: i32,
    inserted_timestamp: DateTime<Utc>,
}

impl Default for PilotEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            name: DEFAULT_NAME.to_string(),
            gender: DEFAULT_GENDER.to_string(),
            races_count: DEFAULT_RACES_COUNT,
            inserted_timestamp: default_inserted_timestamp(),
        }
    }
}

impl PilotEntityBuilder {
    /// Sets the pilot ID.
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    /// Sets the pilot name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the single letter gender code.
    pub fn gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = gender.into();
        self
    }

    /// Sets the number of races.
    pub fn races_count(mut self, races_count: i32) -> Self {
        self.races_count = races_count;
        self
    }

    /// Builds and returns the pilot entity model.
    pub fn build(self) -> pilot::Model {
        pilot::Model {
            id: self.id,
            name: self.name,
            gender: self.gender,
            races_count: self.races_count,
            inserted_timestamp: self.inserted_timestamp,
        }
    }
}
