//! Drone category fixtures for creating in-memory test data.

use entity::drone_category;

/// Default test drone category name.
pub const DEFAULT_NAME: &str = "Quadcopter";

/// Creates a drone category entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"Quadcopter"`
pub fn entity() -> drone_category::Model {
    entity_builder().build()
}

/// Creates a drone category entity builder for customization.
pub fn entity_builder() -> DroneCategoryEntityBuilder {
    DroneCategoryEntityBuilder::default()
}

/// Builder for customized drone category entity models.
pub struct DroneCategoryEntityBuilder {
    id: i32,
    name: String,
}

impl Default for DroneCategoryEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            name: DEFAULT_NAME.to_string(),
        }
    }
}

impl DroneCategoryEntityBuilder {
    /// Sets the category ID.
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    /// Sets the category name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and returns the drone category entity model.
    pub fn build(self) -> drone_category::Model {
        drone_category::Model {
            id: self.id,
            name: self.name,
        }
    }
}
