/// The collections exposed by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    DroneCategories,
    Drones,
    Pilots,
    Competitions,
}

impl Resource {
    /// URL path segment of the collection.
    pub fn path(self) -> &'static str {
        match self {
            Self::DroneCategories => "drone-categories",
            Self::Drones => "drones",
            Self::Pilots => "pilots",
            Self::Competitions => "competitions",
        }
    }
}
