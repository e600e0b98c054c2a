//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a competition together with every record it depends on.
///
/// Inserts, in order:
/// 1. Drone category
/// 2. Drone in that category
/// 3. Pilot
/// 4. Competition for the pilot and drone
///
/// # Returns
/// - `Ok((category, drone, pilot, competition))` - All created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_competition_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::drone_category::Model,
        entity::drone::Model,
        entity::pilot::Model,
        entity::competition::Model,
    ),
    DbErr,
> {
    let category = crate::factory::drone_category::create_drone_category(db).await?;
    let drone = crate::factory::drone::create_drone(db, category.id).await?;
    let pilot = crate::factory::pilot::create_pilot(db).await?;
    let competition =
        crate::factory::competition::create_competition(db, pilot.id, drone.id).await?;

    Ok((category, drone, pilot, competition))
}
