use super::*;

/// Tests that deleting a category removes its drones and their competitions.
///
/// Expected: Ok(true) with every dependent row gone
#[tokio::test]
async fn deletes_category_and_cascades() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (category, _drone, pilot, _competition) =
        factory::helpers::create_competition_with_dependencies(db).await?;

    let repo = DroneCategoryRepository::new(db);
    let deleted = repo.delete(category.id).await?;

    assert!(deleted);
    assert_eq!(entity::prelude::DroneCategory::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Drone::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Competition::find().count(db).await?, 0);
    assert!(entity::prelude::Pilot::find_by_id(pilot.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}

/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DroneCategoryRepository::new(db);
    let deleted = repo.delete(3).await?;

    assert!(!deleted);

    Ok(())
}
