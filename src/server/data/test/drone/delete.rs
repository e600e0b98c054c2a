use super::*;

/// Tests that deleting a drone removes its competitions but keeps its category.
///
/// Expected: Ok(true), then Ok(false) on a second attempt
#[tokio::test]
async fn deletes_drone_and_its_competitions() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (category, drone, _pilot, _competition) =
        factory::helpers::create_competition_with_dependencies(db).await?;

    let repo = DroneRepository::new(db);

    assert!(repo.delete(drone.id).await?);
    assert!(!repo.delete(drone.id).await?);
    assert_eq!(entity::prelude::Competition::find().count(db).await?, 0);
    assert!(entity::prelude::DroneCategory::find_by_id(category.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}

/// Expected: true for a used name unless that drone is excluded
#[tokio::test]
async fn checks_name_uniqueness() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::drone_category::create_drone_category(db).await?;
    let drone = factory::drone::DroneFactory::new(db, category.id)
        .name("Atom")
        .build()
        .await?;

    let repo = DroneRepository::new(db);

    assert!(repo.name_taken("Atom", None).await?);
    assert!(!repo.name_taken("Atom", Some(drone.id)).await?);
    assert!(!repo.name_taken("Mako", None).await?);

    Ok(())
}
