use super::*;

/// Tests creating a category.
///
/// Expected: Ok with the category persisted and no drones
#[tokio::test]
async fn creates_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DroneCategoryRepository::new(db);
    let category = repo
        .create(DroneCategoryParams {
            name: "Hexacopter".to_string(),
        })
        .await?;

    assert_eq!(category.name, "Hexacopter");
    assert!(category.drone_ids.is_empty());

    let stored = entity::prelude::DroneCategory::find_by_id(category.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.name, "Hexacopter");

    Ok(())
}

/// Tests the unique constraint on category names.
///
/// Expected: Err from the database
#[tokio::test]
async fn fails_for_duplicate_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::drone_category::DroneCategoryFactory::new(db)
        .name("Quadcopter")
        .build()
        .await?;

    let repo = DroneCategoryRepository::new(db);
    let result = repo
        .create(DroneCategoryParams {
            name: "Quadcopter".to_string(),
        })
        .await;

    assert!(result.is_err());
    assert_eq!(entity::prelude::DroneCategory::find().count(db).await?, 1);

    Ok(())
}
