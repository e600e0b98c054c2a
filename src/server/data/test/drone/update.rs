use super::*;

/// Tests replacing a drone's fields while omitting the competed flag.
///
/// Expected: Ok(Some) with new values, the stored competed flag and the original
/// insertion timestamp
#[tokio::test]
async fn updates_drone_keeping_unset_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let quad = factory::drone_category::create_drone_category(db).await?;
    let hexa = factory::drone_category::create_drone_category(db).await?;
    let drone = factory::drone::DroneFactory::new(db, quad.id)
        .has_it_competed(true)
        .build()
        .await?;

    let repo = DroneRepository::new(db);
    let updated = repo
        .update(drone.id, params("Renamed", hexa.id))
        .await?
        .unwrap();

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.drone_category_id, hexa.id);
    assert!(updated.has_it_competed);
    assert_eq!(updated.inserted_timestamp, drone.inserted_timestamp);

    Ok(())
}

/// Expected: Ok(Some) with the flag overwritten
#[tokio::test]
async fn updates_competed_flag_when_provided() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::drone_category::create_drone_category(db).await?;
    let drone = factory::drone::DroneFactory::new(db, category.id)
        .has_it_competed(true)
        .build()
        .await?;

    let repo = DroneRepository::new(db);
    let updated = repo
        .update(
            drone.id,
            DroneParams {
                has_it_competed: Some(false),
                ..params(&drone.name, category.id)
            },
        )
        .await?
        .unwrap();

    assert!(!updated.has_it_competed);

    Ok(())
}

/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_drone() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::drone_category::create_drone_category(db).await?;

    let repo = DroneRepository::new(db);
    let result = repo.update(12, params("Ghost", category.id)).await?;

    assert!(result.is_none());

    Ok(())
}
