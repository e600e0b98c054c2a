use super::*;

/// Tests creating a drone without an explicit competed flag.
///
/// Expected: Ok with `has_it_competed` false and an insertion timestamp set
#[tokio::test]
async fn creates_drone_with_defaults() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::drone_category::create_drone_category(db).await?;
    let before = Utc::now();

    let repo = DroneRepository::new(db);
    let drone = repo.create(params("WonderDrone", category.id)).await?;

    assert_eq!(drone.name, "WonderDrone");
    assert_eq!(drone.drone_category_id, category.id);
    assert_eq!(
        drone.manufacturing_date,
        Utc.with_ymd_and_hms(2017, 7, 20, 2, 2, 0).unwrap()
    );
    assert!(!drone.has_it_competed);
    assert!(drone.inserted_timestamp >= before);

    Ok(())
}

/// Tests the foreign key to the category.
///
/// Expected: Err and no drone stored
#[tokio::test]
async fn fails_for_missing_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DroneRepository::new(db);
    let result = repo.create(params("WonderDrone", 99)).await;

    assert!(result.is_err());
    assert_eq!(entity::prelude::Drone::find().count(db).await?, 0);

    Ok(())
}
