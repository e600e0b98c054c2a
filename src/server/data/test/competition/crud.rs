use super::*;

/// Tests the create, update and delete cycle of a competition.
///
/// Expected: each step reflects the new state
#[tokio::test]
async fn creates_updates_and_deletes_competition() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::drone_category::create_drone_category(db).await?;
    let drone = factory::drone::create_drone(db, category.id).await?;
    let other_drone = factory::drone::create_drone(db, category.id).await?;
    let pilot = factory::pilot::create_pilot(db).await?;
    let date = Utc.with_ymd_and_hms(2017, 10, 21, 6, 3, 20).unwrap();

    let repo = CompetitionRepository::new(db);
    let created = repo
        .create(CompetitionParams {
            pilot_id: pilot.id,
            drone_id: drone.id,
            distance_in_feet: 800,
            date,
        })
        .await?;

    assert_eq!(created.pilot_id, pilot.id);
    assert_eq!(created.distance_in_feet, 800);
    assert!(repo.exists(created.id).await?);

    let updated = repo
        .update(
            created.id,
            CompetitionParams {
                pilot_id: pilot.id,
                drone_id: other_drone.id,
                distance_in_feet: 2800,
                date,
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.drone_id, other_drone.id);
    assert_eq!(updated.distance_in_feet, 2800);

    assert!(repo.delete(created.id).await?);
    assert!(repo.get_by_id(created.id).await?.is_none());
    assert!(!repo.delete(created.id).await?);

    Ok(())
}

/// Tests the foreign keys to pilot and drone.
///
/// Expected: Err
#[tokio::test]
async fn fails_for_missing_pilot() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::drone_category::create_drone_category(db).await?;
    let drone = factory::drone::create_drone(db, category.id).await?;

    let repo = CompetitionRepository::new(db);
    let result = repo
        .create(CompetitionParams {
            pilot_id: 404,
            drone_id: drone.id,
            distance_in_feet: 800,
            date: Utc::now(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
