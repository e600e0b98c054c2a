use super::*;

/// Expected: Ok(true) with the pilot's competitions removed and the drone kept
#[tokio::test]
async fn deletes_pilot_and_competitions() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_category, drone, pilot, _competition) =
        factory::helpers::create_competition_with_dependencies(db).await?;

    let repo = PilotRepository::new(db);

    assert!(repo.delete(pilot.id).await?);
    assert!(!repo.delete(pilot.id).await?);
    assert_eq!(entity::prelude::Competition::find().count(db).await?, 0);
    assert!(entity::prelude::Drone::find_by_id(drone.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}
