use super::*;

/// Tests that pilots come back ordered by name with their competitions nested
/// longest distance first.
///
/// Expected: Ok with pilots sorted and competitions grouped per pilot
#[tokio::test]
async fn returns_pilots_with_competitions() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::drone_category::create_drone_category(db).await?;
    let drone = factory::drone::create_drone(db, category.id).await?;
    let peter = factory::pilot::PilotFactory::new(db)
        .name("Peter Perfect")
        .build()
        .await?;
    let penelope = factory::pilot::PilotFactory::new(db)
        .name("Penelope Pitstop")
        .build()
        .await?;

    let short = factory::competition::CompetitionFactory::new(db, peter.id, drone.id)
        .distance_in_feet(500)
        .build()
        .await?;
    let long = factory::competition::CompetitionFactory::new(db, peter.id, drone.id)
        .distance_in_feet(2800)
        .build()
        .await?;

    let repo = PilotRepository::new(db);
    let pilots = repo.get_all().await?;

    assert_eq!(pilots.len(), 2);
    assert_eq!(pilots[0].id, penelope.id);
    assert!(pilots[0].competitions.is_empty());
    assert_eq!(pilots[1].id, peter.id);
    let ids: Vec<i32> = pilots[1].competitions.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![long.id, short.id]);

    let single = repo.get_by_id(peter.id).await?.unwrap();
    assert_eq!(single.competitions.len(), 2);
    assert_eq!(single.competitions[0].distance_in_feet, 2800);

    Ok(())
}

/// Expected: Ok(None) and `exists` false
#[tokio::test]
async fn returns_none_for_missing_pilot() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PilotRepository::new(db);

    assert!(repo.get_by_id(5).await?.is_none());
    assert!(!repo.exists(5).await?);

    Ok(())
}
