use super::*;

/// Expected: Ok with the highest distance first and ties in insertion order
#[tokio::test]
async fn returns_longest_distance_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_category, drone, pilot, first) =
        factory::helpers::create_competition_with_dependencies(db).await?;
    let longest = factory::competition::CompetitionFactory::new(db, pilot.id, drone.id)
        .distance_in_feet(first.distance_in_feet + 1000)
        .build()
        .await?;
    let tie = factory::competition::CompetitionFactory::new(db, pilot.id, drone.id)
        .distance_in_feet(first.distance_in_feet)
        .build()
        .await?;

    let repo = CompetitionRepository::new(db);
    let competitions = repo.get_all().await?;

    let ids: Vec<i32> = competitions.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![longest.id, first.id, tie.id]);

    Ok(())
}
