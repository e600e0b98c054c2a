use super::*;

/// Tests creating a pilot without a gender.
///
/// Expected: Ok with the male default and no competitions
#[tokio::test]
async fn creates_pilot_with_default_gender() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PilotRepository::new(db);
    let pilot = repo
        .create(PilotParams {
            name: "Penelope Pitstop".to_string(),
            gender: None,
            races_count: 0,
        })
        .await?;

    assert_eq!(pilot.gender, Gender::Male);
    assert!(pilot.competitions.is_empty());

    let stored = entity::prelude::Pilot::find_by_id(pilot.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.gender, "M");

    Ok(())
}

/// Expected: Ok with the given gender stored
#[tokio::test]
async fn creates_pilot_with_gender() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PilotRepository::new(db);
    let pilot = repo
        .create(PilotParams {
            name: "Penelope Pitstop".to_string(),
            gender: Some(Gender::Female),
            races_count: 3,
        })
        .await?;

    assert_eq!(pilot.gender, Gender::Female);
    assert_eq!(pilot.races_count, 3);

    Ok(())
}
