use super::*;

/// Tests that an omitted gender keeps the stored one.
///
/// Expected: Ok(Some) with new name and races, gender unchanged
#[tokio::test]
async fn updates_pilot_keeping_gender() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let pilot = factory::pilot::PilotFactory::new(db)
        .gender("F")
        .build()
        .await?;

    let repo = PilotRepository::new(db);
    let updated = repo
        .update(
            pilot.id,
            PilotParams {
                name: "Penelope".to_string(),
                gender: None,
                races_count: 12,
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, "Penelope");
    assert_eq!(updated.races_count, 12);
    assert_eq!(updated.gender, Gender::Female);
    assert_eq!(updated.inserted_timestamp, pilot.inserted_timestamp);

    Ok(())
}

/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_pilot() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PilotRepository::new(db);
    let result = repo
        .update(
            1,
            PilotParams {
                name: "Nobody".to_string(),
                gender: Some(Gender::Male),
                races_count: 0,
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
