use super::*;

/// Tests renaming a category.
///
/// Expected: Ok(Some) with the new name persisted
#[tokio::test]
async fn renames_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::drone_category::create_drone_category(db).await?;

    let repo = DroneCategoryRepository::new(db);
    let updated = repo
        .update(
            category.id,
            DroneCategoryParams {
                name: "Octocopter".to_string(),
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.id, category.id);
    assert_eq!(updated.name, "Octocopter");

    let stored = entity::prelude::DroneCategory::find_by_id(category.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.name, "Octocopter");

    Ok(())
}

/// Expected: Ok(None) and nothing inserted
#[tokio::test]
async fn returns_none_for_missing_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DroneCategoryRepository::new(db);
    let result = repo
        .update(
            7,
            DroneCategoryParams {
                name: "Octocopter".to_string(),
            },
        )
        .await?;

    assert!(result.is_none());
    assert_eq!(entity::prelude::DroneCategory::find().count(db).await?, 0);

    Ok(())
}
