use super::*;

/// Expected: true for another category's name, false for an unused name
#[tokio::test]
async fn detects_existing_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::drone_category::DroneCategoryFactory::new(db)
        .name("Quadcopter")
        .build()
        .await?;

    let repo = DroneCategoryRepository::new(db);

    assert!(repo.name_taken("Quadcopter", None).await?);
    assert!(!repo.name_taken("Hexacopter", None).await?);

    Ok(())
}

/// Tests that a category keeping its own name is not a conflict.
///
/// Expected: false when the only match is the excluded category
#[tokio::test]
async fn ignores_excluded_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::drone_category::DroneCategoryFactory::new(db)
        .name("Quadcopter")
        .build()
        .await?;

    let repo = DroneCategoryRepository::new(db);

    assert!(!repo.name_taken("Quadcopter", Some(category.id)).await?);

    Ok(())
}
