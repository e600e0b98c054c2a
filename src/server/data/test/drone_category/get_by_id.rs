use super::*;

/// Expected: Ok(Some) with the category and its drones
#[tokio::test]
async fn returns_category_with_drones() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::drone_category::create_drone_category(db).await?;
    let drone = factory::drone::create_drone(db, category.id).await?;

    let repo = DroneCategoryRepository::new(db);
    let result = repo.get_by_id(category.id).await?;

    let found = result.unwrap();
    assert_eq!(found.name, category.name);
    assert_eq!(found.drone_ids, vec![drone.id]);

    Ok(())
}

/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DroneCategoryRepository::new(db);
    let result = repo.get_by_id(42).await?;

    assert!(result.is_none());

    Ok(())
}
