use super::*;

/// Tests that categories are ordered by name and carry their own drones.
///
/// Expected: Ok with categories sorted by name, drones grouped and sorted by name
#[tokio::test]
async fn returns_categories_ordered_with_drones() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let quad = factory::drone_category::DroneCategoryFactory::new(db)
        .name("Quadcopter")
        .build()
        .await?;
    let hexa = factory::drone_category::DroneCategoryFactory::new(db)
        .name("Hexacopter")
        .build()
        .await?;
    let empty = factory::drone_category::DroneCategoryFactory::new(db)
        .name("Octocopter")
        .build()
        .await?;

    let wonder = factory::drone::DroneFactory::new(db, quad.id)
        .name("WonderDrone")
        .build()
        .await?;
    let atom = factory::drone::DroneFactory::new(db, quad.id)
        .name("Atom")
        .build()
        .await?;
    let falcon = factory::drone::DroneFactory::new(db, hexa.id)
        .name("Falcon")
        .build()
        .await?;

    let repo = DroneCategoryRepository::new(db);
    let categories = repo.get_all().await?;

    let names: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Hexacopter", "Octocopter", "Quadcopter"]);

    assert_eq!(categories[0].drone_ids, vec![falcon.id]);
    assert_eq!(categories[1].id, empty.id);
    assert!(categories[1].drone_ids.is_empty());
    assert_eq!(categories[2].drone_ids, vec![atom.id, wonder.id]);

    Ok(())
}

/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_when_no_categories() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DroneCategoryRepository::new(db);
    let categories = repo.get_all().await?;

    assert!(categories.is_empty());

    Ok(())
}
