use super::*;

/// Expected: Ok with drones across categories sorted by name
#[tokio::test]
async fn returns_drones_ordered_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let quad = factory::drone_category::create_drone_category(db).await?;
    let hexa = factory::drone_category::create_drone_category(db).await?;
    for (name, category_id) in [("Skipper", quad.id), ("Atom", hexa.id), ("Mako", quad.id)] {
        factory::drone::DroneFactory::new(db, category_id)
            .name(name)
            .build()
            .await?;
    }

    let repo = DroneRepository::new(db);
    let drones = repo.get_all().await?;

    let names: Vec<&str> = drones.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["Atom", "Mako", "Skipper"]);

    Ok(())
}

/// Expected: Ok(Some) for an existing drone and Ok(None) otherwise
#[tokio::test]
async fn gets_drone_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::drone_category::create_drone_category(db).await?;
    let drone = factory::drone::create_drone(db, category.id).await?;

    let repo = DroneRepository::new(db);

    let found = repo.get_by_id(drone.id).await?.unwrap();
    assert_eq!(found.name, drone.name);
    assert!(repo.get_by_id(drone.id + 1).await?.is_none());
    assert!(repo.exists(drone.id).await?);
    assert!(!repo.exists(drone.id + 1).await?);

    Ok(())
}
