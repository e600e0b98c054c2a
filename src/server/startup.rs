use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::server::{config::Config, error::AppError};

const DEFAULT_LOG_FILTER: &str = "info,sqlx=warn";

/// Installs the global tracing subscriber.
///
/// The filter is read from `RUST_LOG`, falling back to `info,sqlx=warn`.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then runs all pending SeaORM migrations so the schema is up-to-date.
/// This function must complete successfully before the application can serve requests.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    tracing::info!("Database ready");

    Ok(db)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{EntityTrait, PaginatorTrait};
    use test_utils::factory;

    use crate::server::data::drone_category::DroneCategoryRepository;

    fn memory_config() -> Config {
        Config {
            database_url: "sqlite::memory:".to_string(),
            bind_address: "127.0.0.1:0".to_string(),
            public_url: None,
        }
    }

    /// Tests that the migrated schema accepts the entities and cascades deletes.
    ///
    /// Expected: rows insert through every table, deleting the category removes its
    /// drones and competitions but keeps the pilot
    #[tokio::test]
    async fn migrated_schema_matches_entities() {
        let db = connect_to_database(&memory_config()).await.unwrap();

        let (category, _drone, pilot, _competition) =
            factory::helpers::create_competition_with_dependencies(&db)
                .await
                .unwrap();

        let deleted = DroneCategoryRepository::new(&db)
            .delete(category.id)
            .await
            .unwrap();

        assert!(deleted);
        assert_eq!(entity::prelude::Drone::find().count(&db).await.unwrap(), 0);
        assert_eq!(
            entity::prelude::Competition::find().count(&db).await.unwrap(),
            0
        );
        assert!(entity::prelude::Pilot::find_by_id(pilot.id)
            .one(&db)
            .await
            .unwrap()
            .is_some());
    }

    /// Expected: the second insert trips the UNIQUE constraint on the name column
    #[tokio::test]
    async fn migrated_schema_enforces_unique_names() {
        let db = connect_to_database(&memory_config()).await.unwrap();

        factory::drone_category::DroneCategoryFactory::new(&db)
            .name("Quadcopter")
            .build()
            .await
            .unwrap();

        let duplicate = factory::drone_category::DroneCategoryFactory::new(&db)
            .name("Quadcopter")
            .build()
            .await;

        assert!(duplicate.is_err());
    }

    /// Expected: running the migrator a second time is a no-op
    #[tokio::test]
    async fn migrations_are_idempotent() {
        use migration::{Migrator, MigratorTrait};

        let db = connect_to_database(&memory_config()).await.unwrap();

        Migrator::up(&db, None).await.unwrap();

        assert!(Migrator::get_pending_migrations(&db).await.unwrap().is_empty());
    }
}
