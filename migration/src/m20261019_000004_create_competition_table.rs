use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20261019_000002_create_drone_table::Drone, m20261019_000003_create_pilot_table::Pilot,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Competition::Table)
                    .if_not_exists()
                    .col(pk_auto(Competition::Id))
                    .col(integer(Competition::PilotId))
                    .col(integer(Competition::DroneId))
                    .col(integer(Competition::DistanceInFeet))
                    .col(timestamp_with_time_zone(Competition::Date))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_competition_pilot_id")
                            .from(Competition::Table, Competition::PilotId)
                            .to(Pilot::Table, Pilot::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_competition_drone_id")
                            .from(Competition::Table, Competition::DroneId)
                            .to(Drone::Table, Drone::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Competition::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Competition {
    Table,
    Id,
    PilotId,
    DroneId,
    DistanceInFeet,
    Date,
}
