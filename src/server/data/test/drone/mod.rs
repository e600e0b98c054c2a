use crate::server::{data::drone::DroneRepository, model::drone::DroneParams};
use chrono::{TimeZone, Utc};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all;
mod update;

fn params(name: &str, drone_category_id: i32) -> DroneParams {
    DroneParams {
        name: name.to_string(),
        drone_category_id,
        manufacturing_date: Utc.with_ymd_and_hms(2017, 7, 20, 2, 2, 0).unwrap(),
        has_it_competed: None,
    }
}
