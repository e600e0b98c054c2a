use crate::server::{
    data::drone_category::DroneCategoryRepository,
    model::drone_category::DroneCategoryParams,
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all;
mod get_by_id;
mod name_taken;
mod update;
