use crate::server::{
    data::pilot::PilotRepository,
    model::pilot::{Gender, PilotParams},
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get;
mod update;
