use crate::server::{
    data::competition::CompetitionRepository, model::competition::CompetitionParams,
};
use chrono::{TimeZone, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod crud;
mod get_all;
