use crate::server::{data::photo::PhotoRepository, model::photo::CreatePhotoParam};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory::photo::PhotoFactory};

mod create;
