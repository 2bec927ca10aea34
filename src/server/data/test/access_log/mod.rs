use crate::server::{
    data::access_log::AccessLogRepository,
    error::AppError,
    model::{
        access_log::{AccessStatus, CreateAccessLogParam},
        user::Role,
    },
};
use chrono::{Duration, Utc};
use test_utils::{builder::TestBuilder, factory::access_log::AccessLogFactory};

mod create;
mod recent;
