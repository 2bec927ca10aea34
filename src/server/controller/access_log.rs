use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        access_log::{AccessLogDto, CreateAccessLogDto},
        api::{ErrorDto, MessageDto},
    },
    server::{
        error::AppError, model::access_log::RecordAccessParam,
        service::access_log::AccessLogService, state::AppState, util::parse::forwarded_ip,
    },
};

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListLogsParams {
    /// Maximum number of records, defaults to `LOG_LIST_LIMIT` and is capped at 1000.
    pub limit: Option<u64>,
}

/// POST /api/log - Record an access attempt
///
/// The acting user's current role is frozen into the record. A missing `ip` falls back
/// to the first `X-Forwarded-For` entry.
///
/// # Returns
/// - `200 OK`: Acknowledgement
/// - `400 Bad Request`: Missing email or unknown status
#[utoipa::path(
    post,
    path = "/api/log",
    tag = "log",
    request_body = CreateAccessLogDto,
    responses(
        (status = 200, description = "Log saved", body = MessageDto),
        (status = 400, description = "Missing email or invalid status", body = ErrorDto),
    ),
)]
pub async fn record(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateAccessLogDto>,
) -> Result<impl IntoResponse, AppError> {
    let access_log_service =
        AccessLogService::new(state.store.as_ref(), &state.notifier, state.log_offset);

    let param = RecordAccessParam::from_dto(payload, forwarded_ip(&headers));
    access_log_service.record(param).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Log saved"))))
}

/// GET /api/logs - List recent access logs, newest first
#[utoipa::path(
    get,
    path = "/api/logs",
    tag = "log",
    params(ListLogsParams),
    responses((status = 200, description = "Recent access logs", body = Vec<AccessLogDto>)),
)]
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListLogsParams>,
) -> Result<impl IntoResponse, AppError> {
    let access_log_service =
        AccessLogService::new(state.store.as_ref(), &state.notifier, state.log_offset);

    let logs = access_log_service
        .list_recent(params.limit.unwrap_or(state.log_limit))
        .await?;

    let logs_dto: Vec<_> = logs.into_iter().map(|log| log.into_dto()).collect();

    Ok((StatusCode::OK, Json(logs_dto)))
}
