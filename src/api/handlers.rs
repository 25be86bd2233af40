use std::sync::MutexGuard;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;

use super::{ApiError, SharedDb};
use crate::{
    cli::types::PlayerId,
    error::RosterError,
    storage::{PlayerFields, RosterDatabase, StoredPlayer},
};

type ApiResult<T> = std::result::Result<T, ApiError>;

fn lock(db: &SharedDb) -> ApiResult<MutexGuard<'_, RosterDatabase>> {
    db.lock().map_err(|_| {
        ApiError::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Database connection unavailable",
        )
    })
}

fn fields_from(
    body: std::result::Result<Json<PlayerFields>, JsonRejection>,
) -> ApiResult<PlayerFields> {
    body.map(|Json(fields)| fields)
        .map_err(|rejection| ApiError::bad_request(rejection.body_text()))
}

pub async fn get_player(
    State(db): State<SharedDb>,
    Path(id): Path<i64>,
) -> ApiResult<Json<StoredPlayer>> {
    let id = PlayerId::new(id);
    match lock(&db)?.get(id) {
        Ok(player) => Ok(Json(player)),
        Err(RosterError::NotFound { .. }) => Err(ApiError::new(
            StatusCode::NOT_FOUND,
            format!("Could not find player with ID {id}"),
        )),
        Err(e) => Err(e.into()),
    }
}

/// Create-only: an id that is already taken answers 409.
pub async fn put_player(
    State(db): State<SharedDb>,
    Path(id): Path<i64>,
    body: std::result::Result<Json<PlayerFields>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<StoredPlayer>)> {
    let fields = fields_from(body)?;
    let player = lock(&db)?.update(PlayerId::new(id), &fields, true)?;
    Ok((StatusCode::CREATED, Json(player)))
}

pub async fn patch_player(
    State(db): State<SharedDb>,
    Path(id): Path<i64>,
    body: std::result::Result<Json<PlayerFields>, JsonRejection>,
) -> ApiResult<Json<StoredPlayer>> {
    let fields = fields_from(body)?;
    let player = lock(&db)?.update(PlayerId::new(id), &fields, false)?;
    Ok(Json(player))
}

pub async fn delete_player(
    State(db): State<SharedDb>,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    lock(&db)?.delete(PlayerId::new(id))?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_players(State(db): State<SharedDb>) -> ApiResult<Json<Vec<StoredPlayer>>> {
    Ok(Json(lock(&db)?.list()?))
}

#[derive(Debug, Serialize)]
pub struct BulkCreateResponse {
    pub message: String,
    pub added_players: Vec<StoredPlayer>,
    pub errors: Vec<String>,
}

pub async fn post_players(
    State(db): State<SharedDb>,
    body: std::result::Result<Json<Value>, JsonRejection>,
) -> ApiResult<Response> {
    let invalid = || ApiError::bad_request("Invalid data format. Expected a list of players.");

    let entries = match body {
        Ok(Json(Value::Array(entries))) if !entries.is_empty() => entries,
        _ => return Err(invalid()),
    };

    let report = lock(&db)?.bulk_create(&entries);
    let status = if report.is_success() {
        StatusCode::CREATED
    } else {
        StatusCode::BAD_REQUEST
    };

    let response = BulkCreateResponse {
        message: format!("Successfully added {} players", report.inserted.len()),
        added_players: report.inserted,
        errors: report.errors,
    };
    Ok((status, Json(response)).into_response())
}
