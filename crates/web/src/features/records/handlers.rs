use axum::{
    Json,
    extract::{Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::record::{
        CreateRecordRequest, CreateRecordResponse, CreatedRecord, LeaderboardPayload,
        RecordFilter,
    },
};
use validator::Validate;

use crate::error::{WebError, WebResult};

use super::services;

#[utoipa::path(
    get,
    path = "/api/records",
    params(RecordFilter),
    responses(
        (status = 200, description = "Events and matching records", body = LeaderboardPayload),
        (status = 400, description = "Unknown eventId or type")
    ),
    tag = "records"
)]
pub async fn list_records(
    State(db): State<Database>,
    Query(filter): Query<RecordFilter>,
) -> WebResult<Response> {
    let query = filter.resolve().map_err(WebError::BadRequest)?;

    let payload = services::list_records(db.pool(), &query).await?;

    Ok(Json(payload).into_response())
}

#[utoipa::path(
    post,
    path = "/api/records",
    request_body = CreateRecordRequest,
    responses(
        (status = 201, description = "Record created successfully", body = CreateRecordResponse),
        (status = 400, description = "Invalid body, missing field or unsupported value")
    ),
    tag = "records"
)]
pub async fn create_record(
    State(db): State<Database>,
    payload: Result<Json<CreateRecordRequest>, JsonRejection>,
) -> WebResult<Response> {
    let Json(req) = payload.map_err(|rejection| {
        tracing::debug!(%rejection, "Rejected record body");
        WebError::BadRequest("Invalid JSON body.".to_string())
    })?;

    req.validate()?;

    let record = req.resolve().map_err(|message| {
        tracing::warn!(%message, "Rejected record submission");
        WebError::BadRequest(message)
    })?;

    let created = services::create_record(db.pool(), &record).await?;
    tracing::info!(
        id = %created.id,
        event_id = %created.event_id,
        record_type = %created.record_type,
        "Record created"
    );

    let response = CreateRecordResponse {
        ok: true,
        record: CreatedRecord::from(created),
    };

    Ok((StatusCode::CREATED, Json(response)).into_response())
}
