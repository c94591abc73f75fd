use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::leaderboard::{LeaderboardFilter, LeaderboardResponse},
};

use crate::error::{WebError, WebResult};

use super::services;

#[utoipa::path(
    get,
    path = "/api/leaderboard",
    params(LeaderboardFilter),
    responses(
        (status = 200, description = "Ranked table for one event and result type", body = LeaderboardResponse),
        (status = 400, description = "Unknown eventId or type")
    ),
    tag = "leaderboard"
)]
pub async fn get_leaderboard(
    State(db): State<Database>,
    Query(filter): Query<LeaderboardFilter>,
) -> WebResult<Response> {
    let (event_id, record_type) = filter.resolve().map_err(WebError::BadRequest)?;

    let response = services::get_leaderboard(db.pool(), event_id, record_type).await?;

    Ok(Json(response).into_response())
}
