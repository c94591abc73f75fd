use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use storage::{Database, dto::seed::SeedResponse};

use crate::error::WebResult;

use super::services;

#[utoipa::path(
    post,
    path = "/api/seed",
    responses(
        (status = 200, description = "All data replaced with the reference set", body = SeedResponse),
        (status = 403, description = "Seeding is disabled in production")
    ),
    tag = "maintenance"
)]
pub async fn run_seed(State(db): State<Database>) -> WebResult<Response> {
    let summary = services::seed_reference_data(db.pool()).await.inspect_err(|e| {
        tracing::error!("Seed failed: {}", e);
    })?;

    tracing::info!(
        events = summary.events,
        records = summary.records,
        "Seed completed"
    );

    Ok(Json(SeedResponse {
        ok: true,
        message: "Seed completed from the built-in reference data.".to_string(),
        events: summary.events,
        records: summary.records,
    })
    .into_response())
}
