use sqlx::PgPool;
use storage::{
    dto::{leaderboard::LeaderboardResponse, record::RecordQuery},
    error::Result,
    models::{EventId, ResultType},
    repository::{event::EventRepository, record::RecordRepository},
    services::ranking::rank_records,
};

/// Build one ranked table
pub async fn get_leaderboard(
    pool: &PgPool,
    event_id: EventId,
    record_type: ResultType,
) -> Result<LeaderboardResponse> {
    let event = EventRepository::new(pool).find_optional(event_id).await?;

    let query = RecordQuery {
        event_id: Some(event_id),
        record_type: Some(record_type),
    };
    let records = RecordRepository::new(pool).list(&query).await?;

    Ok(LeaderboardResponse {
        event,
        record_type,
        label: record_type.label().to_string(),
        entries: rank_records(records),
    })
}
