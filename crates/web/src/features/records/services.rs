use sqlx::PgPool;
use storage::{
    dto::record::{LeaderboardPayload, RecordQuery, RecordResponse},
    error::Result,
    models::{LeaderboardRecord, NewRecord},
    repository::{event::EventRepository, record::RecordRepository},
};

/// List events and the records matching the filter
pub async fn list_records(pool: &PgPool, query: &RecordQuery) -> Result<LeaderboardPayload> {
    let events = EventRepository::new(pool).list().await?;
    let records = RecordRepository::new(pool).list(query).await?;

    Ok(LeaderboardPayload {
        events,
        records: records.into_iter().map(RecordResponse::from).collect(),
    })
}

/// Store a resolved submission
pub async fn create_record(pool: &PgPool, record: &NewRecord) -> Result<LeaderboardRecord> {
    let repo = RecordRepository::new(pool);
    repo.create(record).await
}
