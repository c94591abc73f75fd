use sqlx::{PgPool, QueryBuilder};
use uuid::Uuid;

use super::event::ensure_event;
use crate::dto::record::RecordQuery;
use crate::error::{Result, StorageError};
use crate::models::{LeaderboardRecord, NewRecord};

pub struct RecordRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> RecordRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List records matching the filter.
    ///
    /// Rows come back grouped by type and in text order of `result`; ranking
    /// by time is left to [`crate::services::ranking::rank_records`].
    pub async fn list(&self, filter: &RecordQuery) -> Result<Vec<LeaderboardRecord>> {
        let mut query = QueryBuilder::new(
            r#"
            SELECT id, name, result, method, event_id, record_type, created_at
            FROM leaderboard_records
            WHERE 1=1
            "#,
        );

        if let Some(event_id) = filter.event_id {
            query.push(" AND event_id = ");
            query.push_bind(event_id);
        }

        if let Some(record_type) = filter.record_type {
            query.push(" AND record_type = ");
            query.push_bind(record_type);
        }

        query.push(" ORDER BY record_type ASC, result ASC, created_at ASC");

        let records = query
            .build_query_as::<LeaderboardRecord>()
            .fetch_all(self.pool)
            .await?;

        Ok(records)
    }

    /// Create a record, recreating its event first if it was removed
    pub async fn create(&self, record: &NewRecord) -> Result<LeaderboardRecord> {
        let mut tx = self.pool.begin().await?;

        if ensure_event(&mut tx, record.event_id).await? {
            tracing::info!(event_id = %record.event_id, "Created missing event");
        }

        let created = sqlx::query_as::<_, LeaderboardRecord>(
            r#"
            INSERT INTO leaderboard_records (id, name, result, method, event_id, record_type)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, result, method, event_id, record_type, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&record.name)
        .bind(&record.result)
        .bind(&record.method)
        .bind(record.event_id)
        .bind(record.record_type)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| StorageError::from(e).into_constraint("Record"))?;

        tx.commit().await?;

        Ok(created)
    }
}
