use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::{Event, NewRecord};

/// Row counts written by a reseed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub events: u64,
    pub records: u64,
}

pub struct SeedRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> SeedRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Deletes every record and event, then writes the given data set.
    ///
    /// Runs in a single transaction: on failure the previous data is kept.
    pub async fn replace_all(&self, events: &[Event], records: &[NewRecord]) -> Result<SeedSummary> {
        let mut tx = self.pool.begin().await?;

        let removed_records = sqlx::query("DELETE FROM leaderboard_records")
            .execute(&mut *tx)
            .await?
            .rows_affected();
        let removed_events = sqlx::query("DELETE FROM events")
            .execute(&mut *tx)
            .await?
            .rows_affected();
        tracing::debug!(removed_records, removed_events, "Cleared leaderboard tables");

        let mut summary = SeedSummary {
            events: 0,
            records: 0,
        };

        if !events.is_empty() {
            let mut query: QueryBuilder<Postgres> =
                QueryBuilder::new("INSERT INTO events (id, name) ");
            query.push_values(events, |mut row, event| {
                row.push_bind(event.id).push_bind(&event.name);
            });
            query.push(" ON CONFLICT (id) DO NOTHING");

            summary.events = query.build().execute(&mut *tx).await?.rows_affected();
        }

        if !records.is_empty() {
            let mut query: QueryBuilder<Postgres> = QueryBuilder::new(
                "INSERT INTO leaderboard_records (id, name, result, method, event_id, record_type) ",
            );
            query.push_values(records, |mut row, record| {
                row.push_bind(Uuid::new_v4())
                    .push_bind(&record.name)
                    .push_bind(&record.result)
                    .push_bind(&record.method)
                    .push_bind(record.event_id)
                    .push_bind(record.record_type);
            });

            summary.records = query
                .build()
                .execute(&mut *tx)
                .await
                .map_err(|e| StorageError::from(e).into_constraint("Record"))?
                .rows_affected();
        }

        tx.commit().await?;

        Ok(summary)
    }
}
