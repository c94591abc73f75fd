use sqlx::{PgConnection, PgPool};

use crate::error::{Result, StorageError};
use crate::models::{Event, EventId};

pub struct EventRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> EventRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all events ordered by id
    pub async fn list(&self) -> Result<Vec<Event>> {
        let events = sqlx::query_as::<_, Event>(
            r#"
            SELECT id, name
            FROM events
            ORDER BY id ASC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(events)
    }

    pub async fn find(&self, id: EventId) -> Result<Event> {
        sqlx::query_as::<_, Event>(
            r#"
            SELECT id, name
            FROM events
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)
    }

    pub async fn find_optional(&self, id: EventId) -> Result<Option<Event>> {
        match self.find(id).await {
            Ok(event) => Ok(Some(event)),
            Err(StorageError::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

/// Inserts `id` with its canonical id as name unless it already exists.
///
/// Returns whether a row was created.
pub(crate) async fn ensure_event(conn: &mut PgConnection, id: EventId) -> Result<bool> {
    let result = sqlx::query(
        r#"
        INSERT INTO events (id, name)
        VALUES ($1, $2)
        ON CONFLICT (id) DO NOTHING
        "#,
    )
    .bind(id)
    .bind(id.as_str())
    .execute(conn)
    .await?;

    Ok(result.rows_affected() > 0)
}
