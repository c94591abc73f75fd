use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use super::{EventId, ResultType};

/// A submitted best result, stored exactly as it was typed.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct LeaderboardRecord {
    pub id: Uuid,
    pub name: String,
    pub result: String,
    pub method: String,
    pub event_id: EventId,
    pub record_type: ResultType,
    pub created_at: chrono::NaiveDateTime,
}

/// Fields of a record about to be inserted, already resolved to canonical ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecord {
    pub name: String,
    pub result: String,
    pub method: String,
    pub event_id: EventId,
    pub record_type: ResultType,
}
