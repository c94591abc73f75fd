use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::models::{
    Event, EventId, LeaderboardRecord, NewRecord, ResultType, is_well_formed_result,
};

/// Error reported when any field of a [`CreateRecordRequest`] is empty.
pub const MISSING_FIELDS_MESSAGE: &str =
    "Missing required fields: name, eventId, resultType, method, result.";

/// Submission sent by the chat bot integration.
///
/// `eventId` and `resultType` accept aliases such as `"3x3"` or `"ao5"`.
/// Absent and `null` fields both read as empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecordRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(length(min = 1, message = "eventId is required"))]
    pub event_id: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(length(min = 1, message = "resultType is required"))]
    pub result_type: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(length(min = 1, message = "method is required"))]
    pub method: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(length(min = 1, message = "result is required"))]
    pub result: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl CreateRecordRequest {
    /// Resolves aliases and checks the result shape.
    ///
    /// The error is a client-facing message naming the rejected value.
    pub fn resolve(&self) -> Result<NewRecord, String> {
        let event_id = EventId::from_alias(&self.event_id)
            .ok_or_else(|| format!("Unsupported eventId: {}.", self.event_id))?;

        let record_type = ResultType::from_alias(&self.result_type)
            .ok_or_else(|| format!("Unsupported resultType: {}.", self.result_type))?;

        if !is_well_formed_result(&self.result) {
            return Err(format!("Unsupported result: {}.", self.result));
        }

        Ok(NewRecord {
            name: self.name.clone(),
            result: self.result.clone(),
            method: self.method.clone(),
            event_id,
            record_type,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatedRecord {
    pub id: Uuid,
    pub name: String,
    pub result: String,
    pub method: String,
    pub event_id: EventId,
    #[serde(rename = "type")]
    pub record_type: ResultType,
    pub created_at: chrono::NaiveDateTime,
}

impl From<LeaderboardRecord> for CreatedRecord {
    fn from(record: LeaderboardRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            result: record.result,
            method: record.method,
            event_id: record.event_id,
            record_type: record.record_type,
            created_at: record.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateRecordResponse {
    pub ok: bool,
    pub record: CreatedRecord,
}

/// Record as listed on the read path
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecordResponse {
    pub name: String,
    pub result: String,
    pub method: String,
    pub event_id: EventId,
    #[serde(rename = "type")]
    pub record_type: ResultType,
}

impl From<LeaderboardRecord> for RecordResponse {
    fn from(record: LeaderboardRecord) -> Self {
        Self {
            name: record.name,
            result: record.result,
            method: record.method,
            event_id: record.event_id,
            record_type: record.record_type,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LeaderboardPayload {
    pub events: Vec<Event>,
    pub records: Vec<RecordResponse>,
}

/// Optional equality filters on canonical ids. Empty values are ignored.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RecordFilter {
    #[serde(default, rename = "eventId")]
    pub event_id: Option<String>,
    #[serde(default, rename = "type")]
    pub record_type: Option<String>,
}

/// Filter resolved to canonical ids
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecordQuery {
    pub event_id: Option<EventId>,
    pub record_type: Option<ResultType>,
}

impl RecordFilter {
    pub fn resolve(&self) -> Result<RecordQuery, String> {
        let event_id = match non_empty(&self.event_id) {
            Some(raw) => Some(
                EventId::from_canonical(raw).ok_or_else(|| format!("Unknown eventId: {}", raw))?,
            ),
            None => None,
        };

        let record_type = match non_empty(&self.record_type) {
            Some(raw) => Some(
                ResultType::from_canonical(raw).ok_or_else(|| format!("Unknown type: {}", raw))?,
            ),
            None => None,
        };

        Ok(RecordQuery {
            event_id,
            record_type,
        })
    }
}

pub(crate) fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
