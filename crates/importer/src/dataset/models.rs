use std::path::Path;

use serde::{Deserialize, Serialize};
use storage::seed::{reference_events, reference_records};

use crate::Result;

/// A data set as written by hand: ids and types may be aliases.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataSet {
    pub events: Vec<EventData>,
    #[serde(default)]
    pub records: Vec<RecordData>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventData {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordData {
    pub name: String,
    pub result: String,
    pub method: String,
    pub event_id: String,
    #[serde(rename = "type", alias = "resultType")]
    pub record_type: String,
}

impl DataSet {
    /// The built-in reference events and records
    pub fn reference() -> Self {
        Self {
            events: reference_events()
                .into_iter()
                .map(|event| EventData {
                    id: event.id.as_str().to_string(),
                    name: event.name,
                })
                .collect(),
            records: reference_records()
                .into_iter()
                .map(|record| RecordData {
                    name: record.name,
                    result: record.result,
                    method: record.method,
                    event_id: record.event_id.as_str().to_string(),
                    record_type: record.record_type.as_str().to_string(),
                })
                .collect(),
        }
    }

    pub async fn load(path: &Path) -> Result<Self> {
        let content = tokio::fs::read_to_string(path).await?;
        let data_set = serde_json::from_str(&content)?;
        Ok(data_set)
    }
}
