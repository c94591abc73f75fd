use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::record::non_empty;
use crate::models::{Event, EventId, ResultType};

/// Selects one leaderboard table. Missing values fall back to 3x3x3 singles.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LeaderboardFilter {
    #[serde(default, rename = "eventId")]
    pub event_id: Option<String>,
    #[serde(default, rename = "type")]
    pub record_type: Option<String>,
}

impl LeaderboardFilter {
    pub fn resolve(&self) -> Result<(EventId, ResultType), String> {
        let event_id = match non_empty(&self.event_id) {
            Some(raw) => {
                EventId::from_canonical(raw).ok_or_else(|| format!("Unknown eventId: {}", raw))?
            }
            None => EventId::default(),
        };

        let record_type = match non_empty(&self.record_type) {
            Some(raw) => {
                ResultType::from_canonical(raw).ok_or_else(|| format!("Unknown type: {}", raw))?
            }
            None => ResultType::default(),
        };

        Ok((event_id, record_type))
    }
}

/// One row of a ranked table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub name: String,
    pub method: String,
    /// Stored result string
    pub result: String,
    /// Result rendered for display, e.g. `2:22.099`
    pub display: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LeaderboardResponse {
    pub event: Option<Event>,
    #[serde(rename = "type")]
    pub record_type: ResultType,
    pub label: String,
    pub entries: Vec<LeaderboardEntry>,
}
