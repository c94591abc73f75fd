use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SeedResponse {
    pub ok: bool,
    pub message: String,
    /// Events written
    pub events: u64,
    /// Records written
    pub records: u64,
}
