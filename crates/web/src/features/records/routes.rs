use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{create_record, list_records};

pub fn routes() -> Router<Database> {
    Router::new().route("/", get(list_records).post(create_record))
}
