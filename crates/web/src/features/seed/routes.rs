use axum::{Router, middleware, routing::get};
use storage::Database;

use super::handlers::run_seed;
use crate::config::Environment;
use crate::middleware::environment::require_non_production;

pub fn routes(environment: Environment) -> Router<Database> {
    Router::new()
        .route("/", get(run_seed).post(run_seed))
        .route_layer(middleware::from_fn_with_state(
            environment,
            require_non_production,
        ))
}
