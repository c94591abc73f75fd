use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::config::Environment;
use crate::error::WebError;

/// Refuses destructive maintenance routes when running in production.
pub async fn require_non_production(
    State(environment): State<Environment>,
    request: Request,
    next: Next,
) -> Result<Response, WebError> {
    if environment.is_production() {
        tracing::warn!(path = %request.uri().path(), "Blocked maintenance route in production");
        return Err(WebError::Forbidden(
            "Seeding is disabled in production.".to_string(),
        ));
    }

    Ok(next.run(request).await)
}
