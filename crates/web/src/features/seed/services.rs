use sqlx::PgPool;
use storage::{
    error::Result,
    repository::seed::{SeedRepository, SeedSummary},
    seed::{reference_events, reference_records},
};

/// Replace all leaderboard data with the built-in reference set
pub async fn seed_reference_data(pool: &PgPool) -> Result<SeedSummary> {
    let repo = SeedRepository::new(pool);
    repo.replace_all(&reference_events(), &reference_records())
        .await
}
