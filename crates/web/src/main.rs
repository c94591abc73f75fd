use anyhow::Context;
use storage::Database;
use utoipa::OpenApi;

mod config;
mod error;
mod features;
mod middleware;
mod routes;

use config::Config;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::records::handlers::list_records,
        features::records::handlers::create_record,
        features::leaderboard::handlers::get_leaderboard,
        features::seed::handlers::run_seed,
    ),
    components(
        schemas(
            storage::dto::record::CreateRecordRequest,
            storage::dto::record::CreateRecordResponse,
            storage::dto::record::CreatedRecord,
            storage::dto::record::RecordResponse,
            storage::dto::record::LeaderboardPayload,
            storage::dto::leaderboard::LeaderboardEntry,
            storage::dto::leaderboard::LeaderboardResponse,
            storage::dto::seed::SeedResponse,
            storage::models::Event,
            storage::models::EventId,
            storage::models::ResultType,
        )
    ),
    tags(
        (name = "records", description = "Record listing and bot submissions"),
        (name = "leaderboard", description = "Ranked tables"),
        (name = "maintenance", description = "Development-only data reset"),
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting leaderboard API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!(environment = ?config.environment, "Configuration loaded successfully");

    tracing::info!(
        "Connecting to database at: {}",
        config
            .database_url
            .split('@')
            .next_back()
            .unwrap_or("unknown")
    );
    let db = Database::new(&config.database_url)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    let bind_address = format!("{}:{}", config.host, config.port);
    let app = routes::router(db, &config);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;

    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    axum::serve(listener, app).await?;

    Ok(())
}
