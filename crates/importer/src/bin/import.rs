use clap::{Parser, Subcommand};
use importer::{DataSet, DataSetValidator, ImporterError, ValidatedDataSet};
use std::path::PathBuf;
use storage::{Database, repository::seed::SeedRepository};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "import")]
#[command(about = "Cube leaderboard data importer", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,

    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Replace all data with the built-in reference records
    Reference {
        #[arg(long)]
        validate_only: bool,
    },
    /// Replace all data with the events and records of a JSON file
    File {
        path: PathBuf,

        #[arg(long)]
        validate_only: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("import={},importer={}", log_level, log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let (data_set, validate_only) = match cli.command {
        Commands::Reference { validate_only } => {
            tracing::info!("Using built-in reference data set");
            (DataSet::reference(), validate_only)
        }
        Commands::File {
            path,
            validate_only,
        } => {
            tracing::info!("Reading data set from {:?}", path);
            (DataSet::load(&path).await?, validate_only)
        }
    };

    let validated = validate(&data_set)?;

    if validate_only {
        tracing::info!("Validation only mode, skipping database import");
        return Ok(());
    }

    let database_url = cli.database_url.ok_or_else(|| {
        ImporterError::ConfigError("DATABASE_URL must be set to import".to_string())
    })?;

    import(&database_url, validated).await?;

    Ok(())
}

fn validate(data_set: &DataSet) -> Result<ValidatedDataSet, ImporterError> {
    tracing::info!(
        "Validating {} event(s) and {} record(s)",
        data_set.events.len(),
        data_set.records.len()
    );

    let validated = DataSetValidator::validate(data_set)?;
    validated.report.log_warnings();

    tracing::info!("✓ Validation passed");
    Ok(validated)
}

async fn import(database_url: &str, validated: ValidatedDataSet) -> Result<(), ImporterError> {
    tracing::info!("Connecting to database...");
    let db = Database::new(database_url).await?;
    db.run_migrations().await?;

    let summary = SeedRepository::new(db.pool())
        .replace_all(&validated.events, &validated.records)
        .await?;

    tracing::info!(
        "✓ Imported {} event(s) and {} record(s)",
        summary.events,
        summary.records
    );
    Ok(())
}
