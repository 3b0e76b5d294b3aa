//! Populates the database with demo events and registrations.
//!
//! Set `SEED` to an integer for a reproducible data set.

use eventboard_api::config::Config;
use eventboard_api::error::AppError;
use eventboard_api::seed::{self, DEFAULT_EVENT_COUNT};
use eventboard_api::telemetry;
use eventboard_core::clock::SystemClock;
use eventboard_core::rng::StdRandom;
use eventboard_store::{Database, SqliteRepository};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    telemetry::init();

    let config = Config::from_env()?;
    let mut rng = match std::env::var("SEED") {
        Ok(raw) => StdRandom::seeded(
            raw.parse()
                .map_err(|e| AppError::Config(format!("SEED must be a valid u64: {e}")))?,
        ),
        Err(_) => StdRandom::from_os(),
    };

    let database = Database::open(&config.database_path, config.max_connections).await?;
    let repository = SqliteRepository::new(database.store());

    tracing::info!(path = %config.database_path.display(), "seeding database");
    seed::seed(
        DEFAULT_EVENT_COUNT,
        &mut rng,
        &SystemClock,
        &repository,
        &repository,
    )
    .await?;

    Ok(())
}
