//! Application state

use sqlx::PgPool;

use crate::core::Config;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Shared application state
///
/// Cloning is cheap (the pool is reference-counted); every handler gets a
/// clone via the axum `State` extractor and passes `&state.pool` down into
/// the repository functions.
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL connection pool
    pub pool: PgPool,
    /// Server configuration
    pub config: Config,
}

impl AppState {
    /// Connect the pool and bring the schema up to date
    pub async fn new(config: &Config) -> Result<Self, BoxError> {
        let pool = PgPool::connect(&config.database_url).await?;
        tracing::info!("Database connection established");

        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!("Database migrations applied");

        Ok(Self {
            pool,
            config: config.clone(),
        })
    }
}
