// tests/support/helpers.rs
use std::sync::Arc;

use slugkeeper::application::services::SlugAssignmentService;
use slugkeeper::config::SlugConfig;
use slugkeeper::domain::slug::SlugRepository;
use slugkeeper::infrastructure::database;
use sqlx::SqlitePool;

/// Route `tracing` output through the test harness; repeated calls are fine.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("slugkeeper=debug")),
        )
        .with_test_writer()
        .try_init();
}

/// Fresh in-memory database with migrations applied.
pub async fn memory_pool() -> Arc<SqlitePool> {
    let pool = database::init_pool("sqlite::memory:")
        .await
        .expect("open in-memory sqlite");
    database::run_migrations(&pool)
        .await
        .expect("run migrations");
    Arc::new(pool)
}

pub fn slug_service(
    repo: Arc<dyn SlugRepository>,
    config: SlugConfig,
) -> Arc<SlugAssignmentService> {
    Arc::new(
        SlugAssignmentService::builder(config)
            .repository(repo)
            .build()
            .expect("build slug assignment service"),
    )
}
