//! Document-style access to PostgreSQL.
//!
//! Each entity lives in one row; nested sequences (likes, comments,
//! experience, education) are jsonb columns read and rewritten whole, so the
//! update discipline is load-mutate-save with last-write-wins at the row
//! level. Concurrent writers to one row can overwrite each other's
//! sequence mutation; that is the accepted model here, not an oversight.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

pub mod posts;
pub mod profiles;
pub mod users;

pub async fn connect(config: &config::Database) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await
}

pub async fn migrate(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
