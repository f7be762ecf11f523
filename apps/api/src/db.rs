use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

/// One row per user; each preference collection is a JSONB array column.
const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS user_preferences (
    user_id      TEXT PRIMARY KEY,
    tones        JSONB NOT NULL,
    audiences    JSONB NOT NULL,
    templates    JSONB NOT NULL,
    saved_emails JSONB NOT NULL,
    signatures   JSONB NOT NULL,
    created_at   TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at   TIMESTAMPTZ NOT NULL DEFAULT now()
)
"#;

/// Creates and returns a PostgreSQL connection pool.
pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await?;

    info!("PostgreSQL connection pool established");
    Ok(pool)
}

/// Applies the schema at startup. Idempotent, so every boot runs it.
pub async fn init_schema(pool: &PgPool) -> Result<()> {
    sqlx::query(SCHEMA).execute(pool).await?;
    info!("Database schema ready");
    Ok(())
}
