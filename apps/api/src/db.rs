use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

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

/// Creates the analysis table if it does not exist yet.
pub async fn ensure_schema(pool: &PgPool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS user_data (
            id                  UUID PRIMARY KEY,
            name                TEXT NOT NULL,
            email               TEXT NOT NULL,
            mobile_number       TEXT NOT NULL,
            page_count          INTEGER NOT NULL,
            candidate_level     TEXT NOT NULL,
            predicted_category  TEXT NOT NULL,
            recommended_job     TEXT NOT NULL,
            skills              TEXT[] NOT NULL,
            recommended_track   TEXT,
            recommended_skills  TEXT[] NOT NULL,
            recommended_courses TEXT[] NOT NULL,
            resume_text         TEXT NOT NULL,
            created_at          TIMESTAMPTZ NOT NULL DEFAULT now()
        )
        "#,
    )
    .execute(pool)
    .await?;

    info!("Schema ready (user_data)");
    Ok(())
}
