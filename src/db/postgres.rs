use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;
use tracing::{debug, error, info};

use crate::config::DatabaseConfig;
use crate::db::database::Database;
use crate::db::error::DatabaseError;
use crate::db::models::NewImage;

/// A PostgreSQL implementation of the Database trait
pub struct PostgresDatabase {
    pool: PgPool,
}

impl PostgresDatabase {
    /// Create a new PostgresDatabase from configuration
    pub async fn new(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(60))
            .connect_lazy(&config.url)
            .map_err(|e| {
                error!("Failed to create connection pool: {}", e);
                DatabaseError::ConnectionError(e.to_string())
            })?;

        if let Err(e) = sqlx::query("SELECT 1").execute(&pool).await {
            error!("Database connectivity test failed: {}", e);
            return Err(DatabaseError::ConnectionError(format!(
                "Database is not accessible: {}",
                e
            )));
        };

        let db = PostgresDatabase { pool };
        db.ensure_schema().await?;

        info!("PostgreSQL database connection established successfully");
        Ok(db)
    }

    /// Create the images table if it does not exist yet
    async fn ensure_schema(&self) -> Result<(), DatabaseError> {
        let create_table_query = r#"
            CREATE TABLE IF NOT EXISTS images (
                id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
                account_id TEXT NOT NULL,
                metadata JSONB NOT NULL,
                image_url TEXT NOT NULL,
                sync_status TEXT NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT now()
            )
        "#;

        debug!("Ensuring images table exists");
        sqlx::query(create_table_query)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!("Failed to create images table: {}", e);
                DatabaseError::QueryError(format!("Failed to create table: {}", e))
            })?;

        let create_index_query =
            "CREATE INDEX IF NOT EXISTS images_account_id_idx ON images (account_id)";

        sqlx::query(create_index_query)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!("Failed to create index: {}", e);
                DatabaseError::QueryError(format!("Failed to create index: {}", e))
            })?;

        Ok(())
    }
}

#[async_trait]
impl Database for PostgresDatabase {
    async fn insert_image(&self, image: &NewImage) -> Result<(), DatabaseError> {
        debug!(
            "Inserting image row for account {}: {}",
            image.account_id, image.image_url
        );

        let metadata = serde_json::to_value(&image.metadata)
            .map_err(|e| DatabaseError::SerializationError(e.to_string()))?;

        sqlx::query(
            r#"
            INSERT INTO images (account_id, metadata, image_url, sync_status)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(&image.account_id)
        .bind(metadata)
        .bind(&image.image_url)
        .bind(image.sync_status.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!("Failed to insert image row: {}", e);
            DatabaseError::QueryError(e.to_string())
        })?;

        info!("Recorded synced image for account {}", image.account_id);
        Ok(())
    }
}
