use crate::data::{InMemoryPostStore, PostStore, PostgresPostStore, RestPostStore};
use crate::infrastructure::config::StoreConfig;
use anyhow::Result;
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::sync::Arc;

pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;

    tracing::info!("Database connection pool created");
    Ok(pool)
}

/// Construct the configured post store. The table itself is provisioned
/// outside this service (see `schema.sql`).
pub async fn open_store(config: &StoreConfig) -> Result<Arc<dyn PostStore>> {
    let store: Arc<dyn PostStore> = match config {
        StoreConfig::Rest { url, key } => {
            tracing::info!("Using hosted post store at {}", url);
            Arc::new(RestPostStore::new(url, key.clone())?)
        }
        StoreConfig::Postgres {
            url,
            max_connections,
        } => {
            tracing::info!("Connecting to database...");
            let pool = create_pool(url, *max_connections).await?;
            Arc::new(PostgresPostStore::new(pool))
        }
        StoreConfig::Memory => {
            tracing::warn!("Using in-memory post store; posts are lost on restart");
            Arc::new(InMemoryPostStore::new())
        }
    };

    Ok(store)
}
