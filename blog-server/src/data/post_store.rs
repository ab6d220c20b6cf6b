use crate::domain::{DomainError, NewPost, Post};
use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Map;
use sqlx::{postgres::PgRow, PgPool, Row};

/// Persistence contract for posts. The store owns id and timestamp
/// assignment; callers never generate those fields.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Every stored post, in whatever order the store returns them.
    async fn list(&self) -> Result<Vec<Post>, DomainError>;

    /// Insert a post and return the stored row.
    async fn insert(&self, new_post: NewPost) -> Result<Post, DomainError>;

    /// Release held resources. Called once on shutdown.
    async fn close(&self) {}
}

pub struct PostgresPostStore {
    pool: PgPool,
}

impl PostgresPostStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn post_from_row(row: &PgRow) -> Result<Post, DomainError> {
    Ok(Post {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        content: row.try_get("content")?,
        author: row.try_get("author")?,
        created_at: row.try_get::<DateTime<Utc>, _>("created_at")?
            .to_rfc3339_opts(SecondsFormat::Micros, false),
        other_columns: Map::new(),
    })
}

#[async_trait]
impl PostStore for PostgresPostStore {
    async fn list(&self) -> Result<Vec<Post>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, content, author, created_at
            FROM posts
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list posts: {}", e);
            DomainError::from(e)
        })?;

        rows.iter().map(post_from_row).collect()
    }

    async fn insert(&self, new_post: NewPost) -> Result<Post, DomainError> {
        // created_at заполняет значение по умолчанию колонки
        let row = sqlx::query(
            r#"
            INSERT INTO posts (title, content, author)
            VALUES ($1, $2, $3)
            RETURNING id, title, content, author, created_at
            "#,
        )
        .bind(new_post.title)
        .bind(new_post.content)
        .bind(new_post.author)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert post: {}", e);
            DomainError::from(e)
        })?;

        post_from_row(&row)
    }

    async fn close(&self) {
        self.pool.close().await;
        tracing::info!("Database connection pool closed");
    }
}
