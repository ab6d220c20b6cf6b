use crate::data::post_store::PostStore;
use crate::domain::{DomainError, NewPost, Post};
use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use serde_json::Map;
use tokio::sync::RwLock;

struct MemoryState {
    posts: Vec<Post>,
    next_id: i64,
}

/// Process-local post table. Mirrors the hosted table's behaviour: ids come
/// from an increasing counter, `created_at` is stamped on insert, the NOT
/// NULL columns reject missing values and an empty title fails the title
/// check (see `schema.sql`).
pub struct InMemoryPostStore {
    state: RwLock<MemoryState>,
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(MemoryState {
                posts: Vec::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for InMemoryPostStore {
    fn default() -> Self {
        Self::new()
    }
}

fn not_null_violation(column: &str) -> DomainError {
    DomainError::store(format!(
        "null value in column \"{}\" of relation \"posts\" violates not-null constraint",
        column
    ))
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn list(&self) -> Result<Vec<Post>, DomainError> {
        let state = self.state.read().await;
        Ok(state.posts.clone())
    }

    async fn insert(&self, new_post: NewPost) -> Result<Post, DomainError> {
        let title = new_post.title.ok_or_else(|| not_null_violation("title"))?;
        let content = new_post
            .content
            .ok_or_else(|| not_null_violation("content"))?;
        if title.is_empty() {
            return Err(DomainError::store(
                "new row for relation \"posts\" violates check constraint \"posts_title_check\"",
            ));
        }

        let mut state = self.state.write().await;
        let post = Post {
            id: state.next_id,
            title,
            content,
            author: new_post.author,
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, false),
            other_columns: Map::new(),
        };
        state.next_id += 1;
        state.posts.push(post.clone());

        Ok(post)
    }
}
