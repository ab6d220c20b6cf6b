use crate::data::PostStore;
use crate::domain::{DomainError, NewPost, Post};
use std::sync::Arc;

/// Pass-through from the HTTP layer to the injected store. Holds no state of
/// its own, so concurrent requests need no coordination here.
pub struct BlogService {
    store: Arc<dyn PostStore>,
}

impl BlogService {
    pub fn new(store: Arc<dyn PostStore>) -> Self {
        Self { store }
    }

    pub async fn list_posts(&self) -> Result<Vec<Post>, DomainError> {
        let posts = self.store.list().await.map_err(|e| {
            tracing::error!("Listing posts failed: {}", e);
            e
        })?;

        tracing::debug!("Listed {} posts", posts.len());
        Ok(posts)
    }

    pub async fn create_post(&self, new_post: NewPost) -> Result<Post, DomainError> {
        let post = self.store.insert(new_post).await.map_err(|e| {
            tracing::error!("Creating post failed: {}", e);
            e
        })?;

        tracing::info!("Post created: id={}", post.id);
        Ok(post)
    }

    pub async fn shutdown(&self) {
        self.store.close().await;
    }
}
