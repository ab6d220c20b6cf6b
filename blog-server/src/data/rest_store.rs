use crate::data::post_store::PostStore;
use crate::domain::{DomainError, NewPost, Post};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::Deserialize;

/// Error payload of the hosted database's REST gateway.
#[derive(Debug, Deserialize)]
struct RestErrorBody {
    message: Option<String>,
}

/// Post table behind the hosted database's REST interface, reached with the
/// project URL and access key.
pub struct RestPostStore {
    client: Client,
    endpoint: String,
    key: String,
}

impl RestPostStore {
    pub fn new(base_url: &str, key: impl Into<String>) -> Result<Self, DomainError> {
        let client = Client::builder().build()?;

        Ok(Self {
            client,
            endpoint: format!("{}/rest/v1/posts", base_url.trim_end_matches('/')),
            key: key.into(),
        })
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        request.header("apikey", &self.key).bearer_auth(&self.key)
    }

    async fn failure(response: Response) -> DomainError {
        let status = response.status();
        let text = match response.text().await {
            Ok(text) => text,
            Err(e) => return DomainError::from(e),
        };

        match serde_json::from_str::<RestErrorBody>(&text) {
            Ok(RestErrorBody {
                message: Some(message),
            }) if !message.is_empty() => DomainError::store(message),
            _ if text.is_empty() => DomainError::store(format!("HTTP {}", status)),
            _ => DomainError::store(format!("HTTP {}: {}", status, text)),
        }
    }
}

#[async_trait]
impl PostStore for RestPostStore {
    async fn list(&self) -> Result<Vec<Post>, DomainError> {
        let response = self
            .authorize(self.client.get(&self.endpoint))
            .query(&[("select", "*")])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::failure(response).await);
        }

        Ok(response.json::<Vec<Post>>().await?)
    }

    async fn insert(&self, new_post: NewPost) -> Result<Post, DomainError> {
        let response = self
            .authorize(self.client.post(&self.endpoint))
            .header("prefer", "return=representation")
            .json(&new_post)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::failure(response).await);
        }

        // Пустой ответ на вставку считаем ошибкой: вызывающим обещана
        // сохранённая строка
        let rows = response.json::<Vec<Post>>().await?;
        rows.into_iter()
            .next()
            .ok_or_else(|| DomainError::store("store returned no row for insert"))
    }
}
