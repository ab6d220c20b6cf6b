use crate::error::BlogClientError;
use crate::models::{ErrorResponse, NewPost, Post};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:4000";

#[derive(Debug, Clone)]
pub struct BlogClient {
    client: Client,
    base_url: String,
}

impl BlogClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .connect_timeout(Duration::from_secs(5))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Fetch every post the server knows about, in server order.
    pub async fn list_posts(&self) -> Result<Vec<Post>, BlogClientError> {
        let url = self.url("/posts");
        tracing::debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        Self::read_response(response, StatusCode::OK).await
    }

    /// Create a post and return the stored record, including its id and
    /// creation time.
    pub async fn create_post(&self, new_post: &NewPost) -> Result<Post, BlogClientError> {
        let url = self.url("/posts");
        tracing::debug!("POST {}", url);

        let response = self.client.post(&url).json(new_post).send().await?;
        Self::read_response(response, StatusCode::CREATED).await
    }

    async fn read_response<T: DeserializeOwned>(
        response: Response,
        expected: StatusCode,
    ) -> Result<T, BlogClientError> {
        let status = response.status();

        if status == expected {
            return Ok(response.json::<T>().await?);
        }

        let error_text = response.text().await?;
        let message = match serde_json::from_str::<ErrorResponse>(&error_text) {
            Ok(body) => body.error,
            Err(_) => error_text,
        };

        Err(BlogClientError::Server {
            status: status.as_u16(),
            message,
        })
    }
}

impl Default for BlogClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
