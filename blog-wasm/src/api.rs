use crate::models::*;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

const API_BASE: &str = "http://localhost:4000";

#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: API_BASE.to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, String> {
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| format!("Failed to read response: {}", e))?;

        if (200..300).contains(&status) {
            serde_json::from_str(&text).map_err(|e| format!("Failed to parse response: {}", e))
        } else {
            match serde_json::from_str::<ErrorResponse>(&text) {
                Ok(err) => Err(err.error),
                Err(_) => Err(format!("HTTP {}: {}", status, text)),
            }
        }
    }

    pub async fn list_posts(&self) -> Result<Vec<Post>, String> {
        let response = Request::get(&self.url("/posts"))
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        Self::decode(response).await
    }

    pub async fn create_post(&self, req: &NewPost) -> Result<Post, String> {
        let response = Request::post(&self.url("/posts"))
            .json(req)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        Self::decode(response).await
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
