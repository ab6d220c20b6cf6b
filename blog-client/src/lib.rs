//! HTTP client for the blog API: list posts and create new ones.

pub mod error;
pub mod http_client;
pub mod models;

pub use error::BlogClientError;
pub use http_client::{BlogClient, DEFAULT_BASE_URL};
pub use models::{NewPost, Post};
