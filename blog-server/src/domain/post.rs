use crate::domain::DomainError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A stored blog post as the store returned it. `id` and `created_at` are
/// assigned by the store; `created_at` keeps the store's own text and any
/// further columns ride along in `other_columns`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author: Option<String>,
    pub created_at: String,
    #[serde(flatten)]
    pub other_columns: Map<String, Value>,
}

/// Fields submitted for a new post.
///
/// Nothing is validated here: absent required fields are forwarded as `null`
/// and it is up to the store to reject them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewPost {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
}

impl NewPost {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        author: Option<String>,
    ) -> Self {
        Self {
            title: Some(title.into()),
            content: Some(content.into()),
            author,
        }
    }

    /// Read a create request body. A body that is not a JSON object counts
    /// as an empty one, so the store sees missing fields and rejects them.
    /// A field that is present but not text fails the same way a text column
    /// would.
    pub fn from_body(body: &[u8]) -> Result<Self, DomainError> {
        let fields = match serde_json::from_slice::<Value>(body) {
            Ok(Value::Object(fields)) => fields,
            _ => Map::new(),
        };

        Ok(Self {
            title: text_field(&fields, "title")?,
            content: text_field(&fields, "content")?,
            author: text_field(&fields, "author")?,
        })
    }
}

fn text_field(fields: &Map<String, Value>, column: &str) -> Result<Option<String>, DomainError> {
    match fields.get(column) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text.clone())),
        Some(other) => Err(DomainError::store(format!(
            "invalid input for column \"{}\": expected text, got {}",
            column, other
        ))),
    }
}
