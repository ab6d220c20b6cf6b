use thiserror::Error;

/// Failure of a store operation. The message is the store's own text and is
/// passed to API callers unchanged.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{0}")]
    StoreFailed(String),
}

impl DomainError {
    pub fn store(message: impl Into<String>) -> Self {
        Self::StoreFailed(message.into())
    }

    pub fn to_status_code(&self) -> u16 {
        match self {
            Self::StoreFailed(_) => 500,
        }
    }
}

impl From<sqlx::Error> for DomainError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            // Нарушения ограничений несут формулировку самой БД
            sqlx::Error::Database(db_err) => Self::StoreFailed(db_err.message().to_string()),
            _ => Self::StoreFailed(err.to_string()),
        }
    }
}

impl From<reqwest::Error> for DomainError {
    fn from(err: reqwest::Error) -> Self {
        Self::StoreFailed(err.to_string())
    }
}
