use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("already exists")]
    AlreadyExists,

    #[error("user not found: {0}")]
    UserNotFound(String),

    #[error("bucket list not found: {0}")]
    BucketListNotFound(String),

    #[error("activity not found: {0}")]
    ActivityNotFound(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("unauthenticated")]
    Unauthenticated,
}

pub type Result<T> = std::result::Result<T, Error>;
