use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("feed not found: {feed}")]
    FeedNotFound { feed: String },

    #[error("feed service rejected credentials for account {account}")]
    Unauthorized { account: String },

    #[error("feed service returned HTTP {status} for {operation}")]
    Status { operation: String, status: u16 },

    #[error("transport error during {operation}: {message}")]
    Transport { operation: String, message: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("blocking task failed: {0}")]
    Join(String),
}
