use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("not a valid color: {0:?}")]
    InvalidColor(String),

    #[error("failed to read word list at {path}: {source}")]
    WordList {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
