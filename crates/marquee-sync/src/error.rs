use thiserror::Error;

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("export fetch from {url} returned HTTP {status}")]
    FetchStatus { url: String, status: u16 },

    #[error("export fetch from {url} failed: {message}")]
    Fetch { url: String, message: String },

    #[error("export is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    #[error("snapshot I/O error at {path}: {source}")]
    Snapshot {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("feed error: {0}")]
    Feed(#[from] marquee_feeds::FeedError),

    #[error("{0}")]
    Core(#[from] marquee_core::CoreError),

    #[error("blocking task failed: {0}")]
    Join(String),
}

impl SyncError {
    pub(crate) fn snapshot(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::Snapshot {
            path: path.display().to_string(),
            source,
        }
    }
}

/// Walk the full error chain and join all causes into one string.
///
/// Transport errors often have terse `Display` impls but useful detail in
/// the source chain.
pub fn format_err_chain(err: &dyn std::error::Error) -> String {
    let mut msg = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        msg.push_str(": ");
        msg.push_str(&cause.to_string());
        source = cause.source();
    }
    msg
}
