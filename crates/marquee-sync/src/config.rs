use std::path::PathBuf;

use marquee_feeds::LIST_LIMIT;

use crate::error::SyncError;

pub const DEFAULT_MAX_QUOTES: usize = 10;
pub const DEFAULT_TEXT_FEED: &str = "matrix-portal-quotes.signtext";
pub const DEFAULT_COLOR_FEED: &str = "matrix-portal-quotes.signcolor";
pub const DEFAULT_WORDLIST: &str = "profanity.txt";

/// Everything one pass of the pipeline needs to know, besides credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    /// Published CSV export of the form responses.
    pub csv_url: String,
    /// How many entries each feed keeps after pruning.
    pub max_quotes: usize,
    /// Feed names, `group.feed` when the feeds are grouped.
    pub text_feed: String,
    pub color_feed: String,
    /// Directory holding the previous and current snapshots.
    pub state_dir: PathBuf,
    /// Newline-separated forbidden words.
    pub wordlist: PathBuf,
}

impl SyncConfig {
    pub fn new(csv_url: impl Into<String>) -> Self {
        Self {
            csv_url: csv_url.into(),
            max_quotes: DEFAULT_MAX_QUOTES,
            text_feed: DEFAULT_TEXT_FEED.to_string(),
            color_feed: DEFAULT_COLOR_FEED.to_string(),
            state_dir: PathBuf::from("."),
            wordlist: PathBuf::from(DEFAULT_WORDLIST),
        }
    }

    pub fn validate(&self) -> Result<(), SyncError> {
        if self.csv_url.trim().is_empty() {
            return Err(SyncError::Config("CSV URL is empty".into()));
        }
        if self.max_quotes == 0 {
            return Err(SyncError::Config("max quotes must be at least 1".into()));
        }
        if self.max_quotes >= LIST_LIMIT {
            return Err(SyncError::Config(format!(
                "max quotes must be below the feed page size of {LIST_LIMIT}"
            )));
        }
        if self.text_feed.is_empty() || self.color_feed.is_empty() {
            return Err(SyncError::Config("feed names must not be empty".into()));
        }
        if self.text_feed == self.color_feed {
            return Err(SyncError::Config(format!(
                "text and color feeds must differ (both are {})",
                self.text_feed
            )));
        }
        Ok(())
    }
}
