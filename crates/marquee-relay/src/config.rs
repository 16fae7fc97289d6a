use std::path::PathBuf;

use marquee_feeds::Credentials;
use marquee_feeds::adafruit::redact_key;
use marquee_sync::SyncConfig;
use marquee_sync::config::{
    DEFAULT_COLOR_FEED, DEFAULT_MAX_QUOTES, DEFAULT_TEXT_FEED, DEFAULT_WORDLIST,
};

pub const CSV_URL_VAR: &str = "MARQUEE_CSV_URL";
pub const MAX_QUOTES_VAR: &str = "MARQUEE_MAX_QUOTES";
pub const TEXT_FEED_VAR: &str = "MARQUEE_TEXT_FEED";
pub const COLOR_FEED_VAR: &str = "MARQUEE_COLOR_FEED";
pub const STATE_DIR_VAR: &str = "MARQUEE_STATE_DIR";
pub const WORDLIST_VAR: &str = "MARQUEE_WORDLIST";
pub const USERNAME_VAR: &str = "ADAFRUIT_IO_USERNAME";
pub const KEY_VAR: &str = "ADAFRUIT_IO_KEY";

/// Pipeline settings plus the feed-service credentials.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub sync: SyncConfig,
    pub credentials: Credentials,
}

/// Redacted config info safe to log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigInfo {
    pub csv_url: String,
    pub max_quotes: usize,
    pub text_feed: String,
    pub color_feed: String,
    pub state_dir: String,
    pub account: String,
    pub key_hint: String,
}

impl RelayConfig {
    /// Read from the process environment (after any `.env` has been loaded).
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read from any key/value source. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> eyre::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let require = |name: &str| get(name).ok_or_else(|| eyre::eyre!("{name} is not set"));

        let max_quotes = match get(MAX_QUOTES_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .map_err(|e| eyre::eyre!("{MAX_QUOTES_VAR}={raw:?} is not a count: {e}"))?,
            None => DEFAULT_MAX_QUOTES,
        };

        let sync = SyncConfig {
            csv_url: require(CSV_URL_VAR)?,
            max_quotes,
            text_feed: get(TEXT_FEED_VAR).unwrap_or_else(|| DEFAULT_TEXT_FEED.to_string()),
            color_feed: get(COLOR_FEED_VAR).unwrap_or_else(|| DEFAULT_COLOR_FEED.to_string()),
            state_dir: get(STATE_DIR_VAR).map_or_else(|| PathBuf::from("."), PathBuf::from),
            wordlist: get(WORDLIST_VAR).map_or_else(|| PathBuf::from(DEFAULT_WORDLIST), PathBuf::from),
        };
        sync.validate()?;

        let credentials = Credentials {
            username: require(USERNAME_VAR)?,
            key: require(KEY_VAR)?,
        };

        Ok(Self { sync, credentials })
    }

    pub fn info(&self) -> ConfigInfo {
        ConfigInfo {
            csv_url: self.sync.csv_url.clone(),
            max_quotes: self.sync.max_quotes,
            text_feed: self.sync.text_feed.clone(),
            color_feed: self.sync.color_feed.clone(),
            state_dir: self.sync.state_dir.display().to_string(),
            account: self.credentials.username.clone(),
            key_hint: redact_key(&self.credentials.key),
        }
    }
}
