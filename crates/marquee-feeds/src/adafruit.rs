//! Adafruit IO REST client.
//!
//! Thin wrapper over the v2 HTTP API. `ureq` is blocking, so every call runs
//! on tokio's blocking pool and the async surface stays non-blocking.

use std::fmt;

use marquee_core::FeedEntry;
use serde::Deserialize;

use crate::error::FeedError;
use crate::service::{BoxFuture, Feed, FeedService};

pub const DEFAULT_BASE_URL: &str = "https://io.adafruit.com/api/v2";

/// Largest page the service returns for one listing. A listing only ever
/// sees this many of the newest values; older ones need another listing
/// once the newer ones are deleted.
pub const LIST_LIMIT: usize = 1000;

const KEY_HEADER: &str = "X-AIO-Key";

/// Account credentials. The key is never printed.
#[derive(Clone)]
pub struct Credentials {
    pub username: String,
    pub key: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("key", &redact_key(&self.key))
            .finish()
    }
}

pub fn redact_key(key: &str) -> String {
    if key.len() <= 8 {
        return "****".to_string();
    }
    let prefix = &key[..4];
    let suffix = &key[key.len() - 4..];
    format!("{prefix}...{suffix}")
}

#[derive(Clone)]
pub struct AdafruitIo {
    agent: ureq::Agent,
    base_url: String,
    credentials: Credentials,
}

#[derive(Debug, Deserialize)]
struct WireFeed {
    key: String,
}

#[derive(Debug, Deserialize)]
struct WireData {
    id: String,
    #[serde(default)]
    value: Option<String>,
    #[serde(default)]
    created_at: Option<String>,
}

impl From<WireData> for FeedEntry {
    fn from(data: WireData) -> Self {
        FeedEntry {
            id: data.id,
            value: data.value.unwrap_or_default(),
            created_at: data.created_at.and_then(|ts| ts.parse().ok()),
        }
    }
}

impl AdafruitIo {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            agent: ureq::Agent::new_with_defaults(),
            base_url: DEFAULT_BASE_URL.to_string(),
            credentials,
        }
    }

    /// Point the client at another API root (e.g. a local mock server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn feed_url(&self, feed_key: &str) -> String {
        format!(
            "{}/{}/feeds/{}",
            self.base_url, self.credentials.username, feed_key
        )
    }

    /// Map a ureq failure, attaching the operation for the log line.
    fn request_error(&self, operation: String, err: ureq::Error) -> FeedError {
        match err {
            ureq::Error::StatusCode(401 | 403) => FeedError::Unauthorized {
                account: self.credentials.username.clone(),
            },
            ureq::Error::StatusCode(status) => FeedError::Status { operation, status },
            other => FeedError::Transport {
                operation,
                message: other.to_string(),
            },
        }
    }
}

/// Run a blocking HTTP exchange off the async executor.
async fn run_blocking<T, F>(f: F) -> Result<T, FeedError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| FeedError::Join(e.to_string()))
}

impl FeedService for AdafruitIo {
    fn resolve_feed<'a>(&'a self, name: &'a str) -> BoxFuture<'a, Result<Feed, FeedError>> {
        Box::pin(async move {
            let agent = self.agent.clone();
            let url = self.feed_url(name);
            let key = self.credentials.key.clone();

            tracing::debug!(feed = %name, "resolving feed");
            let body = run_blocking(move || -> Result<String, ureq::Error> {
                let mut response = agent.get(&url).header(KEY_HEADER, key.as_str()).call()?;
                response.body_mut().read_to_string()
            })
            .await?
            .map_err(|e| match e {
                ureq::Error::StatusCode(404) => FeedError::FeedNotFound {
                    feed: name.to_string(),
                },
                other => self.request_error(format!("get feed {name}"), other),
            })?;

            let wire: WireFeed = serde_json::from_str(&body)?;
            Ok(Feed {
                name: name.to_string(),
                key: wire.key,
            })
        })
    }

    fn list_values<'a>(
        &'a self,
        feed: &'a Feed,
    ) -> BoxFuture<'a, Result<Vec<FeedEntry>, FeedError>> {
        Box::pin(async move {
            let agent = self.agent.clone();
            let url = format!("{}/data", self.feed_url(&feed.key));
            let key = self.credentials.key.clone();

            let body = run_blocking(move || -> Result<String, ureq::Error> {
                let mut response = agent
                    .get(&url)
                    .header(KEY_HEADER, key.as_str())
                    .query("limit", LIST_LIMIT.to_string())
                    .call()?;
                response.body_mut().read_to_string()
            })
            .await?
            .map_err(|e| self.request_error(format!("list {}", feed.key), e))?;

            let wire: Vec<WireData> = serde_json::from_str(&body)?;
            tracing::debug!(feed = %feed.key, count = wire.len(), "listed feed values");
            Ok(wire.into_iter().map(FeedEntry::from).collect())
        })
    }

    fn append_value<'a>(
        &'a self,
        feed: &'a Feed,
        value: &'a str,
    ) -> BoxFuture<'a, Result<FeedEntry, FeedError>> {
        Box::pin(async move {
            let agent = self.agent.clone();
            let url = format!("{}/data", self.feed_url(&feed.key));
            let key = self.credentials.key.clone();
            let payload = serde_json::json!({ "value": value });

            let body = run_blocking(move || -> Result<String, ureq::Error> {
                let mut response = agent
                    .post(&url)
                    .header(KEY_HEADER, key.as_str())
                    .send_json(&payload)?;
                response.body_mut().read_to_string()
            })
            .await?
            .map_err(|e| self.request_error(format!("append to {}", feed.key), e))?;

            let wire: WireData = serde_json::from_str(&body)?;
            Ok(wire.into())
        })
    }

    fn delete_value<'a>(
        &'a self,
        feed: &'a Feed,
        id: &'a str,
    ) -> BoxFuture<'a, Result<(), FeedError>> {
        Box::pin(async move {
            let agent = self.agent.clone();
            let url = format!("{}/data/{}", self.feed_url(&feed.key), id);
            let key = self.credentials.key.clone();

            run_blocking(move || -> Result<(), ureq::Error> {
                agent
                    .delete(&url)
                    .header(KEY_HEADER, key.as_str())
                    .call()
                    .map(|_| ())
            })
            .await?
            .map_err(|e| self.request_error(format!("delete {id} from {}", feed.key), e))?;

            Ok(())
        })
    }
}
