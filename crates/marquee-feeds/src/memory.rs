use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use marquee_core::FeedEntry;

use crate::error::FeedError;
use crate::service::{BoxFuture, Feed, FeedService};

/// In-process feed store with the same ordering rules as the remote service.
///
/// Entries are kept most-recent-first. Ids are sequential and never reused.
#[derive(Debug, Default)]
pub struct MemoryFeeds {
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    feeds: HashMap<String, Vec<FeedEntry>>,
    next_id: u64,
    appends: usize,
    fail_appends_after: Option<usize>,
    page_limit: Option<usize>,
}

impl Inner {
    fn push(&mut self, feed: &str, value: &str) -> Option<FeedEntry> {
        self.next_id += 1;
        let entry = FeedEntry {
            id: self.next_id.to_string(),
            value: value.to_string(),
            created_at: Some(jiff::Timestamp::now()),
        };
        self.feeds.get_mut(feed)?.insert(0, entry.clone());
        Some(entry)
    }
}

impl MemoryFeeds {
    pub fn with_feeds<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let feeds = names.into_iter().map(|n| (n.into(), Vec::new())).collect();
        Self {
            inner: Mutex::new(Inner {
                feeds,
                ..Inner::default()
            }),
        }
    }

    /// Append `values` oldest first, so the last one listed ends up most recent.
    pub fn seed(&self, feed: &str, values: &[&str]) {
        let mut inner = self.lock();
        inner.feeds.entry(feed.to_string()).or_default();
        for value in values {
            inner.push(feed, value);
        }
    }

    /// Current values, most recent first. Empty for an unknown feed.
    pub fn values(&self, feed: &str) -> Vec<String> {
        self.lock()
            .feeds
            .get(feed)
            .map(|entries| entries.iter().map(|e| e.value.clone()).collect())
            .unwrap_or_default()
    }

    /// Let `count` more appends succeed, then fail every later one.
    pub fn fail_appends_after(&self, count: usize) {
        let mut inner = self.lock();
        inner.fail_appends_after = Some(inner.appends + count);
    }

    /// Cap every listing at `limit` entries, like the remote page size.
    pub fn limit_pages(&self, limit: usize) {
        self.lock().page_limit = Some(limit);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn not_found(feed: &str) -> FeedError {
    FeedError::FeedNotFound {
        feed: feed.to_string(),
    }
}

impl FeedService for MemoryFeeds {
    fn resolve_feed<'a>(&'a self, name: &'a str) -> BoxFuture<'a, Result<Feed, FeedError>> {
        Box::pin(async move {
            if self.lock().feeds.contains_key(name) {
                Ok(Feed {
                    name: name.to_string(),
                    key: name.to_string(),
                })
            } else {
                Err(not_found(name))
            }
        })
    }

    fn list_values<'a>(
        &'a self,
        feed: &'a Feed,
    ) -> BoxFuture<'a, Result<Vec<FeedEntry>, FeedError>> {
        Box::pin(async move {
            let inner = self.lock();
            let entries = inner.feeds.get(&feed.key).ok_or_else(|| not_found(&feed.key))?;
            let limit = inner.page_limit.unwrap_or(entries.len());
            Ok(entries.iter().take(limit).cloned().collect())
        })
    }

    fn append_value<'a>(
        &'a self,
        feed: &'a Feed,
        value: &'a str,
    ) -> BoxFuture<'a, Result<FeedEntry, FeedError>> {
        Box::pin(async move {
            let mut inner = self.lock();
            if inner.fail_appends_after.is_some_and(|limit| inner.appends >= limit) {
                return Err(FeedError::Transport {
                    operation: format!("append to {}", feed.key),
                    message: "injected failure".to_string(),
                });
            }
            let entry = inner.push(&feed.key, value).ok_or_else(|| not_found(&feed.key))?;
            inner.appends += 1;
            Ok(entry)
        })
    }

    fn delete_value<'a>(
        &'a self,
        feed: &'a Feed,
        id: &'a str,
    ) -> BoxFuture<'a, Result<(), FeedError>> {
        Box::pin(async move {
            let mut inner = self.lock();
            let entries = inner
                .feeds
                .get_mut(&feed.key)
                .ok_or_else(|| not_found(&feed.key))?;
            let before = entries.len();
            entries.retain(|e| e.id != id);
            if entries.len() == before {
                return Err(FeedError::Status {
                    operation: format!("delete {id} from {}", feed.key),
                    status: 404,
                });
            }
            Ok(())
        })
    }
}
