use std::future::Future;
use std::pin::Pin;

use marquee_core::FeedEntry;

use crate::error::FeedError;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// A feed resolved against the service.
///
/// `name` is what the operator configured (`group.feed`); `key` is what the
/// service uses to address it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feed {
    pub name: String,
    pub key: String,
}

/// The remote feed store.
///
/// Implementations hold their own credentials; resolving a feed is the
/// first authenticated call and fails fast on bad credentials.
pub trait FeedService: Send + Sync {
    /// Look up a feed by its configured name.
    fn resolve_feed<'a>(&'a self, name: &'a str) -> BoxFuture<'a, Result<Feed, FeedError>>;

    /// Stored values, most recent first. May stop at a service page limit,
    /// in which case only the newest values are returned.
    fn list_values<'a>(&'a self, feed: &'a Feed)
    -> BoxFuture<'a, Result<Vec<FeedEntry>, FeedError>>;

    /// Append a value; it becomes the most recent entry.
    fn append_value<'a>(
        &'a self,
        feed: &'a Feed,
        value: &'a str,
    ) -> BoxFuture<'a, Result<FeedEntry, FeedError>>;

    fn delete_value<'a>(&'a self, feed: &'a Feed, id: &'a str)
    -> BoxFuture<'a, Result<(), FeedError>>;
}
