use std::collections::HashSet;

use marquee_core::FeedEntry;
use marquee_feeds::{Feed, FeedService};

use crate::error::SyncError;

/// Split a most-recent-first listing into the kept window and the rest.
pub fn split_retained(
    mut entries: Vec<FeedEntry>,
    max_entries: usize,
) -> (Vec<FeedEntry>, Vec<FeedEntry>) {
    let expired = entries.split_off(max_entries.min(entries.len()));
    (entries, expired)
}

/// Delete every entry past the newest `max_entries`. Returns what was removed.
///
/// Run once per feed after publishing; the text and color feeds use the same
/// bound, which keeps them paired. A listing can stop at the service's page
/// limit, so the feed is listed again after each round of deletes until
/// nothing past the bound is left.
pub async fn prune(
    service: &dyn FeedService,
    feed: &Feed,
    max_entries: usize,
) -> Result<Vec<FeedEntry>, SyncError> {
    let mut removed: Vec<FeedEntry> = Vec::new();
    let mut removed_ids = HashSet::new();

    loop {
        let entries = service.list_values(feed).await?;
        let (retained, expired) = split_retained(entries, max_entries);
        if expired.is_empty() {
            tracing::debug!(
                feed = %feed.key,
                retained = retained.len(),
                removed = removed.len(),
                "feed pruned"
            );
            return Ok(removed);
        }

        for entry in expired {
            if !removed_ids.insert(entry.id.clone()) {
                tracing::warn!(feed = %feed.key, id = %entry.id, "deleted entry still listed, stopping prune");
                return Ok(removed);
            }
            service.delete_value(feed, &entry.id).await?;
            tracing::info!(feed = %feed.key, value = %entry.value, "removed data from feed");
            removed.push(entry);
        }
    }
}
