use std::collections::HashSet;

use marquee_core::Submission;
use marquee_feeds::{Feed, FeedService};

use crate::config::SyncConfig;
use crate::error::SyncError;
use crate::plan::PublishPlan;

/// The text feed and its positionally paired color feed.
#[derive(Debug, Clone)]
pub struct FeedPair {
    pub text: Feed,
    pub color: Feed,
}

/// Resolve both configured feeds. This is also the first authenticated
/// call, so bad credentials fail here.
pub async fn resolve_feeds(
    service: &dyn FeedService,
    config: &SyncConfig,
) -> Result<FeedPair, SyncError> {
    let text = service.resolve_feed(&config.text_feed).await?;
    let color = service.resolve_feed(&config.color_feed).await?;
    tracing::debug!(text = %text.key, color = %color.key, "feeds resolved");
    Ok(FeedPair { text, color })
}

/// Every text value currently stored in the text feed.
pub async fn published_texts(
    service: &dyn FeedService,
    feed: &Feed,
) -> Result<HashSet<String>, SyncError> {
    let entries = service.list_values(feed).await?;
    Ok(entries.into_iter().map(|e| e.value).collect())
}

/// Append every `Publish` entry of the plan, text first then color.
///
/// Returns the number of pairs appended. An error aborts the remainder;
/// pairs already appended stay, and the next run skips them because their
/// text is then in the feed.
pub async fn execute(
    plan: &PublishPlan,
    service: &dyn FeedService,
    feeds: &FeedPair,
) -> Result<usize, SyncError> {
    let mut appended = 0;
    for submission in plan.to_publish() {
        service.append_value(&feeds.text, &submission.text).await?;
        tracing::info!(feed = %feeds.text.key, value = %submission.text, "added data to text feed");

        service.append_value(&feeds.color, &submission.color).await?;
        tracing::info!(feed = %feeds.color.key, value = %submission.color, "added data to color feed");

        appended += 1;
    }
    Ok(appended)
}

/// Plan against the current text feed, then execute.
pub async fn publish(
    service: &dyn FeedService,
    feeds: &FeedPair,
    submissions: Vec<Submission>,
) -> Result<PublishPlan, SyncError> {
    let published = published_texts(service, &feeds.text).await?;
    let plan = PublishPlan::build(submissions, &published);
    execute(&plan, service, feeds).await?;
    Ok(plan)
}
