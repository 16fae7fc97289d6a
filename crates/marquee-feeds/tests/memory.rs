use marquee_feeds::{FeedError, FeedService, MemoryFeeds};

#[tokio::test]
async fn appended_values_list_most_recent_first() {
    let feeds = MemoryFeeds::with_feeds(["quotes.text"]);
    let feed = feeds.resolve_feed("quotes.text").await.unwrap();

    feeds.append_value(&feed, "first").await.unwrap();
    feeds.append_value(&feed, "second").await.unwrap();

    let listed = feeds.list_values(&feed).await.unwrap();
    let values: Vec<_> = listed.iter().map(|e| e.value.as_str()).collect();
    assert_eq!(values, ["second", "first"]);
    assert_ne!(listed[0].id, listed[1].id);
}

#[tokio::test]
async fn unknown_feed_does_not_resolve() {
    let feeds = MemoryFeeds::with_feeds(["quotes.text"]);
    let err = feeds.resolve_feed("quotes.missing").await.unwrap_err();
    assert!(matches!(err, FeedError::FeedNotFound { feed } if feed == "quotes.missing"));
}

#[tokio::test]
async fn delete_removes_only_the_named_entry() {
    let feeds = MemoryFeeds::with_feeds(["quotes.text"]);
    feeds.seed("quotes.text", &["a", "b", "c"]);
    let feed = feeds.resolve_feed("quotes.text").await.unwrap();

    let listed = feeds.list_values(&feed).await.unwrap();
    feeds.delete_value(&feed, &listed[1].id).await.unwrap();

    assert_eq!(feeds.values("quotes.text"), ["c", "a"]);
    assert!(feeds.delete_value(&feed, &listed[1].id).await.is_err());
}

#[tokio::test]
async fn injected_append_failure_trips_after_limit() {
    let feeds = MemoryFeeds::with_feeds(["quotes.text"]);
    let feed = feeds.resolve_feed("quotes.text").await.unwrap();
    feeds.fail_appends_after(1);

    feeds.append_value(&feed, "ok").await.unwrap();
    let err = feeds.append_value(&feed, "boom").await.unwrap_err();

    assert!(matches!(err, FeedError::Transport { .. }));
    assert_eq!(feeds.values("quotes.text"), ["ok"]);
}
