/// A value stored in a remote feed.
///
/// Listings are most-recent-first; the position of an entry in a listing is
/// its recency rank, so no ordering key is carried here beyond the optional
/// creation time reported by the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedEntry {
    pub id: String,
    pub value: String,
    pub created_at: Option<jiff::Timestamp>,
}
