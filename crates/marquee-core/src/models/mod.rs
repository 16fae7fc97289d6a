mod feed_entry;
mod submission;

pub use feed_entry::FeedEntry;
pub use submission::Submission;
