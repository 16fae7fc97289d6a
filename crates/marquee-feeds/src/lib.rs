//! marquee-feeds
//!
//! Feed-service operations. A small trait over the remote store, the
//! Adafruit IO REST client that implements it, and an in-memory store for
//! tests and dry runs.

pub mod adafruit;
pub mod error;
pub mod memory;
pub mod service;

pub use crate::adafruit::{AdafruitIo, Credentials, LIST_LIMIT};
pub use crate::error::FeedError;
pub use crate::memory::MemoryFeeds;
pub use crate::service::{BoxFuture, Feed, FeedService};
