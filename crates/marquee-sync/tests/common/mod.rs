#![allow(dead_code)]

use std::sync::Mutex;

use marquee_feeds::{BoxFuture, MemoryFeeds};
use marquee_sync::{ExportSource, SyncConfig, SyncError};

pub const TEXT_FEED: &str = "quotes.signtext";
pub const COLOR_FEED: &str = "quotes.signcolor";

/// An export whose body the test can swap between passes.
pub struct StaticExport {
    body: Mutex<Result<Vec<u8>, u16>>,
}

impl StaticExport {
    pub fn new(body: &str) -> Self {
        Self {
            body: Mutex::new(Ok(body.as_bytes().to_vec())),
        }
    }

    pub fn failing(status: u16) -> Self {
        Self {
            body: Mutex::new(Err(status)),
        }
    }

    pub fn set(&self, body: &str) {
        *self.body.lock().unwrap() = Ok(body.as_bytes().to_vec());
    }

    pub fn set_bytes(&self, body: &[u8]) {
        *self.body.lock().unwrap() = Ok(body.to_vec());
    }
}

impl ExportSource for StaticExport {
    fn describe(&self) -> &str {
        "static export"
    }

    fn fetch(&self) -> BoxFuture<'_, Result<Vec<u8>, SyncError>> {
        Box::pin(async move {
            self.body
                .lock()
                .unwrap()
                .clone()
                .map_err(|status| SyncError::FetchStatus {
                    url: "static export".to_string(),
                    status,
                })
        })
    }
}

pub fn feeds() -> MemoryFeeds {
    MemoryFeeds::with_feeds([TEXT_FEED, COLOR_FEED])
}

pub fn config(state_dir: &std::path::Path, max_quotes: usize) -> SyncConfig {
    SyncConfig {
        max_quotes,
        text_feed: TEXT_FEED.to_string(),
        color_feed: COLOR_FEED.to_string(),
        state_dir: state_dir.to_path_buf(),
        ..SyncConfig::new("https://example.invalid/export.csv")
    }
}

/// Build an export body in the blank-line-separated layout.
pub fn export(rows: &[(&str, &str)]) -> String {
    let mut body = String::from("Timestamp,Text,Color");
    for (text, color) in rows {
        body.push_str(&format!("\n\n12/1/2020 10:00:00,{text},{color}"));
    }
    body
}
