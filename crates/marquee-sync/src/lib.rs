//! marquee-sync
//!
//! The relay pipeline: pull the published form export, decide whether it
//! changed, validate the submissions, and mirror them into the paired text
//! and color feeds.
//!
//! Public API:
//! - `fetch_and_check()`: fetch the export and diff it against the last snapshot
//! - `PublishPlan::build()`: decide which submissions still need publishing
//! - `publish()` / `execute()`: append text then color for each new submission
//! - `prune()`: keep only the newest entries of a feed
//! - `run_once()`: the whole pass in one call, committing the snapshot last

pub mod config;
pub mod error;
pub mod orchestrate;
pub mod plan;
pub mod prune;
pub mod publish;
pub mod report;
pub mod snapshot;
pub mod source;

pub use crate::config::SyncConfig;
pub use crate::error::{SyncError, format_err_chain};
pub use crate::orchestrate::{RunOptions, run_once};
pub use crate::plan::{Action, PlanEntry, PublishPlan};
pub use crate::prune::prune;
pub use crate::publish::{FeedPair, execute, publish, resolve_feeds};
pub use crate::report::RunReport;
pub use crate::snapshot::{SnapshotStore, fetch_and_check};
pub use crate::source::{ExportSource, HttpExport};
