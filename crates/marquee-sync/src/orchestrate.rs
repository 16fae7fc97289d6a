use marquee_core::{ForbiddenWords, Rejection, parse, validate};
use marquee_feeds::FeedService;

use crate::config::SyncConfig;
use crate::error::SyncError;
use crate::plan::{Action, PublishPlan};
use crate::prune::prune;
use crate::publish::{execute, published_texts, resolve_feeds};
use crate::report::RunReport;
use crate::snapshot::{SnapshotStore, fetch_and_check};
use crate::source::ExportSource;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Plan only: no appends, no deletes, no snapshot commit.
    pub dry_run: bool,
}

/// One full pass: fetch, diff, parse, validate, publish, prune, commit.
///
/// Any feed or fetch error aborts the pass before the snapshot is committed,
/// so the next pass sees the same rows as new again.
pub async fn run_once(
    config: &SyncConfig,
    source: &dyn ExportSource,
    service: &dyn FeedService,
    forbidden: &ForbiddenWords,
    options: RunOptions,
) -> Result<RunReport, SyncError> {
    config.validate()?;
    let mut report = RunReport::started(options.dry_run);
    let store = SnapshotStore::in_dir(&config.state_dir);

    report.new_data = fetch_and_check(source, &store).await?;
    if !report.new_data {
        return Ok(report);
    }

    tracing::info!("processing new data");
    let snapshot = store.current_text()?;
    let parsed = parse(&snapshot);
    report.parsed = parsed.submissions.len();
    report.malformed = parsed.malformed.len();
    if parsed.header_overflow > 0 {
        tracing::warn!(
            lines = parsed.header_overflow,
            "header record spans several lines; rows are not blank-line separated and were skipped"
        );
    }
    for record in &parsed.malformed {
        tracing::warn!(record = record.index, line = %record.line, "skipping malformed record");
    }

    let validated = validate(parsed.submissions, forbidden);
    for rejection in &validated.rejected {
        match rejection {
            Rejection::InvalidColor { text, color } => {
                report.rejected_color += 1;
                tracing::warn!(color = %color, text = %text, "not a valid color, ignoring submission");
            }
            Rejection::Profanity { text } => {
                report.rejected_profanity += 1;
                tracing::warn!(text = %text, "profanity detected, ignoring submission");
            }
        }
    }

    tracing::info!("updating feeds");
    let feeds = resolve_feeds(service, config).await?;
    let published = published_texts(service, &feeds.text).await?;
    let plan = PublishPlan::build(validated.accepted, &published);
    report.already_published = plan.count(Action::AlreadyPublished);
    report.duplicate_in_batch = plan.count(Action::DuplicateInBatch);

    if options.dry_run {
        for submission in plan.to_publish() {
            tracing::info!(text = %submission.text, color = %submission.color, "would publish");
        }
        report.published = plan.count(Action::Publish);
        return Ok(report);
    }

    report.published = execute(&plan, service, &feeds).await?;
    report.pruned_text = prune(service, &feeds.text, config.max_quotes).await?.len();
    report.pruned_color = prune(service, &feeds.color, config.max_quotes).await?.len();

    tracing::info!("updating local snapshot for comparison");
    store.commit()?;
    report.committed = true;

    Ok(report)
}
