/// Counters for one pass of the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub started_at: jiff::Timestamp,
    pub dry_run: bool,
    /// The export differed from the previous snapshot.
    pub new_data: bool,
    pub parsed: usize,
    pub malformed: usize,
    pub rejected_color: usize,
    pub rejected_profanity: usize,
    pub published: usize,
    pub already_published: usize,
    pub duplicate_in_batch: usize,
    pub pruned_text: usize,
    pub pruned_color: usize,
    /// The current snapshot became the new baseline.
    pub committed: bool,
}

impl RunReport {
    pub fn started(dry_run: bool) -> Self {
        Self {
            started_at: jiff::Timestamp::now(),
            dry_run,
            new_data: false,
            parsed: 0,
            malformed: 0,
            rejected_color: 0,
            rejected_profanity: 0,
            published: 0,
            already_published: 0,
            duplicate_in_batch: 0,
            pruned_text: 0,
            pruned_color: 0,
            committed: false,
        }
    }
}
