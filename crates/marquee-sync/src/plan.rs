use std::collections::HashSet;

use marquee_core::Submission;

/// What the publisher will do with one validated submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Publish,
    /// The text is already in the text feed.
    AlreadyPublished,
    /// An earlier submission in this batch carries the same text.
    DuplicateInBatch,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanEntry {
    pub submission: Submission,
    pub action: Action,
}

/// Publish decisions for a batch, in submission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublishPlan {
    pub entries: Vec<PlanEntry>,
}

impl PublishPlan {
    /// Decide per submission against the texts already in the feed.
    pub fn build(submissions: Vec<Submission>, published: &HashSet<String>) -> Self {
        let mut queued = HashSet::new();
        let entries = submissions
            .into_iter()
            .map(|submission| {
                let action = if published.contains(&submission.text) {
                    Action::AlreadyPublished
                } else if !queued.insert(submission.text.clone()) {
                    Action::DuplicateInBatch
                } else {
                    Action::Publish
                };
                PlanEntry { submission, action }
            })
            .collect();
        Self { entries }
    }

    pub fn has_changes(&self) -> bool {
        self.entries.iter().any(|e| e.action == Action::Publish)
    }

    pub fn to_publish(&self) -> impl Iterator<Item = &Submission> {
        self.entries
            .iter()
            .filter(|e| e.action == Action::Publish)
            .map(|e| &e.submission)
    }

    pub fn count(&self, action: Action) -> usize {
        self.entries.iter().filter(|e| e.action == action).count()
    }
}
