use crate::category::Category;
use crate::types::ProgressFlags;

/// Read side of the external per-user progress store.
///
/// This layer never writes progress; it only overlays the flags onto
/// summaries and topics at read time. Flags default to false when the
/// store has no entry.
pub trait ProgressStore: Send + Sync {
    fn lookup(&self, user_id: &str, category: Category, topic_id: &str) -> Option<ProgressFlags>;
}

/// Progress store used when no user context is available; every topic
/// reads as neither completed nor bookmarked.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressStore for NoProgress {
    fn lookup(&self, _user_id: &str, _category: Category, _topic_id: &str) -> Option<ProgressFlags> {
        None
    }
}
