//! Three-tier keyed cache for resolution results.
//!
//! Keys: list = `<category>`, topic = `<category>:<id>`, solutions =
//! `<category>:<id>:solutions`. Entries are immutable `Arc` snapshots,
//! written once per key and discarded en masse on category invalidation.
//! No TTL or size bound: the working set is bounded by content volume.

use kbase_core::category::Category;
use kbase_core::types::{SolutionEntry, Topic, TopicSummary};
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex, PoisonError};

pub type SolutionMap = BTreeMap<String, SolutionEntry>;

/// Explicitly constructed cache; owners decide its lifetime, so tests get
/// clean isolation without process-wide state.
#[derive(Default)]
pub struct CacheManager {
    lists: Mutex<HashMap<String, Arc<Vec<TopicSummary>>>>,
    topics: Mutex<HashMap<String, Arc<Topic>>>,
    solutions: Mutex<HashMap<String, Arc<SolutionMap>>>,
}

pub fn topic_key(category: Category, topic_id: &str) -> String {
    format!("{}:{topic_id}", category.slug())
}

pub fn solutions_key(category: Category, topic_id: &str) -> String {
    format!("{}:{topic_id}:solutions", category.slug())
}

impl CacheManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_list(&self, category: Category) -> Option<Arc<Vec<TopicSummary>>> {
        lock(&self.lists).get(category.slug()).cloned()
    }

    /// Insert-if-vacant: the first writer wins and later duplicate
    /// in-flight results are dropped in favor of the cached entry.
    pub fn put_list(&self, category: Category, value: Vec<TopicSummary>) -> Arc<Vec<TopicSummary>> {
        lock(&self.lists)
            .entry(category.slug().to_string())
            .or_insert_with(|| Arc::new(value))
            .clone()
    }

    pub fn get_topic(&self, category: Category, topic_id: &str) -> Option<Arc<Topic>> {
        lock(&self.topics).get(&topic_key(category, topic_id)).cloned()
    }

    pub fn put_topic(&self, category: Category, topic_id: &str, value: Topic) -> Arc<Topic> {
        lock(&self.topics)
            .entry(topic_key(category, topic_id))
            .or_insert_with(|| Arc::new(value))
            .clone()
    }

    pub fn get_solutions(&self, category: Category, topic_id: &str) -> Option<Arc<SolutionMap>> {
        lock(&self.solutions)
            .get(&solutions_key(category, topic_id))
            .cloned()
    }

    pub fn put_solutions(
        &self,
        category: Category,
        topic_id: &str,
        value: SolutionMap,
    ) -> Arc<SolutionMap> {
        lock(&self.solutions)
            .entry(solutions_key(category, topic_id))
            .or_insert_with(|| Arc::new(value))
            .clone()
    }

    /// Drop all entries for `category`, or everything when `None`.
    /// Topic/solution entries match on the `<category>:` key prefix.
    pub fn invalidate(&self, category: Option<Category>) {
        match category {
            Some(category) => {
                let prefix = format!("{}:", category.slug());
                lock(&self.lists).remove(category.slug());
                lock(&self.topics).retain(|k, _| !k.starts_with(&prefix));
                lock(&self.solutions).retain(|k, _| !k.starts_with(&prefix));
            }
            None => {
                lock(&self.lists).clear();
                lock(&self.topics).clear();
                lock(&self.solutions).clear();
            }
        }
    }
}

/// Lock helper tolerating poisoning; no invariant outlives a panic in a
/// holder since every critical section is a plain map operation.
fn lock<T>(m: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}
