#![deny(warnings)]
#![deny(dead_code)]
#![deny(unused_variables)]
#![deny(unused_imports)]

//! The unified content resolution layer: list/topic/solution resolvers
//! over the annotated content tree and its generated artifacts, fronted
//! by a three-tier cache and an optional per-user progress overlay.

pub mod cache;
pub mod list;
pub mod solutions;
pub mod topic;

use std::path::PathBuf;
use std::sync::Arc;

use kbase_content::{ContentSource, GeneratedStore};
use kbase_core::category::Category;
use kbase_core::error::Result;
use kbase_core::traits::{NoProgress, ProgressStore};
use kbase_core::types::{Topic, TopicSummary};

use cache::CacheManager;
use list::ListResolver;
use topic::TopicResolver;

pub use cache::SolutionMap;
pub use solutions::{SolutionResolver, SolutionSource, FALLBACK_CHAIN};

/// Facade over the resolution layer. Owns the cache, so constructing a
/// fresh resolver gives a fresh cache generation; there is no process-
/// wide state.
pub struct ContentResolver {
    source: ContentSource,
    generated: GeneratedStore,
    cache: CacheManager,
    progress: Arc<dyn ProgressStore>,
}

impl ContentResolver {
    /// Wire the resolver against a content tree and generated-artifact
    /// directory. A missing content root is the one fatal condition in
    /// this layer; everything past construction degrades per-request.
    pub fn new(content_root: PathBuf, generated_dir: PathBuf) -> Result<Self> {
        Ok(Self {
            source: ContentSource::new(content_root)?,
            generated: GeneratedStore::new(generated_dir),
            cache: CacheManager::new(),
            progress: Arc::new(NoProgress),
        })
    }

    /// Attach a progress store for completion/bookmark overlays.
    #[must_use]
    pub fn with_progress(mut self, store: Arc<dyn ProgressStore>) -> Self {
        self.progress = store;
        self
    }

    /// The category's topic summaries with progress flags at their
    /// defaults (false).
    pub async fn list_topics(&self, category: Category) -> Vec<TopicSummary> {
        let cached = ListResolver::new(&self.source, &self.generated, &self.cache)
            .resolve(category)
            .await;
        (*cached).clone()
    }

    /// Summaries with the given user's completion/bookmark flags
    /// overlaid. Flags stay false for topics the store has no entry for.
    pub async fn list_topics_for(&self, category: Category, user_id: &str) -> Vec<TopicSummary> {
        let mut summaries = self.list_topics(category).await;
        for summary in &mut summaries {
            if let Some(flags) = self.progress.lookup(user_id, category, &summary.id) {
                summary.is_completed = flags.is_completed;
                summary.is_bookmarked = flags.is_bookmarked;
            }
        }
        summaries
    }

    /// Full topic detail, or `None` when no content file backs the id.
    /// Repeated calls return the identical cached snapshot until the
    /// category is invalidated.
    pub async fn get_topic(&self, category: Category, topic_id: &str) -> Option<Arc<Topic>> {
        TopicResolver::new(&self.source, &self.generated, &self.cache)
            .resolve(category, topic_id)
            .await
    }

    /// Topic detail with the user's progress flags overlaid. The cached
    /// snapshot itself is never mutated; an overlay that changes flags
    /// produces a detached copy.
    pub async fn get_topic_for(
        &self,
        category: Category,
        topic_id: &str,
        user_id: &str,
    ) -> Option<Arc<Topic>> {
        let topic = self.get_topic(category, topic_id).await?;
        match self.progress.lookup(user_id, category, topic_id) {
            Some(flags)
                if flags.is_completed != topic.summary.is_completed
                    || flags.is_bookmarked != topic.summary.is_bookmarked =>
            {
                let mut overlaid = (*topic).clone();
                overlaid.summary.is_completed = flags.is_completed;
                overlaid.summary.is_bookmarked = flags.is_bookmarked;
                Some(Arc::new(overlaid))
            }
            _ => Some(topic),
        }
    }

    /// Drop cached entries for one category, or all of them.
    pub fn invalidate(&self, category: Option<Category>) {
        self.cache.invalidate(category);
    }
}
