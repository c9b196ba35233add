//! Lightweight per-category topic listings.

use kbase_content::{ContentSource, GeneratedStore};
use kbase_core::category::Category;
use kbase_core::normalize;
use kbase_core::types::{Difficulty, TopicSummary};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::cache::CacheManager;
use crate::topic::summary_of;

pub struct ListResolver<'a> {
    source: &'a ContentSource,
    generated: &'a GeneratedStore,
    cache: &'a CacheManager,
}

impl<'a> ListResolver<'a> {
    pub fn new(
        source: &'a ContentSource,
        generated: &'a GeneratedStore,
        cache: &'a CacheManager,
    ) -> Self {
        Self { source, generated, cache }
    }

    /// Produce the category's summaries, consulting the list cache first.
    /// On miss: the prebuilt index when the category has one and it
    /// parses as an array (an empty array is a valid "no content yet"
    /// result), otherwise a scan of the raw content files. Output is
    /// sorted by title either way.
    pub async fn resolve(&self, category: Category) -> Arc<Vec<TopicSummary>> {
        if let Some(hit) = self.cache.get_list(category) {
            return hit;
        }
        if category.config().has_prebuilt_index {
            match self.generated.load_index(category).await {
                Ok(mut summaries) => {
                    if !category.config().difficulty_enabled {
                        // The medium pin holds even against a stale index.
                        for summary in &mut summaries {
                            summary.difficulty = Difficulty::Medium;
                        }
                    }
                    sort_by_title(&mut summaries);
                    return self.cache.put_list(category, summaries);
                }
                Err(e) => {
                    debug!(category = %category, error = %e, "prebuilt index unusable, scanning");
                }
            }
        }
        let summaries = self.scan(category).await;
        self.cache.put_list(category, summaries)
    }

    /// Scan fallback: enumerate and normalize every content file. One
    /// malformed file is logged and skipped, never aborting the listing.
    async fn scan(&self, category: Category) -> Vec<TopicSummary> {
        let mut summaries = Vec::new();
        for path in self.source.list_topic_files(category) {
            let doc = match self.source.read_document(&path).await {
                Ok(Some(doc)) => doc,
                Ok(None) => continue,
                Err(e) => {
                    warn!(category = %category, error = %e, "skipping content file");
                    continue;
                }
            };
            let topic_id = self.source.topic_id_for(category, &path);
            let meta = normalize::normalize(category, &topic_id, &doc.meta, &doc.body);
            summaries.push(summary_of(&topic_id, &meta));
        }
        sort_by_title(&mut summaries);
        summaries
    }
}

/// Deterministic, case-folded title ordering. Ties fall back to the raw
/// title then the id so repeated runs always agree.
pub fn sort_by_title(summaries: &mut [TopicSummary]) {
    summaries.sort_by(|a, b| {
        a.title
            .to_lowercase()
            .cmp(&b.title.to_lowercase())
            .then_with(|| a.title.cmp(&b.title))
            .then_with(|| a.id.cmp(&b.id))
    });
}
