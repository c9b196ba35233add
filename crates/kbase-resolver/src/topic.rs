//! Full topic detail resolution.

use kbase_content::{ContentSource, GeneratedStore};
use kbase_core::category::Category;
use kbase_core::normalize::{self, NormalizedMeta};
use kbase_core::types::{Topic, TopicSummary};
use tracing::{debug, warn};

use std::sync::Arc;

use crate::cache::{CacheManager, SolutionMap};
use crate::solutions::SolutionResolver;

/// Summary-tier projection of normalized metadata. Both the list scan
/// and the topic resolver build summaries through here, so the two tiers
/// cannot disagree for identical input.
pub fn summary_of(topic_id: &str, meta: &NormalizedMeta) -> TopicSummary {
    TopicSummary {
        id: topic_id.to_string(),
        title: meta.title.clone(),
        difficulty: meta.difficulty,
        time_complexity: meta.time_complexity.clone(),
        space_complexity: meta.space_complexity.clone(),
        companies: meta.companies.clone(),
        tags: meta.tags.clone(),
        is_completed: false,
        is_bookmarked: false,
    }
}

pub struct TopicResolver<'a> {
    source: &'a ContentSource,
    generated: &'a GeneratedStore,
    cache: &'a CacheManager,
}

impl<'a> TopicResolver<'a> {
    pub fn new(
        source: &'a ContentSource,
        generated: &'a GeneratedStore,
        cache: &'a CacheManager,
    ) -> Self {
        Self { source, generated, cache }
    }

    /// Compose the full topic object, or `None` when the content file
    /// cannot be located or read. "Located but without solutions or
    /// examples" is a plain topic, not a failure. The cached snapshot is
    /// returned unchanged until the category is invalidated.
    pub async fn resolve(&self, category: Category, topic_id: &str) -> Option<Arc<Topic>> {
        if let Some(hit) = self.cache.get_topic(category, topic_id) {
            return Some(hit);
        }
        let doc = match self.source.read_topic(category, topic_id).await {
            Ok(Some(doc)) => doc,
            Ok(None) => {
                debug!(category = %category, topic_id, "topic not found");
                return None;
            }
            Err(e) => {
                warn!(category = %category, topic_id, error = %e, "treating unreadable topic as not found");
                return None;
            }
        };
        let meta = normalize::normalize(category, topic_id, &doc.meta, &doc.body);
        let solutions = if category.config().has_solutions {
            let resolved = SolutionResolver::new(self.source, self.generated, self.cache)
                .resolve(category, topic_id, meta.solution_languages.as_deref())
                .await;
            (*resolved).clone()
        } else {
            SolutionMap::new()
        };
        let topic = Topic {
            summary: summary_of(topic_id, &meta),
            description: meta.description.clone(),
            content: doc.body,
            examples: meta.examples.clone(),
            solutions,
            platform_links: meta.platform_links.clone(),
        };
        Some(self.cache.put_topic(category, topic_id, topic))
    }
}
