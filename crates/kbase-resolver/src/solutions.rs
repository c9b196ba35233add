//! Per-topic solution resolution.
//!
//! One resolver, parametrized by category configuration, replaces the
//! per-generation loader copies the original content pipeline grew. The
//! fallback chain is an ordered list of sources tried in sequence; the
//! first one that yields a non-empty map wins.

use kbase_content::{ContentSource, GeneratedStore, DEFAULT_LANGUAGES};
use kbase_core::category::Category;
use kbase_core::types::{SolutionEntry, SolutionLookup};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

use crate::cache::{CacheManager, SolutionMap};

/// One rung of the fallback chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolutionSource {
    /// Solutions embedded in the pregenerated full-content bundle.
    Bundle,
    /// The pregenerated per-topic solutions file.
    GeneratedFile,
    /// Direct probing of conventionally-named per-language files.
    Probe,
}

/// Attempt order. Bundles are cheapest (one read covers the category),
/// probing is the last resort.
pub const FALLBACK_CHAIN: [SolutionSource; 3] = [
    SolutionSource::Bundle,
    SolutionSource::GeneratedFile,
    SolutionSource::Probe,
];

pub struct SolutionResolver<'a> {
    source: &'a ContentSource,
    generated: &'a GeneratedStore,
    cache: &'a CacheManager,
}

impl<'a> SolutionResolver<'a> {
    pub fn new(
        source: &'a ContentSource,
        generated: &'a GeneratedStore,
        cache: &'a CacheManager,
    ) -> Self {
        Self { source, generated, cache }
    }

    /// Resolve the language -> solution map for one topic, consulting the
    /// solution cache first. `languages` is the topic's own declared
    /// list; without one the default token set is probed. An empty map
    /// means "no solutions available", never an error.
    ///
    /// Earlier sources win per language key: a language the bundle
    /// already covers is never overwritten by a probed file, while
    /// languages the bundle lacks are still picked up further down the
    /// chain.
    pub async fn resolve(
        &self,
        category: Category,
        topic_id: &str,
        languages: Option<&[String]>,
    ) -> Arc<SolutionMap> {
        if let Some(hit) = self.cache.get_solutions(category, topic_id) {
            return hit;
        }
        let mut merged = SolutionMap::new();
        for source in FALLBACK_CHAIN {
            let found = match source {
                SolutionSource::Bundle => self.from_bundle(category, topic_id).await,
                SolutionSource::GeneratedFile => self.from_generated_file(category, topic_id).await,
                SolutionSource::Probe => self.from_probing(category, topic_id, languages).await,
            };
            if !found.is_empty() {
                debug!(category = %category, topic_id, source = ?source, count = found.len(), "solutions resolved");
            }
            for (key, entry) in found {
                merged.entry(key).or_insert(entry);
            }
        }
        self.cache.put_solutions(category, topic_id, merged)
    }

    async fn from_bundle(&self, category: Category, topic_id: &str) -> SolutionMap {
        match self.generated.bundle_entry(category, topic_id).await {
            Some(entry) => entries_from_raw(entry.solutions),
            None => SolutionMap::new(),
        }
    }

    async fn from_generated_file(&self, category: Category, topic_id: &str) -> SolutionMap {
        match self.generated.solutions_file(category, topic_id).await {
            Some(raw) => entries_from_raw(raw),
            None => SolutionMap::new(),
        }
    }

    /// Probe each candidate language file in turn, silently skipping
    /// absent ones. Grouped categories namespace keys by subdirectory so
    /// sibling examples with the same language token cannot collide.
    async fn from_probing(
        &self,
        category: Category,
        topic_id: &str,
        languages: Option<&[String]>,
    ) -> SolutionMap {
        let defaults: Vec<String> = DEFAULT_LANGUAGES.iter().map(|s| (*s).to_string()).collect();
        let candidates = languages.unwrap_or(&defaults);

        let mut groups: Vec<Option<String>> = vec![None];
        if category.config().grouped_solutions {
            let named = self.source.solution_groups(category, topic_id);
            if !named.is_empty() {
                groups = named.into_iter().map(Some).collect();
            }
        }

        let mut map = SolutionMap::new();
        for group in &groups {
            for language in candidates {
                let lookup = self
                    .source
                    .probe_solution(category, topic_id, group.as_deref(), language)
                    .await;
                if let SolutionLookup::Found(entry) = lookup {
                    let key = match group {
                        Some(group) => format!("{group}_{language}"),
                        None => language.clone(),
                    };
                    map.insert(key, entry);
                }
            }
        }
        map
    }
}

/// Raw artifact maps are keyed by language token or `subdir_language`;
/// recover the bare token for the entry's own language field.
fn entries_from_raw(raw: BTreeMap<String, String>) -> SolutionMap {
    raw.into_iter()
        .map(|(key, code)| {
            let language = key.rsplit('_').next().unwrap_or(key.as_str()).to_string();
            (key, SolutionEntry { language, code })
        })
        .collect()
}
