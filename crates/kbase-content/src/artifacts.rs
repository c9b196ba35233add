//! Loaders for generated artifacts: prebuilt per-category indexes and
//! pregenerated content/solutions bundles.
//!
//! These are produced ahead of time by an external export pipeline; this
//! layer only consumes them and must keep working when they are missing
//! or stale, so every loader has a soft failure mode.

use kbase_core::category::Category;
use kbase_core::error::{Error, Result};
use kbase_core::types::TopicSummary;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// One entry of a pregenerated full-content bundle. Only the fields this
/// layer consumes are modeled; unknown fields are ignored.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct BundleEntry {
    #[serde(default)]
    pub solutions: BTreeMap<String, String>,
}

/// Handle on the generated-artifact directory. The directory itself may
/// be absent; every lookup then reports the artifact as missing.
pub struct GeneratedStore {
    dir: PathBuf,
}

impl GeneratedStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn index_path(&self, category: Category) -> PathBuf {
        self.dir.join(format!("{}-index.json", category.slug()))
    }

    fn bundle_path(&self, category: Category) -> PathBuf {
        self.dir.join(format!("{}-content.json", category.slug()))
    }

    fn solutions_path(&self, category: Category, topic_id: &str) -> PathBuf {
        self.dir
            .join("solutions")
            .join(category.slug())
            .join(format!("{topic_id}.json"))
    }

    /// Load the prebuilt index for a category. A syntactically valid
    /// array, including an empty one, is returned as-is; a missing file
    /// or anything that is not an array is `MalformedIndex`, which the
    /// list resolver recovers from by scanning.
    pub async fn load_index(&self, category: Category) -> Result<Vec<TopicSummary>> {
        let path = self.index_path(category);
        let text = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| Error::MalformedIndex {
                category: category.slug().to_string(),
                reason: e.to_string(),
            })?;
        serde_json::from_str::<Vec<TopicSummary>>(&text).map_err(|e| Error::MalformedIndex {
            category: category.slug().to_string(),
            reason: e.to_string(),
        })
    }

    /// Bundle entry for one topic, or `None` when no bundle exists, the
    /// bundle does not parse, or the topic is not in it.
    pub async fn bundle_entry(&self, category: Category, topic_id: &str) -> Option<BundleEntry> {
        let path = self.bundle_path(category);
        let text = tokio::fs::read_to_string(&path).await.ok()?;
        let mut bundle: BTreeMap<String, BundleEntry> = match serde_json::from_str(&text) {
            Ok(bundle) => bundle,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "unparseable content bundle");
                return None;
            }
        };
        bundle.remove(topic_id)
    }

    /// Per-topic generated solutions file (language token -> code), or
    /// `None` when absent or unparseable.
    pub async fn solutions_file(
        &self,
        category: Category,
        topic_id: &str,
    ) -> Option<BTreeMap<String, String>> {
        let path = self.solutions_path(category, topic_id);
        let text = tokio::fs::read_to_string(&path).await.ok()?;
        match serde_json::from_str(&text) {
            Ok(map) => Some(map),
            Err(e) => {
                debug!(path = %path.display(), error = %e, "unparseable solutions file");
                None
            }
        }
    }
}
