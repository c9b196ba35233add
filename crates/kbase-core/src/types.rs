//! Domain types shared by the resolvers and their callers.
//!
//! JSON field names stay camelCase to remain compatible with the generated
//! index and bundle artifacts this layer consumes.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Topic difficulty. Categories with difficulty disabled always report
/// `Medium`; the UI always renders a badge, so this is never absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

/// List-tier topic representation, unique per `(category, id)`.
///
/// `is_completed`/`is_bookmarked` are overlaid from the progress store at
/// read time and are never part of persisted content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicSummary {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_complexity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space_complexity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub companies: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(default)]
    pub is_bookmarked: bool,
}

/// One language-tagged code example. The surrounding map is keyed by the
/// language token (or `subdir_language` for grouped examples); entries carry
/// the token again so a single entry is self-describing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolutionEntry {
    pub language: String,
    pub code: String,
}

/// Per-language probe outcome. Distinguishes "looked and found nothing"
/// from "never looked", which callers collapsing to a map cannot express.
#[derive(Debug, Clone, PartialEq)]
pub enum SolutionLookup {
    Found(SolutionEntry),
    Absent,
}

/// Detail-tier topic representation. The summary tier is embedded whole so
/// the two can never disagree for identical input data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    #[serde(flatten)]
    pub summary: TopicSummary,
    pub description: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub examples: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub solutions: BTreeMap<String, SolutionEntry>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub platform_links: BTreeMap<String, String>,
}

/// User-specific completion state, read from the external progress store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProgressFlags {
    pub is_completed: bool,
    pub is_bookmarked: bool,
}
