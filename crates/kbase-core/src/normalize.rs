//! Canonicalization of raw per-category front-matter.
//!
//! Category conventions drifted over time (one used `topics`, another
//! `tags`; complexity fields appear in both camelCase and snake_case), so
//! everything downstream works off the canonical shape produced here.

use crate::category::Category;
use crate::excerpt;
use crate::types::Difficulty;
use serde_json::Value;
use std::collections::BTreeMap;

/// External judge identifiers recognized in raw metadata. Only surfaced
/// for categories whose configuration allows platform links.
const PLATFORM_KEYS: [&str; 4] = ["leetcode", "gfg", "hackerrank", "codeforces"];

/// Canonical topic metadata, independent of which category produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedMeta {
    pub title: String,
    pub difficulty: Difficulty,
    pub time_complexity: Option<String>,
    pub space_complexity: Option<String>,
    pub companies: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
    pub description: String,
    pub examples: Option<Vec<String>>,
    pub solution_languages: Option<Vec<String>>,
    pub platform_links: BTreeMap<String, String>,
}

/// Normalize one topic's raw metadata bag against its category's rules.
/// Never fails: malformed values fall back to safe defaults rather than
/// aborting resolution.
pub fn normalize(
    category: Category,
    topic_id: &str,
    meta: &BTreeMap<String, Value>,
    body: &str,
) -> NormalizedMeta {
    let title = string_field(meta, &["title"]).unwrap_or_else(|| title_from_id(topic_id));
    let description = string_field(meta, &["description"])
        .unwrap_or_else(|| excerpt::generate(body, excerpt::DEFAULT_MAX_LEN));
    NormalizedMeta {
        title,
        difficulty: coerce_difficulty(category, meta),
        time_complexity: string_field(meta, &["timeComplexity", "time_complexity"]),
        space_complexity: string_field(meta, &["spaceComplexity", "space_complexity"]),
        companies: string_list_field(meta, &["companies"]),
        tags: string_list_field(meta, &["tags", "topics"]),
        description,
        examples: string_list_field(meta, &["examples"]),
        solution_languages: string_list_field(meta, &["languages", "solutionLanguages"]),
        platform_links: platform_links(category, meta),
    }
}

/// Difficulty coercion policy. Categories with difficulty disabled always
/// report `Medium`; otherwise only literal easy/hard (case-insensitive)
/// are accepted and anything else, including absence, maps to `Medium`.
pub fn coerce_difficulty(category: Category, meta: &BTreeMap<String, Value>) -> Difficulty {
    if !category.config().difficulty_enabled {
        return Difficulty::Medium;
    }
    match string_field(meta, &["difficulty"]).map(|d| d.to_lowercase()) {
        Some(d) if d == "easy" => Difficulty::Easy,
        Some(d) if d == "hard" => Difficulty::Hard,
        _ => Difficulty::Medium,
    }
}

fn platform_links(category: Category, meta: &BTreeMap<String, Value>) -> BTreeMap<String, String> {
    let mut links = BTreeMap::new();
    if !category.config().platform_links_allowed {
        return links;
    }
    for key in PLATFORM_KEYS {
        if let Some(value) = meta.get(key).and_then(Value::as_str) {
            links.insert(key.to_string(), value.to_string());
        }
    }
    links
}

/// First of `keys` holding a string value.
fn string_field(meta: &BTreeMap<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .find_map(|k| meta.get(*k).and_then(Value::as_str))
        .map(str::to_string)
}

/// First of `keys` holding an explicit array; `None` when none do, since
/// downstream treats "absent" differently from "empty".
fn string_list_field(meta: &BTreeMap<String, Value>, keys: &[&str]) -> Option<Vec<String>> {
    keys.iter()
        .find_map(|k| meta.get(*k).and_then(Value::as_array))
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
}

fn title_from_id(topic_id: &str) -> String {
    topic_id
        .split('-')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn meta_of(value: Value) -> BTreeMap<String, Value> {
        match value {
            Value::Object(map) => map.into_iter().collect(),
            _ => BTreeMap::new(),
        }
    }

    #[test]
    fn difficulty_is_case_insensitive() {
        for raw in ["Easy", "EASY", "easy"] {
            let meta = meta_of(json!({ "difficulty": raw }));
            assert_eq!(coerce_difficulty(Category::Dsa, &meta), Difficulty::Easy);
        }
    }

    #[test]
    fn unknown_difficulty_defaults_to_medium() {
        let meta = meta_of(json!({ "difficulty": "trivial" }));
        assert_eq!(coerce_difficulty(Category::Dsa, &meta), Difficulty::Medium);
        assert_eq!(coerce_difficulty(Category::Dsa, &BTreeMap::new()), Difficulty::Medium);
    }

    #[test]
    fn disabled_category_pins_medium() {
        let meta = meta_of(json!({ "difficulty": "hard" }));
        assert_eq!(coerce_difficulty(Category::Behavioral, &meta), Difficulty::Medium);
    }

    #[test]
    fn topics_and_tags_unify() {
        let meta = meta_of(json!({ "topics": ["array", "hash-table"] }));
        let norm = normalize(Category::Dsa, "two-sum", &meta, "");
        assert_eq!(norm.tags.as_deref(), Some(&["array".to_string(), "hash-table".to_string()][..]));

        let meta = meta_of(json!({ "tags": ["caching"] }));
        let norm = normalize(Category::SystemDesign, "cdn", &meta, "");
        assert_eq!(norm.tags.as_deref(), Some(&["caching".to_string()][..]));
    }

    #[test]
    fn absent_tags_stay_absent() {
        let norm = normalize(Category::Dsa, "two-sum", &BTreeMap::new(), "");
        assert_eq!(norm.tags, None);
    }

    #[test]
    fn platform_links_are_allow_listed() {
        let meta = meta_of(json!({ "leetcode": "two-sum", "gfg": "two-sum-problem" }));
        let dsa = normalize(Category::Dsa, "two-sum", &meta, "");
        assert_eq!(dsa.platform_links.get("leetcode").map(String::as_str), Some("two-sum"));

        let behavioral = normalize(Category::Behavioral, "conflict", &meta, "");
        assert!(behavioral.platform_links.is_empty());
    }

    #[test]
    fn description_falls_back_to_excerpt() {
        let norm = normalize(Category::Dsa, "two-sum", &BTreeMap::new(), "# Two Sum\n\nFind two numbers...");
        assert_eq!(norm.description, "Two Sum Find two numbers...");
    }

    #[test]
    fn title_falls_back_to_humanized_id() {
        let norm = normalize(Category::Dsa, "two-sum", &BTreeMap::new(), "");
        assert_eq!(norm.title, "Two Sum");
    }
}
