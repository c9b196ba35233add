use kbase_core::category::Category;
use kbase_core::types::{Difficulty, Topic, TopicSummary};

#[test]
fn category_slugs_round_trip() {
    for category in Category::ALL {
        assert_eq!(Category::from_slug(category.slug()), Some(category));
    }
    assert_eq!(Category::from_slug("dsa"), Some(Category::Dsa));
    assert_eq!(Category::from_slug("design-pattern"), Some(Category::DesignPattern));
    assert_eq!(Category::from_slug("frontend"), None);
}

#[test]
fn every_category_has_consistent_config() {
    for category in Category::ALL {
        let cfg = category.config();
        assert!(!cfg.slug.is_empty());
        assert!(cfg.content_ext == "md" || cfg.content_ext == "mdx");
        // Grouped solution layouts only make sense where solutions exist.
        if cfg.grouped_solutions {
            assert!(cfg.has_solutions);
        }
    }
}

#[test]
fn difficulty_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Difficulty::Easy).unwrap(), "\"easy\"");
    assert_eq!(serde_json::to_string(&Difficulty::Medium).unwrap(), "\"medium\"");
    let parsed: Difficulty = serde_json::from_str("\"hard\"").unwrap();
    assert_eq!(parsed, Difficulty::Hard);
}

#[test]
fn summary_parses_generated_index_shape() {
    // Shape emitted by the export pipeline: camelCase, progress flags and
    // most optional fields absent.
    let raw = r#"{
        "id": "two-sum",
        "title": "Two Sum",
        "difficulty": "easy",
        "timeComplexity": "O(n)",
        "tags": ["array", "hash-table"]
    }"#;
    let summary: TopicSummary = serde_json::from_str(raw).unwrap();
    assert_eq!(summary.id, "two-sum");
    assert_eq!(summary.difficulty, Difficulty::Easy);
    assert_eq!(summary.time_complexity.as_deref(), Some("O(n)"));
    assert_eq!(summary.space_complexity, None);
    assert!(!summary.is_completed);
    assert!(!summary.is_bookmarked);
}

#[test]
fn topic_json_stays_flat() {
    // The detail tier flattens its summary so generated-bundle consumers
    // see one flat object, not a nested "summary" field.
    let summary: TopicSummary = serde_json::from_str(
        r#"{ "id": "cdn", "title": "CDN Design" }"#,
    )
    .unwrap();
    let topic = Topic {
        summary,
        description: "Edge caching.".to_string(),
        content: "# CDN Design".to_string(),
        examples: None,
        solutions: Default::default(),
        platform_links: Default::default(),
    };
    let value = serde_json::to_value(&topic).unwrap();
    assert_eq!(value["id"], "cdn");
    assert_eq!(value["title"], "CDN Design");
    assert!(value.get("summary").is_none());
}
