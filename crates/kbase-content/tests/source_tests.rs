use std::fs;
use std::path::Path;
use tempfile::TempDir;

use kbase_content::{ContentSource, GeneratedStore};
use kbase_core::category::Category;
use kbase_core::error::Error;
use kbase_core::types::SolutionLookup;

fn write(path: &Path, contents: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

#[test]
fn missing_root_is_fatal() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("nope");
    assert!(matches!(
        ContentSource::new(missing),
        Err(Error::ContentRootMissing(_))
    ));
}

#[test]
fn listing_skips_code_subtree_and_foreign_extensions() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    write(&root.join("dsa/two-sum.md"), "---\ntitle: Two Sum\n---\nbody");
    write(&root.join("dsa/notes.txt"), "not content");
    write(&root.join("dsa/code/two-sum/solution.py"), "def f(): pass");

    let source = ContentSource::new(root.to_path_buf()).unwrap();
    let files = source.list_topic_files(Category::Dsa);
    assert_eq!(files.len(), 1);
    assert_eq!(source.topic_id_for(Category::Dsa, &files[0]), "two-sum");
}

#[tokio::test]
async fn read_topic_distinguishes_missing_from_malformed() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    write(&root.join("dsa/broken.md"), "---\ntitle: X\nno closing fence");

    let source = ContentSource::new(root.to_path_buf()).unwrap();
    assert!(source
        .read_topic(Category::Dsa, "does-not-exist")
        .await
        .unwrap()
        .is_none());
    assert!(matches!(
        source.read_topic(Category::Dsa, "broken").await,
        Err(Error::MalformedFrontmatter { .. })
    ));
}

#[tokio::test]
async fn probing_reports_found_and_absent_explicitly() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    write(&root.join("dsa/code/two-sum/solution.py"), "def two_sum(): ...");

    let source = ContentSource::new(root.to_path_buf()).unwrap();
    match source.probe_solution(Category::Dsa, "two-sum", None, "py").await {
        SolutionLookup::Found(entry) => {
            assert_eq!(entry.language, "py");
            assert!(entry.code.contains("two_sum"));
        }
        SolutionLookup::Absent => panic!("expected a hit for py"),
    }
    assert_eq!(
        source.probe_solution(Category::Dsa, "two-sum", None, "cpp").await,
        SolutionLookup::Absent
    );
}

#[test]
fn solution_groups_lists_named_subdirectories() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    write(
        &root.join("design-pattern/code/adapter/object-adapter/solution.py"),
        "class ObjectAdapter: ...",
    );
    write(
        &root.join("design-pattern/code/adapter/class-adapter/solution.py"),
        "class ClassAdapter: ...",
    );

    let source = ContentSource::new(root.to_path_buf()).unwrap();
    let groups = source.solution_groups(Category::DesignPattern, "adapter");
    assert_eq!(groups, vec!["class-adapter", "object-adapter"]);
    assert!(source.solution_groups(Category::DesignPattern, "facade").is_empty());
}

#[tokio::test]
async fn index_loader_accepts_empty_and_rejects_non_arrays() {
    let tmp = TempDir::new().unwrap();
    let generated = GeneratedStore::new(tmp.path().to_path_buf());

    write(&tmp.path().join("dsa-index.json"), "[]");
    assert!(generated.load_index(Category::Dsa).await.unwrap().is_empty());

    write(&tmp.path().join("system-design-index.json"), "{\"oops\": true}");
    assert!(matches!(
        generated.load_index(Category::SystemDesign).await,
        Err(Error::MalformedIndex { .. })
    ));

    // Missing file reports the same recoverable condition.
    assert!(matches!(
        generated.load_index(Category::DesignPattern).await,
        Err(Error::MalformedIndex { .. })
    ));
}

#[tokio::test]
async fn bundle_and_solutions_file_lookups_degrade_to_none() {
    let tmp = TempDir::new().unwrap();
    let generated = GeneratedStore::new(tmp.path().to_path_buf());

    write(
        &tmp.path().join("dsa-content.json"),
        r#"{ "two-sum": { "solutions": { "py": "def two_sum(): ..." } } }"#,
    );
    let entry = generated.bundle_entry(Category::Dsa, "two-sum").await.unwrap();
    assert_eq!(entry.solutions.get("py").map(String::as_str), Some("def two_sum(): ..."));
    assert!(generated.bundle_entry(Category::Dsa, "three-sum").await.is_none());

    write(
        &tmp.path().join("solutions/dsa/merge-intervals.json"),
        r#"{ "java": "class Solution {}" }"#,
    );
    let map = generated.solutions_file(Category::Dsa, "merge-intervals").await.unwrap();
    assert_eq!(map.get("java").map(String::as_str), Some("class Solution {}"));
    assert!(generated.solutions_file(Category::Dsa, "two-sum").await.is_none());

    write(&tmp.path().join("ood-content.json"), "not json at all");
    assert!(generated.bundle_entry(Category::Ood, "parking-lot").await.is_none());
}
