//! Access to the category-partitioned tree of annotated content files.
//!
//! Layout (fixed by the generator that produces the tree):
//!   `<root>/<category>/<id>.<ext>` for topic files,
//!   `<root>/<category>/code/<id>/solution.<lang>` for solutions, with an
//!   optional extra grouping level for multi-file examples.

use kbase_core::category::Category;
use kbase_core::error::{Error, Result};
use kbase_core::frontmatter::{self, RawDocument};
use kbase_core::slug;
use kbase_core::types::{SolutionEntry, SolutionLookup};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Language tokens probed when a topic does not declare its own list.
/// Matches the solution-file extensions the generator emits.
pub const DEFAULT_LANGUAGES: [&str; 4] = ["py", "cpp", "java", "js"];

/// Handle on the content tree root. Construction fails if the root does
/// not exist; everything past that degrades per-file instead.
pub struct ContentSource {
    root: PathBuf,
}

impl ContentSource {
    pub fn new(root: PathBuf) -> Result<Self> {
        if !root.is_dir() {
            return Err(Error::ContentRootMissing(root.display().to_string()));
        }
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn category_dir(&self, category: Category) -> PathBuf {
        self.root.join(category.slug())
    }

    fn topic_path(&self, category: Category, topic_id: &str) -> PathBuf {
        self.category_dir(category)
            .join(format!("{topic_id}.{}", category.config().content_ext))
    }

    fn code_dir(&self, category: Category, topic_id: &str) -> PathBuf {
        self.category_dir(category).join("code").join(topic_id)
    }

    /// Enumerate the category's content files, sorted by path for a
    /// deterministic scan order. The `code/` subtree holds solutions, not
    /// topics, and is excluded.
    pub fn list_topic_files(&self, category: Category) -> Vec<PathBuf> {
        let dir = self.category_dir(category);
        let ext = category.config().content_ext;
        let mut files = Vec::new();
        for entry in walkdir::WalkDir::new(&dir)
            .into_iter()
            .filter_entry(|e| e.file_name() != "code")
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
        {
            let path = entry.path();
            if path.extension().and_then(|s| s.to_str()) == Some(ext) {
                files.push(path.to_path_buf());
            }
        }
        files.sort();
        files
    }

    /// Topic id for a scanned content file, per the category's extension
    /// convention.
    pub fn topic_id_for(&self, category: Category, path: &Path) -> String {
        slug::topic_id_from_path(&path.to_string_lossy(), category.config().content_ext)
    }

    /// Read and split one topic's content file. `Ok(None)` when the file
    /// does not exist; malformed front-matter is an error the caller
    /// downgrades (skip during listing, not-found for single resolution).
    pub async fn read_topic(&self, category: Category, topic_id: &str) -> Result<Option<RawDocument>> {
        let path = self.topic_path(category, topic_id);
        self.read_document(&path).await
    }

    /// Read and split an already-located content file.
    pub async fn read_document(&self, path: &Path) -> Result<Option<RawDocument>> {
        let text = match tokio::fs::read_to_string(path).await {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(Error::Io(e)),
        };
        frontmatter::split_document(&text)
            .map(Some)
            .map_err(|e| Error::MalformedFrontmatter {
                path: path.display().to_string(),
                reason: e.to_string(),
            })
    }

    /// Probe one conventionally-named solution file. A missing file is
    /// `Absent`, not an error; unreadable files are logged and treated
    /// the same so one bad language never poisons the rest of the map.
    pub async fn probe_solution(
        &self,
        category: Category,
        topic_id: &str,
        group: Option<&str>,
        language: &str,
    ) -> SolutionLookup {
        let mut path = self.code_dir(category, topic_id);
        if let Some(group) = group {
            path = path.join(group);
        }
        path = path.join(format!("solution.{language}"));
        match tokio::fs::read_to_string(&path).await {
            Ok(code) => SolutionLookup::Found(SolutionEntry {
                language: language.to_string(),
                code,
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => SolutionLookup::Absent,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "unreadable solution file, skipping");
                SolutionLookup::Absent
            }
        }
    }

    /// Named example subdirectories under a topic's code dir, used by
    /// categories with grouped multi-file solutions. Empty when the code
    /// dir is missing or flat.
    pub fn solution_groups(&self, category: Category, topic_id: &str) -> Vec<String> {
        let dir = self.code_dir(category, topic_id);
        let mut groups = Vec::new();
        if let Ok(entries) = std::fs::read_dir(&dir) {
            for entry in entries.flatten() {
                if entry.file_type().map(|t| t.is_dir()).unwrap_or(false) {
                    groups.push(entry.file_name().to_string_lossy().to_string());
                }
            }
        }
        groups.sort();
        groups
    }
}
