//! The closed set of content categories and their static configuration.
//!
//! Every component consults `Category::config()` instead of branching on
//! category names, so schema differences between categories live in exactly
//! one table.

use serde::{Deserialize, Serialize};

/// One fixed content domain. The set is closed; adding a category means
/// adding a variant and a row in `config()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Dsa,
    SystemDesign,
    Behavioral,
    Ood,
    DesignPattern,
}

/// Static per-category schema configuration.
///
/// - `slug`: directory name and cache-key prefix for the category
/// - `content_ext`: the annotated-file extension this category uses
/// - `difficulty_enabled`: whether difficulty is a meaningful axis;
///   when false every topic reports `medium`
/// - `has_solutions`: whether code solutions exist for this category
/// - `has_prebuilt_index`: whether a generated index artifact is expected
/// - `platform_links_allowed`: whether external judge identifiers
///   (leetcode, gfg, ...) may surface in normalized metadata
/// - `grouped_solutions`: whether solution files may sit one level deeper
///   under a named example subdirectory
#[derive(Debug, Clone, Copy)]
pub struct CategoryConfig {
    pub slug: &'static str,
    pub content_ext: &'static str,
    pub difficulty_enabled: bool,
    pub has_solutions: bool,
    pub has_prebuilt_index: bool,
    pub platform_links_allowed: bool,
    pub grouped_solutions: bool,
}

const DSA: CategoryConfig = CategoryConfig {
    slug: "dsa",
    content_ext: "md",
    difficulty_enabled: true,
    has_solutions: true,
    has_prebuilt_index: true,
    platform_links_allowed: true,
    grouped_solutions: false,
};

const SYSTEM_DESIGN: CategoryConfig = CategoryConfig {
    slug: "system-design",
    content_ext: "mdx",
    difficulty_enabled: true,
    has_solutions: false,
    has_prebuilt_index: true,
    platform_links_allowed: false,
    grouped_solutions: false,
};

const BEHAVIORAL: CategoryConfig = CategoryConfig {
    slug: "behavioral",
    content_ext: "md",
    difficulty_enabled: false,
    has_solutions: false,
    has_prebuilt_index: false,
    platform_links_allowed: false,
    grouped_solutions: false,
};

const OOD: CategoryConfig = CategoryConfig {
    slug: "ood",
    content_ext: "mdx",
    difficulty_enabled: true,
    has_solutions: true,
    has_prebuilt_index: false,
    platform_links_allowed: false,
    grouped_solutions: false,
};

const DESIGN_PATTERN: CategoryConfig = CategoryConfig {
    slug: "design-pattern",
    content_ext: "md",
    difficulty_enabled: false,
    has_solutions: true,
    has_prebuilt_index: true,
    platform_links_allowed: false,
    grouped_solutions: true,
};

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Dsa,
        Category::SystemDesign,
        Category::Behavioral,
        Category::Ood,
        Category::DesignPattern,
    ];

    pub fn config(self) -> &'static CategoryConfig {
        match self {
            Category::Dsa => &DSA,
            Category::SystemDesign => &SYSTEM_DESIGN,
            Category::Behavioral => &BEHAVIORAL,
            Category::Ood => &OOD,
            Category::DesignPattern => &DESIGN_PATTERN,
        }
    }

    pub fn slug(self) -> &'static str {
        self.config().slug
    }

    pub fn from_slug(slug: &str) -> Option<Category> {
        Category::ALL.iter().copied().find(|c| c.slug() == slug)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}
