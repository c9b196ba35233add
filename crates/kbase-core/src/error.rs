use thiserror::Error;

/// Error taxonomy for the resolution layer.
///
/// Only `ContentRootMissing` is expected to cross the public facade (at
/// construction time); the malformed-artifact variants are recovered
/// locally by the resolvers (skip, fall back, or report not-found), and
/// a missing topic surfaces as `None`, never as an error.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Content root not found: {0}")]
    ContentRootMissing(String),

    #[error("Malformed front-matter in {path}: {reason}")]
    MalformedFrontmatter { path: String, reason: String },

    #[error("Malformed index for category '{category}': {reason}")]
    MalformedIndex { category: String, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
