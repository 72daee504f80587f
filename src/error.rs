//! Error types for content loading

use std::path::PathBuf;

use thiserror::Error;

use crate::content::ContentCategory;

/// Result type alias using `ContentError`
pub type Result<T> = std::result::Result<T, ContentError>;

/// Errors raised by the content layer
///
/// Only structural problems reach callers. Per-file problems
/// (`MalformedFrontmatter`, `Rendering`) are recovered where they occur
/// and logged.
#[derive(Error, Debug)]
pub enum ContentError {
    /// The storage directory for a category does not exist
    #[error("content directory for {category} not found: {path:?}")]
    RepositoryNotFound {
        category: ContentCategory,
        path: PathBuf,
    },

    /// A frontmatter block was present but could not be parsed
    #[error("malformed front-matter: {0}")]
    MalformedFrontmatter(String),

    /// Markdown could not be converted to HTML
    #[error("rendering failed: {0}")]
    Rendering(String),

    /// Site configuration could not be parsed
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("unknown content category: {0}")]
    UnknownCategory(String),

    #[error("unknown featured page: {0}")]
    UnknownPage(String),

    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_not_found_message() {
        let err = ContentError::RepositoryNotFound {
            category: ContentCategory::Research,
            path: PathBuf::from("content/research"),
        };
        let msg = err.to_string();
        assert!(msg.contains("research"));
        assert!(msg.contains("content/research"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: ContentError = io_err.into();
        assert!(err.to_string().starts_with("IO error"));
    }
}
