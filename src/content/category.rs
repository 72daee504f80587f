//! Content categories

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ContentError;

/// The three kinds of content the site carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentCategory {
    Blog,
    Projects,
    Research,
}

impl ContentCategory {
    /// All categories, in the order featured content is resolved
    pub const ALL: [ContentCategory; 3] = [
        ContentCategory::Blog,
        ContentCategory::Projects,
        ContentCategory::Research,
    ];

    /// Subdirectory of the content root holding this category
    pub fn dir_name(&self) -> &'static str {
        match self {
            ContentCategory::Blog => "blog",
            ContentCategory::Projects => "projects",
            ContentCategory::Research => "research",
        }
    }

    /// Thumbnail used when a record does not set `thumbnailUrl`
    pub fn placeholder_thumbnail(&self) -> String {
        format!("/images/{}-placeholder.jpg", self.dir_name())
    }
}

impl fmt::Display for ContentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

impl FromStr for ContentCategory {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "blog" | "blogs" | "post" | "posts" => Ok(ContentCategory::Blog),
            "project" | "projects" => Ok(ContentCategory::Projects),
            "research" => Ok(ContentCategory::Research),
            other => Err(ContentError::UnknownCategory(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_thumbnail() {
        assert_eq!(
            ContentCategory::Projects.placeholder_thumbnail(),
            "/images/projects-placeholder.jpg"
        );
        assert_eq!(
            ContentCategory::Blog.placeholder_thumbnail(),
            "/images/blog-placeholder.jpg"
        );
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!("posts".parse::<ContentCategory>().unwrap(), ContentCategory::Blog);
        assert_eq!("Project".parse::<ContentCategory>().unwrap(), ContentCategory::Projects);
        assert_eq!("research".parse::<ContentCategory>().unwrap(), ContentCategory::Research);
        assert!("notes".parse::<ContentCategory>().is_err());
    }
}
