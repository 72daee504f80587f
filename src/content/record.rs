//! Content record models

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{ContentCategory, Metadata};
use crate::helpers;

/// A record's date together with its human-readable form.
///
/// Both strings are fixed at construction so `formattedDate` can never
/// drift from `date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentDate {
    date: String,
    formatted_date: String,
    #[serde(skip)]
    timestamp: Option<NaiveDateTime>,
}

impl ContentDate {
    /// Build from a front-matter date string.
    ///
    /// An unrecognised string is kept verbatim and also used as the
    /// formatted form; such dates sort after every parsed one.
    pub fn parse(raw: &str) -> Self {
        let timestamp = helpers::parse_date_string(raw);
        let formatted_date = match &timestamp {
            Some(ts) => helpers::full_date(ts),
            None => raw.to_string(),
        };
        Self {
            date: raw.to_string(),
            formatted_date,
            timestamp,
        }
    }

    /// Build from a timestamp, recording it in ISO 8601 form
    pub fn from_timestamp(timestamp: NaiveDateTime) -> Self {
        Self {
            date: helpers::iso_date(&timestamp),
            formatted_date: helpers::full_date(&timestamp),
            timestamp: Some(timestamp),
        }
    }

    /// The date as written (or as synthesized)
    pub fn as_str(&self) -> &str {
        &self.date
    }

    /// Human-readable form, e.g. "March 15, 2023"
    pub fn formatted(&self) -> &str {
        &self.formatted_date
    }

    /// Parsed timestamp, if the date was recognised
    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        self.timestamp
    }
}

/// Research item kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResearchKind {
    Publication,
    Presentation,
    Ongoing,
}

/// Blog-specific fields
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BlogFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

/// Project-specific fields
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    pub technologies: Vec<String>,
}

/// Research-specific fields
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResearchFields {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<ResearchKind>,
    pub authors: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advisor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arxiv_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paper_url: Option<String>,
}

/// Fields that only exist for one category
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CategoryFields {
    Blog(BlogFields),
    Project(ProjectFields),
    Research(ResearchFields),
}

impl CategoryFields {
    /// List-valued front-matter keys owned by a category's schema. They
    /// never appear on records of another category.
    pub fn list_keys(category: ContentCategory) -> &'static [&'static str] {
        match category {
            ContentCategory::Blog => &[],
            ContentCategory::Projects => &["technologies"],
            ContentCategory::Research => &["authors"],
        }
    }

    pub fn category(&self) -> ContentCategory {
        match self {
            CategoryFields::Blog(_) => ContentCategory::Blog,
            CategoryFields::Project(_) => ContentCategory::Projects,
            CategoryFields::Research(_) => ContentCategory::Research,
        }
    }
}

/// A blog post, project or research item
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentRecord {
    /// File name without extension; unique within its category
    pub id: String,

    pub title: String,

    #[serde(flatten)]
    pub date: ContentDate,

    pub description: String,

    /// Presentation order, as written
    pub tags: Vec<String>,

    pub thumbnail_url: String,

    pub reading_time: String,

    /// Legacy per-item featured flag
    pub featured: bool,

    /// Markdown body, always present
    pub body_markdown: String,

    /// Rendered body, only for single-item retrieval
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_html: Option<String>,

    #[serde(flatten)]
    pub fields: CategoryFields,

    /// Unrecognised front-matter keys, in document order
    #[serde(flatten)]
    pub extra: Metadata,
}

impl ContentRecord {
    pub fn category(&self) -> ContentCategory {
        self.fields.category()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::normalize::normalize;

    fn fallback() -> NaiveDateTime {
        helpers::parse_date_string("2020-01-01").unwrap()
    }

    #[test]
    fn test_content_date_parse() {
        let date = ContentDate::parse("2023-03-15");
        assert_eq!(date.as_str(), "2023-03-15");
        assert_eq!(date.formatted(), "March 15, 2023");
        assert!(date.timestamp().is_some());
    }

    #[test]
    fn test_content_date_unrecognised() {
        let date = ContentDate::parse("Spring 2021");
        assert_eq!(date.formatted(), "Spring 2021");
        assert!(date.timestamp().is_none());
    }

    #[test]
    fn test_serialized_keys() {
        let content = "---\ntitle: T\ndate: 2023-03-15\nslides: deck.pdf\n---\nbody";
        let (meta, body) = crate::content::FrontMatter::parse(content);
        let record = normalize(ContentCategory::Blog, "t", meta, body, fallback());
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["id"], "t");
        assert_eq!(json["date"], "2023-03-15");
        assert_eq!(json["formattedDate"], "March 15, 2023");
        assert_eq!(json["thumbnailUrl"], "/images/blog-placeholder.jpg");
        assert_eq!(json["readingTime"], "1 min read");
        assert_eq!(json["bodyMarkdown"], "body");
        assert_eq!(json["slides"], "deck.pdf");
        assert!(json.get("bodyHtml").is_none());
        assert!(json.get("author").is_none());
    }

    #[test]
    fn test_category_isolation() {
        let research = normalize(ContentCategory::Research, "r", Metadata::new(), "", fallback());
        let json = serde_json::to_value(&research).unwrap();
        assert!(json.get("technologies").is_none());
        assert!(json.get("authors").is_some());

        let project = normalize(ContentCategory::Projects, "p", Metadata::new(), "", fallback());
        let json = serde_json::to_value(&project).unwrap();
        assert!(json.get("authors").is_none());
        assert!(json.get("technologies").is_some());
    }
}
