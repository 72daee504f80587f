//! Builds typed records from parsed front-matter

use chrono::NaiveDateTime;
use serde::de::DeserializeOwned;
use serde_yaml::Value;

use super::frontmatter::StringList;
use super::record::{
    BlogFields, CategoryFields, ContentDate, ContentRecord, ProjectFields, ResearchFields,
};
use super::{ContentCategory, Metadata};
use crate::helpers;

/// Keys that name derived record fields and may not be set from front-matter
const RESERVED_KEYS: &[&str] = &[
    "id",
    "formattedDate",
    "readingTime",
    "content",
    "bodyMarkdown",
    "bodyHtml",
];

/// Build a complete record for one content file.
///
/// `fallback_date` is used when the front-matter has no `date`. The result
/// depends only on the arguments.
pub fn normalize(
    category: ContentCategory,
    id: &str,
    mut metadata: Metadata,
    body: &str,
    fallback_date: NaiveDateTime,
) -> ContentRecord {
    let title = take_string(&mut metadata, "title").unwrap_or_else(|| "Untitled".to_string());
    let date = match take_string(&mut metadata, "date") {
        Some(raw) => ContentDate::parse(&raw),
        None => ContentDate::from_timestamp(fallback_date),
    };
    let description = take_string(&mut metadata, "description").unwrap_or_default();
    let tags = take_list(&mut metadata, "tags");
    let thumbnail_url = take_string(&mut metadata, "thumbnailUrl")
        .unwrap_or_else(|| category.placeholder_thumbnail());
    let featured = take_field::<bool>(&mut metadata, "featured").unwrap_or(false);

    let fields = match category {
        ContentCategory::Blog => CategoryFields::Blog(BlogFields {
            author: take_string(&mut metadata, "author"),
        }),
        ContentCategory::Projects => CategoryFields::Project(ProjectFields {
            category: take_string(&mut metadata, "category"),
            repo_url: take_string(&mut metadata, "repoUrl"),
            live_url: take_string(&mut metadata, "liveUrl"),
            technologies: take_list(&mut metadata, "technologies"),
        }),
        ContentCategory::Research => CategoryFields::Research(ResearchFields {
            kind: take_field(&mut metadata, "type"),
            authors: take_list(&mut metadata, "authors"),
            venue: take_string(&mut metadata, "venue"),
            status: take_string(&mut metadata, "status"),
            advisor: take_string(&mut metadata, "advisor"),
            arxiv_url: take_string(&mut metadata, "arxivUrl"),
            paper_url: take_string(&mut metadata, "paperUrl"),
        }),
    };

    // Whatever is left passes through, except list fields another category
    // owns or keys that would shadow a derived field.
    metadata.retain(|key, _| {
        let foreign = ContentCategory::ALL
            .iter()
            .filter(|other| **other != category)
            .any(|other| CategoryFields::list_keys(*other).contains(&key.as_str()));
        let reserved = RESERVED_KEYS.contains(&key.as_str());
        if foreign || reserved {
            tracing::warn!("Dropping front-matter key '{}' from {}/{}", key, category, id);
        }
        !foreign && !reserved
    });

    ContentRecord {
        id: id.to_string(),
        title,
        date,
        description,
        tags,
        thumbnail_url,
        reading_time: helpers::estimate_reading_time(body),
        featured,
        body_markdown: body.to_string(),
        body_html: None,
        fields,
        extra: metadata,
    }
}

/// Remove a key and convert its value. A null or mistyped value counts as
/// absent.
fn take_field<T: DeserializeOwned>(metadata: &mut Metadata, key: &str) -> Option<T> {
    let value = metadata.shift_remove(key)?;
    convert(key, value)
}

/// Like `take_field`, but numbers and booleans are read as text
fn take_string(metadata: &mut Metadata, key: &str) -> Option<String> {
    let value = metadata.shift_remove(key)?;
    convert(key, scalar_to_string(value))
}

/// A list of strings; a bare scalar is a one-item list. Null items are
/// skipped and other scalars are read as text.
fn take_list(metadata: &mut Metadata, key: &str) -> Vec<String> {
    let value = match metadata.shift_remove(key) {
        Some(Value::Sequence(items)) => Value::Sequence(
            items
                .into_iter()
                .filter(|item| !item.is_null())
                .map(scalar_to_string)
                .collect(),
        ),
        Some(value) => scalar_to_string(value),
        None => return Vec::new(),
    };
    convert::<StringList>(key, value)
        .map(|list| list.0)
        .unwrap_or_default()
}

fn convert<T: DeserializeOwned>(key: &str, value: Value) -> Option<T> {
    if value.is_null() {
        return None;
    }
    match serde_yaml::from_value(value) {
        Ok(v) => Some(v),
        Err(e) => {
            tracing::warn!("Ignoring front-matter field '{}': {}", key, e);
            None
        }
    }
}

fn scalar_to_string(value: Value) -> Value {
    match value {
        Value::Number(n) => Value::String(n.to_string()),
        Value::Bool(b) => Value::String(b.to_string()),
        other => other,
    }
}
