//! Content loader - scans category directories and builds records

use chrono::{DateTime, NaiveDateTime, Utc};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::normalize::normalize;
use super::{ContentCategory, ContentRecord, FrontMatter};
use crate::error::{ContentError, Result};
use crate::Folio;

/// Extension of content files
const CONTENT_EXTENSION: &str = "md";

/// Loads content records from the content directory
pub struct ContentLoader<'a> {
    folio: &'a Folio,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(folio: &'a Folio) -> Self {
        Self { folio }
    }

    /// Directory holding a category's files
    pub fn category_dir(&self, category: ContentCategory) -> PathBuf {
        self.folio.content_dir.join(category.dir_name())
    }

    /// List the ids of all content files in a category, sorted by id.
    ///
    /// Fails with `RepositoryNotFound` when the category directory is
    /// missing; an existing empty directory yields an empty list.
    pub fn list_ids(&self, category: ContentCategory) -> Result<Vec<String>> {
        let dir = self.existing_category_dir(category)?;

        let mut ids = Vec::new();
        for entry in WalkDir::new(&dir).min_depth(1).max_depth(1).follow_links(true) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("Cannot read entry in {:?}: {}", dir, e);
                    continue;
                }
            };
            let path = entry.path();
            if !path.is_file() || !is_content_file(path) {
                continue;
            }
            let Some(id) = path.file_stem().and_then(|s| s.to_str()) else {
                tracing::warn!("Skipping file with non UTF-8 name: {:?}", path);
                continue;
            };
            if slug::slugify(id) != id {
                tracing::warn!("Content id '{}' in {} is not URL-safe", id, category);
            }
            ids.push(id.to_string());
        }

        ids.sort();
        Ok(ids)
    }

    /// Load every record in a category, newest first.
    ///
    /// Files that cannot be read are skipped with a warning. Records with
    /// the same date are ordered by id.
    pub fn load_all(&self, category: ContentCategory) -> Result<Vec<ContentRecord>> {
        let dir = self.category_dir(category);
        let mut records = Vec::new();

        for id in self.list_ids(category)? {
            let path = content_path(&dir, &id);
            match self.load_record(category, &id, &path) {
                Ok(record) => records.push(record),
                Err(e) => {
                    tracing::warn!("Failed to load {:?}: {}", path, e);
                }
            }
        }

        records.sort_by(|a, b| {
            b.date
                .timestamp()
                .cmp(&a.date.timestamp())
                .then_with(|| a.id.cmp(&b.id))
        });

        tracing::debug!("Loaded {} {} records", records.len(), category);
        Ok(records)
    }

    /// Load one record with its body rendered to HTML.
    ///
    /// Returns `Ok(None)` when no file exists for the id or the file cannot
    /// be read, matching what `load_all` skips.
    pub fn load_one(&self, category: ContentCategory, id: &str) -> Result<Option<ContentRecord>> {
        let dir = self.existing_category_dir(category)?;
        if !is_valid_id(id) {
            tracing::debug!("Rejecting content id {:?}", id);
            return Ok(None);
        }

        let path = content_path(&dir, id);
        let mut record = match self.load_record(category, id, &path) {
            Ok(record) => record,
            Err(ContentError::Io(e)) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                tracing::warn!("Failed to load {:?}: {}", path, e);
                return Ok(None);
            }
        };

        let html = match self.folio.renderer().render(&record.body_markdown) {
            Ok(html) => html,
            Err(e) => {
                tracing::error!("Failed to render {}/{}: {}", category, id, e);
                String::new()
            }
        };
        record.body_html = Some(html);

        Ok(Some(record))
    }

    /// Read, parse and normalize a single file
    fn load_record(&self, category: ContentCategory, id: &str, path: &Path) -> Result<ContentRecord> {
        let _span = tracing::debug_span!("load", path = %path.display()).entered();

        let content = fs::read_to_string(path)?;
        let (metadata, body) = FrontMatter::parse(&content);
        let fallback_date = file_modified(path).unwrap_or_else(|| Utc::now().naive_utc());

        Ok(normalize(category, id, metadata, body, fallback_date))
    }

    fn existing_category_dir(&self, category: ContentCategory) -> Result<PathBuf> {
        let dir = self.category_dir(category);
        if dir.is_dir() {
            Ok(dir)
        } else {
            Err(ContentError::RepositoryNotFound {
                category,
                path: dir,
            })
        }
    }
}

/// Check if a file is a content file
fn is_content_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == CONTENT_EXTENSION)
        .unwrap_or(false)
}

/// Ids are bare file stems; anything that could leave the directory is
/// not an id
fn is_valid_id(id: &str) -> bool {
    !id.is_empty()
        && id != "."
        && id != ".."
        && !id.contains(['/', '\\', '\0'])
}

fn content_path(dir: &Path, id: &str) -> PathBuf {
    dir.join(format!("{}.{}", id, CONTENT_EXTENSION))
}

/// File modification time in UTC
fn file_modified(path: &Path) -> Option<NaiveDateTime> {
    let modified = fs::metadata(path).ok()?.modified().ok()?;
    Some(DateTime::<Utc>::from(modified).naive_utc())
}
