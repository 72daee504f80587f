//! folio-rs: content layer for a portfolio site
//!
//! Blog posts, projects and research items are markdown files with
//! front-matter under `content/{blog,projects,research}/`. This crate reads
//! them into typed records, renders single items to HTML and resolves the
//! curated featured lists that the presentation layer displays.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod helpers;

use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

pub use content::{ContentCategory, ContentRecord, FeaturedContent, FeaturedPage};
pub use error::{ContentError, Result};
pub use helpers::estimate_reading_time;

use content::featured;
use content::loader::ContentLoader;
use content::MarkdownRenderer;

/// A portfolio site rooted at a directory
#[derive(Clone)]
pub struct Folio {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Content root holding one directory per category
    pub content_dir: PathBuf,
    /// Output directory for exported data
    pub public_dir: PathBuf,
    /// Built on first render, shared by clones
    renderer: Arc<OnceLock<MarkdownRenderer>>,
}

impl Folio {
    /// Create a new instance from a directory, reading `_config.yml` if present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Create an instance with an explicit configuration
    pub fn with_config(base_dir: PathBuf, config: config::SiteConfig) -> Self {
        let content_dir = base_dir.join(&config.content_dir);
        let public_dir = base_dir.join(&config.public_dir);

        Self {
            config,
            base_dir,
            content_dir,
            public_dir,
            renderer: Arc::new(OnceLock::new()),
        }
    }

    /// The markdown renderer, loading syntax definitions once per site
    pub(crate) fn renderer(&self) -> &MarkdownRenderer {
        self.renderer
            .get_or_init(|| MarkdownRenderer::with_options(self.config.highlight.enable))
    }

    /// All records of a category, newest first, without rendered HTML
    pub fn list_content(&self, category: ContentCategory) -> Result<Vec<ContentRecord>> {
        ContentLoader::new(self).load_all(category)
    }

    /// One record with its body rendered to HTML, or `None` if the id does
    /// not exist
    pub fn get_content_by_id(
        &self,
        category: ContentCategory,
        id: &str,
    ) -> Result<Option<ContentRecord>> {
        ContentLoader::new(self).load_one(category, id)
    }

    /// Ids of every item in a category, for generating routes ahead of time
    pub fn list_content_paths(&self, category: ContentCategory) -> Result<Vec<String>> {
        ContentLoader::new(self).list_ids(category)
    }

    /// Featured records for a page
    pub fn featured_content(&self, page: FeaturedPage) -> Result<FeaturedContent> {
        let loader = ContentLoader::new(self);
        let mut listings = Vec::with_capacity(ContentCategory::ALL.len());
        for category in ContentCategory::ALL {
            listings.push((category, loader.load_all(category)?));
        }

        let featured = match self.config.featured_ids(page) {
            Some(ids) => featured::select_curated(ids, &listings),
            None => {
                tracing::debug!("No curated list for {}, using featured flags", page);
                featured::select_flagged(&listings, &self.config.featured_limits)
            }
        };

        Ok(featured)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn site(config: &str) -> (TempDir, Folio) {
        let tmp = TempDir::new().unwrap();
        for category in ContentCategory::ALL {
            fs::create_dir_all(tmp.path().join("content").join(category.dir_name())).unwrap();
        }
        fs::write(tmp.path().join("_config.yml"), config).unwrap();

        let files = [
            ("blog/hello.md", "---\ntitle: Hello\ndate: 2023-03-15\nfeatured: true\n---\nHi there.\n"),
            ("blog/plain.md", "Just markdown, no metadata.\n"),
            ("projects/tracker.md", "---\ntitle: Tracker\ndate: 2023-05-01\n---\n```rust\nfn main() {}\n```\n"),
            ("research/sparse.md", "---\ntitle: Sparse\ndate: 2022-10-10\ntype: ongoing\nfeatured: true\n---\n"),
        ];
        for (path, content) in files {
            fs::write(tmp.path().join("content").join(path), content).unwrap();
        }

        let folio = Folio::new(tmp.path()).unwrap();
        (tmp, folio)
    }

    #[test]
    fn test_defaults_through_retrieval() {
        let (_tmp, folio) = site("");
        let record = folio
            .get_content_by_id(ContentCategory::Blog, "plain")
            .unwrap()
            .unwrap();
        assert_eq!(record.title, "Untitled");
        assert!(record.tags.is_empty());
        assert_eq!(record.thumbnail_url, "/images/blog-placeholder.jpg");
        assert_eq!(record.body_markdown, "Just markdown, no metadata.\n");
        assert!(record.extra.is_empty());
    }

    #[test]
    fn test_formatted_date() {
        let (_tmp, folio) = site("");
        let records = folio.list_content(ContentCategory::Blog).unwrap();
        let hello = records.iter().find(|r| r.id == "hello").unwrap();
        assert_eq!(hello.date.formatted(), "March 15, 2023");
    }

    #[test]
    fn test_get_content_by_id_is_idempotent() {
        let (_tmp, folio) = site("");
        let a = folio.get_content_by_id(ContentCategory::Projects, "tracker").unwrap();
        let b = folio.get_content_by_id(ContentCategory::Projects, "tracker").unwrap();
        assert!(a.is_some());
        assert_eq!(a, b);
        assert!(a.unwrap().body_html.unwrap().contains("language-rust"));
    }

    #[test]
    fn test_renderer_shared_across_lookups() {
        let (_tmp, folio) = site("");
        folio.get_content_by_id(ContentCategory::Blog, "hello").unwrap();
        let first: *const MarkdownRenderer = folio.renderer();
        folio.get_content_by_id(ContentCategory::Projects, "tracker").unwrap();
        assert!(std::ptr::eq(first, folio.renderer()));
        assert!(std::ptr::eq(first, folio.clone().renderer()));
    }

    #[test]
    fn test_get_content_by_id_missing() {
        let (_tmp, folio) = site("");
        assert!(folio
            .get_content_by_id(ContentCategory::Research, "ghost")
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_list_content_paths() {
        let (tmp, folio) = site("");
        assert_eq!(
            folio.list_content_paths(ContentCategory::Blog).unwrap(),
            vec!["hello", "plain"]
        );
        fs::remove_dir_all(tmp.path().join("content/research")).unwrap();
        assert!(matches!(
            folio.list_content_paths(ContentCategory::Research),
            Err(ContentError::RepositoryNotFound { .. })
        ));
    }

    #[test]
    fn test_featured_curated_with_ghost_id() {
        let (_tmp, folio) = site("featured:\n  home: [tracker, ghost-id]\n");
        let featured = folio.featured_content(FeaturedPage::Home).unwrap();
        assert!(featured.blogs.is_empty());
        assert!(featured.research.is_empty());
        assert_eq!(featured.projects.len(), 1);
        assert_eq!(featured.projects[0].id, "tracker");
    }

    #[test]
    fn test_featured_falls_back_to_flags() {
        let (_tmp, folio) = site("featured:\n  home: [tracker]\n");
        let featured = folio.featured_content(FeaturedPage::Research).unwrap();
        assert_eq!(featured.blogs.len(), 1);
        assert_eq!(featured.blogs[0].id, "hello");
        assert!(featured.projects.is_empty());
        assert_eq!(featured.research[0].id, "sparse");
    }

    #[test]
    fn test_featured_fails_on_missing_category() {
        let (tmp, folio) = site("");
        fs::remove_dir_all(tmp.path().join("content/projects")).unwrap();
        assert!(folio.featured_content(FeaturedPage::Home).is_err());
    }

    #[test]
    fn test_bad_config_is_an_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("_config.yml"), "featured: [oops\n").unwrap();
        assert!(matches!(Folio::new(tmp.path()), Err(ContentError::Config(_))));
    }
}
