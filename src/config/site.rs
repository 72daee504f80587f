//! Site configuration (_config.yml)

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::content::FeaturedPage;
use crate::error::Result;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub author: String,
    pub url: String,

    // Directory
    pub content_dir: String,
    pub public_dir: String,

    // Rendering
    #[serde(default)]
    pub highlight: HighlightConfig,

    // Featured content: page -> ordered content ids
    #[serde(default)]
    pub featured: HashMap<FeaturedPage, Vec<String>>,
    #[serde(default)]
    pub featured_limits: FeaturedLimits,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Portfolio".to_string(),
            author: String::new(),
            url: "http://example.com".to_string(),

            content_dir: "content".to_string(),
            public_dir: "public".to_string(),

            highlight: HighlightConfig::default(),

            featured: HashMap::new(),
            featured_limits: FeaturedLimits::default(),

            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML text; an empty document yields defaults
    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: Option<SiteConfig> = serde_yaml::from_str(content)?;
        Ok(config.unwrap_or_default())
    }

    /// Curated content ids for a page, if the page has a list
    pub fn featured_ids(&self, page: FeaturedPage) -> Option<&[String]> {
        self.featured.get(&page).map(Vec::as_slice)
    }
}

/// Code highlighting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    pub enable: bool,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self { enable: true }
    }
}

/// Caps for flag-based featured selection, used when a page has no
/// curated list
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeaturedLimits {
    pub blog: usize,
    pub projects: usize,
    pub research: usize,
}

impl Default for FeaturedLimits {
    fn default() -> Self {
        Self {
            blog: 1,
            projects: 1,
            research: 4,
        }
    }
}
