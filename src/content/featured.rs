//! Featured content selection
//!
//! A page's featured items come from its curated id list in `_config.yml`.
//! Pages without a list fall back to records flagged `featured: true`,
//! newest first, capped per category by `featured_limits`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{ContentCategory, ContentRecord};
use crate::config::FeaturedLimits;
use crate::error::ContentError;

/// Pages that show featured content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeaturedPage {
    Home,
    Blog,
    Research,
}

impl FeaturedPage {
    pub const ALL: [FeaturedPage; 3] = [
        FeaturedPage::Home,
        FeaturedPage::Blog,
        FeaturedPage::Research,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FeaturedPage::Home => "home",
            FeaturedPage::Blog => "blog",
            FeaturedPage::Research => "research",
        }
    }
}

impl fmt::Display for FeaturedPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FeaturedPage {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "home" | "index" => Ok(FeaturedPage::Home),
            "blog" => Ok(FeaturedPage::Blog),
            "research" => Ok(FeaturedPage::Research),
            other => Err(ContentError::UnknownPage(other.to_string())),
        }
    }
}

/// Featured records grouped by category
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FeaturedContent {
    pub blogs: Vec<ContentRecord>,
    pub projects: Vec<ContentRecord>,
    pub research: Vec<ContentRecord>,
}

impl FeaturedContent {
    pub fn get(&self, category: ContentCategory) -> &[ContentRecord] {
        match category {
            ContentCategory::Blog => &self.blogs,
            ContentCategory::Projects => &self.projects,
            ContentCategory::Research => &self.research,
        }
    }

    fn get_mut(&mut self, category: ContentCategory) -> &mut Vec<ContentRecord> {
        match category {
            ContentCategory::Blog => &mut self.blogs,
            ContentCategory::Projects => &mut self.projects,
            ContentCategory::Research => &mut self.research,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.blogs.is_empty() && self.projects.is_empty() && self.research.is_empty()
    }
}

/// Pick records whose ids appear in `ids`, in list order.
///
/// `listings` holds each category's full listing. Ids found nowhere are
/// skipped; an id found in several categories appears in each.
pub fn select_curated(
    ids: &[String],
    listings: &[(ContentCategory, Vec<ContentRecord>)],
) -> FeaturedContent {
    let mut featured = FeaturedContent::default();

    for id in ids {
        let mut found = false;
        for (category, records) in listings {
            if let Some(record) = records.iter().find(|r| &r.id == id) {
                featured.get_mut(*category).push(record.clone());
                found = true;
            }
        }
        if !found {
            tracing::warn!("Featured id '{}' does not match any content", id);
        }
    }

    featured
}

/// Pick flagged records, keeping listing order (newest first) and the
/// per-category caps
pub fn select_flagged(
    listings: &[(ContentCategory, Vec<ContentRecord>)],
    limits: &FeaturedLimits,
) -> FeaturedContent {
    let mut featured = FeaturedContent::default();

    for (category, records) in listings {
        let limit = match category {
            ContentCategory::Blog => limits.blog,
            ContentCategory::Projects => limits.projects,
            ContentCategory::Research => limits.research,
        };
        featured.get_mut(*category).extend(
            records
                .iter()
                .filter(|r| r.featured)
                .take(limit)
                .cloned(),
        );
    }

    featured
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::normalize::normalize;
    use crate::content::{FrontMatter, Metadata};
    use crate::helpers::parse_date_string;

    fn record(category: ContentCategory, id: &str, frontmatter: &str) -> ContentRecord {
        let content = format!("---\n{}\n---\n", frontmatter);
        let (meta, body) = FrontMatter::parse(&content);
        normalize(category, id, meta, body, parse_date_string("2020-01-01").unwrap())
    }

    fn listings() -> Vec<(ContentCategory, Vec<ContentRecord>)> {
        vec![
            (
                ContentCategory::Blog,
                vec![
                    record(ContentCategory::Blog, "newest-post", "date: 2024-01-01\nfeatured: true"),
                    record(ContentCategory::Blog, "older-post", "date: 2023-01-01\nfeatured: true"),
                ],
            ),
            (
                ContentCategory::Projects,
                vec![record(ContentCategory::Projects, "tracker", "date: 2023-05-01")],
            ),
            (
                ContentCategory::Research,
                (1..=6)
                    .map(|i| {
                        record(
                            ContentCategory::Research,
                            &format!("paper-{}", i),
                            &format!("date: 2022-0{}-01\nfeatured: true", 7 - i),
                        )
                    })
                    .collect(),
            ),
        ]
    }

    fn ids(records: &[ContentRecord]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_curated_keeps_config_order() {
        let config = vec![
            "paper-3".to_string(),
            "older-post".to_string(),
            "paper-1".to_string(),
            "tracker".to_string(),
        ];
        let featured = select_curated(&config, &listings());
        assert_eq!(ids(&featured.blogs), vec!["older-post"]);
        assert_eq!(ids(&featured.projects), vec!["tracker"]);
        assert_eq!(ids(&featured.research), vec!["paper-3", "paper-1"]);
    }

    #[test]
    fn test_curated_skips_unknown_ids() {
        let config = vec!["tracker".to_string(), "ghost-id".to_string()];
        let featured = select_curated(&config, &listings());
        assert!(featured.blogs.is_empty());
        assert_eq!(ids(&featured.projects), vec!["tracker"]);
        assert!(featured.research.is_empty());
    }

    #[test]
    fn test_curated_id_in_two_categories() {
        let mut listings = listings();
        let duplicate = normalize(
            ContentCategory::Projects,
            "paper-1",
            Metadata::new(),
            "",
            parse_date_string("2020-01-01").unwrap(),
        );
        listings[1].1.push(duplicate);
        let featured = select_curated(&["paper-1".to_string()], &listings);
        assert_eq!(ids(&featured.projects), vec!["paper-1"]);
        assert_eq!(ids(&featured.research), vec!["paper-1"]);
    }

    #[test]
    fn test_flagged_respects_limits() {
        let featured = select_flagged(&listings(), &FeaturedLimits::default());
        assert_eq!(ids(&featured.blogs), vec!["newest-post"]);
        assert!(featured.projects.is_empty());
        assert_eq!(
            ids(&featured.research),
            vec!["paper-1", "paper-2", "paper-3", "paper-4"]
        );
    }

    #[test]
    fn test_page_names() {
        assert_eq!("home".parse::<FeaturedPage>().unwrap(), FeaturedPage::Home);
        assert_eq!(FeaturedPage::Research.to_string(), "research");
        assert!("contact".parse::<FeaturedPage>().is_err());
    }
}
