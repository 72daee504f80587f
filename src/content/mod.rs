//! Content module - categories, front-matter, records and rendering

mod category;
pub mod featured;
mod frontmatter;
pub mod loader;
mod markdown;
mod normalize;
mod record;

pub use category::ContentCategory;
pub use featured::{FeaturedContent, FeaturedPage};
pub use frontmatter::{FrontMatter, Metadata};
pub use markdown::MarkdownRenderer;
pub use normalize::normalize;
pub use record::{
    BlogFields, CategoryFields, ContentDate, ContentRecord, ProjectFields, ResearchFields,
    ResearchKind,
};
