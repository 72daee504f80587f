//! Configuration module

mod site;

pub use site::FeaturedLimits;
pub use site::HighlightConfig;
pub use site::SiteConfig;
