//! Configuration section definitions.

mod build;
mod serve;
mod site;

pub use build::{BuildSection, SitemapConfig};
pub use serve::ServeSection;
pub use site::SiteSection;
