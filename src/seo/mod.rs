//! SEO surfaces: JSON-LD structured data and sitemap XML.

pub mod jsonld;
pub mod sitemap;
